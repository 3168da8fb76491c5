//! HTTP data source: fetches resources relative to a page origin.

use async_trait::async_trait;

use super::{DataSource, LoadError};

/// User agent sent with resource requests.
const USER_AGENT: &str = concat!("board/", env!("CARGO_PKG_VERSION"));

/// Fetches `GET {base_url}{resource}`. Non-2xx responses are load failures.
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Create a source for the given origin, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LoadError::Client(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource.trim_start_matches('/'))
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self, resource: &str) -> Result<String, LoadError> {
        let url = self.url_for(resource);
        let resp = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| LoadError::Request {
                resource: url.clone(),
                message: e.to_string(),
            })?;

        if !resp.status().is_success() {
            return Err(LoadError::Status {
                resource: url,
                status: resp.status().as_u16(),
            });
        }

        resp.text().await.map_err(|e| LoadError::Request {
            resource: url,
            message: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let source = HttpSource::new("http://localhost:3000/").unwrap();
        assert_eq!(
            source.url_for("/json/users.json"),
            "http://localhost:3000/json/users.json"
        );
    }

    #[test]
    fn url_keeps_base_path() {
        let source = HttpSource::new("https://example.test/board").unwrap();
        assert_eq!(
            source.url_for("/json/products.json"),
            "https://example.test/board/json/products.json"
        );
    }

    #[tokio::test]
    async fn unreachable_host_is_a_request_error() {
        // Port 9 (discard) on localhost is closed on any sane test machine.
        let source = HttpSource::new("http://127.0.0.1:9").unwrap();
        let err = source.fetch("/json/users.json").await.unwrap_err();
        assert!(matches!(err, LoadError::Request { .. }));
    }
}
