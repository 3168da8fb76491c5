//! Data loader: fetches the two static resources once at page mount.
//!
//! Both resources are requested concurrently and settle independently, so a
//! broken `products.json` never prevents users from loading (and vice versa).
//! Failures are logged and leave the affected collection empty; they are
//! never surfaced to the page.

pub mod dir;
pub mod http;

use std::path::PathBuf;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::DataConfig;
use crate::constants::{PRODUCTS_RESOURCE, USERS_RESOURCE};
use crate::models::{Product, ProductsDocument, User, UsersDocument};

pub use dir::DirSource;
pub use http::HttpSource;

/// Errors while fetching or decoding a static resource.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("request for {resource} failed: {message}")]
    Request { resource: String, message: String },

    #[error("{resource} returned HTTP {status}")]
    Status { resource: String, status: u16 },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {resource}: {source}")]
    Parse {
        resource: String,
        source: serde_json::Error,
    },

    #[error("HTTP client could not be built: {0}")]
    Client(String),
}

/// Where the static resources live.
///
/// `resource` is always an absolute path relative to the page origin,
/// e.g. `/json/users.json`.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the raw body of a resource.
    async fn fetch(&self, resource: &str) -> Result<String, LoadError>;

    /// Short description of the origin for diagnostics.
    fn describe(&self) -> String;
}

/// The canonical collections, in source-file order.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    pub users: Vec<User>,
    pub products: Vec<Product>,
}

/// Result of the one-shot mount load.
///
/// The catalogue is always usable; the error fields record which resource
/// failed, if any.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub catalogue: Catalogue,
    pub users_error: Option<String>,
    pub products_error: Option<String>,
}

impl LoadOutcome {
    /// Returns `true` when both resources loaded.
    pub fn is_complete(&self) -> bool {
        self.users_error.is_none() && self.products_error.is_none()
    }
}

/// Build the data source selected by configuration.
///
/// A configured base URL wins over the local directory.
pub fn source_from_config(config: &DataConfig) -> Result<Box<dyn DataSource>, LoadError> {
    match config.base_url {
        Some(ref base_url) => Ok(Box::new(HttpSource::new(base_url)?)),
        None => Ok(Box::new(DirSource::new(&config.dir))),
    }
}

/// Load both resources concurrently. Never fails; see [`LoadOutcome`].
pub async fn load(source: &dyn DataSource) -> LoadOutcome {
    tracing::debug!(origin = %source.describe(), "loading static resources");

    let (users, products) = tokio::join!(
        fetch_document::<UsersDocument>(source, USERS_RESOURCE),
        fetch_document::<ProductsDocument>(source, PRODUCTS_RESOURCE),
    );

    let (users, users_error) = settle(users.map(|doc| doc.users), USERS_RESOURCE);
    let (products, products_error) = settle(products.map(|doc| doc.products), PRODUCTS_RESOURCE);

    LoadOutcome {
        catalogue: Catalogue { users, products },
        users_error,
        products_error,
    }
}

async fn fetch_document<T: DeserializeOwned>(
    source: &dyn DataSource,
    resource: &str,
) -> Result<T, LoadError> {
    let body = source.fetch(resource).await?;
    serde_json::from_str(&body).map_err(|e| LoadError::Parse {
        resource: resource.to_string(),
        source: e,
    })
}

fn settle<T>(result: Result<Vec<T>, LoadError>, resource: &str) -> (Vec<T>, Option<String>) {
    match result {
        Ok(items) => {
            tracing::debug!(resource, count = items.len(), "resource loaded");
            (items, None)
        }
        Err(e) => {
            tracing::error!(resource, error = %e, "failed to load resource");
            (Vec::new(), Some(e.to_string()))
        }
    }
}
