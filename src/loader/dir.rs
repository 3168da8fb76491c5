//! Directory data source: serves resources from a local static root.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{DataSource, LoadError};

/// Reads `{root}/json/users.json` etc. from disk.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, resource: &str) -> PathBuf {
        self.root.join(resource.trim_start_matches('/'))
    }
}

#[async_trait]
impl DataSource for DirSource {
    async fn fetch(&self, resource: &str) -> Result<String, LoadError> {
        let path = self.path_for(resource);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| LoadError::Read { path, source: e })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
