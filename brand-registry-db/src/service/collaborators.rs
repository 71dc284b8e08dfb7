use async_trait::async_trait;
use brand_registry_api::error::{RegistryError, RegistryResult};
use std::path::PathBuf;
use uuid::Uuid;

/// One uploaded file, as received from the multipart boundary.
#[derive(Debug, Clone)]
pub struct NamedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Stores uploaded images and returns retrievable URLs.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn store(&self, folder: &str, filename: &str, bytes: &[u8]) -> RegistryResult<String>;
}

/// Authentication collaborator: receives validated credentials and answers
/// with the identity id the profile is bound to.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn create_identity(&self, username: &str, password: &str) -> RegistryResult<Uuid>;
}

/// Filesystem-backed file store. Writes are simple blocking byte copies
/// with no partial-write recovery.
pub struct LocalFileStore {
    root: PathBuf,
    base_url: String,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn store(&self, folder: &str, filename: &str, bytes: &[u8]) -> RegistryResult<String> {
        let dir = self.root.join(folder);
        std::fs::create_dir_all(&dir)
            .map_err(|e| RegistryError::Internal(format!("file store: {e}")))?;
        std::fs::write(dir.join(filename), bytes)
            .map_err(|e| RegistryError::Internal(format!("file store: {e}")))?;
        Ok(format!("{}/{folder}/{filename}", self.base_url))
    }
}
