//! Filesystem-backed [`FileStore`].
//!
//! Stores each photo as a regular file under an app-private root directory.
//! Payloads arrive as base64 (optionally data-URI wrapped) and are written
//! decoded; reads return bare base64 of the file bytes.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::encode;

use super::FileStore;

/// App-private directory file store.
pub struct DiskFileStore {
    root: PathBuf,
}

impl DiskFileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .with_context(|| format!("failed to create photo directory {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

#[async_trait]
impl FileStore for DiskFileStore {
    async fn write(&self, path: &str, data: &str) -> Result<()> {
        let bytes = encode::decode_payload(data)?;
        let target = self.resolve(path);
        tokio::fs::write(&target, &bytes)
            .await
            .with_context(|| format!("failed to write {}", target.display()))?;
        Ok(())
    }

    async fn read(&self, path: &str) -> Result<String> {
        let target = self.resolve(path);
        let bytes = tokio::fs::read(&target)
            .await
            .with_context(|| format!("failed to read {}", target.display()))?;
        Ok(encode::encode_bytes(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_decodes_data_uri_payload() {
        let tmp = TempDir::new().unwrap();
        let store = DiskFileStore::new(tmp.path()).unwrap();

        let payload = encode::to_jpeg_data_uri(b"jpeg bytes");
        store.write("1700000000000.jpeg", &payload).await.unwrap();

        let on_disk = std::fs::read(tmp.path().join("1700000000000.jpeg")).unwrap();
        assert_eq!(on_disk, b"jpeg bytes");
    }

    #[tokio::test]
    async fn test_read_returns_bare_base64() {
        let tmp = TempDir::new().unwrap();
        let store = DiskFileStore::new(tmp.path()).unwrap();
        std::fs::write(tmp.path().join("a.jpeg"), b"raw").unwrap();

        let data = store.read("a.jpeg").await.unwrap();
        assert!(!data.starts_with("data:"));
        assert_eq!(encode::decode_payload(&data).unwrap(), b"raw");
    }

    #[tokio::test]
    async fn test_missing_file_read_fails() {
        let tmp = TempDir::new().unwrap();
        let store = DiskFileStore::new(tmp.path()).unwrap();
        assert!(store.read("nope.jpeg").await.is_err());
    }

    #[test]
    fn test_new_creates_root() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a/b/photos");
        DiskFileStore::new(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
