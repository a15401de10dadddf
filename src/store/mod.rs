//! Storage abstraction for the photo gallery.
//!
//! Two capability traits cover everything the gallery persists: photo bytes
//! go through [`FileStore`], the serialized index goes through
//! [`PreferenceStore`]. Backends are pluggable (filesystem, SQLite,
//! in-memory fakes) and the gallery depends on the traits only, never on a
//! global singleton.
//!
//! Implementations must be `Send + Sync` to work with async runtimes.

pub mod disk;
pub mod memory;
pub mod sqlite;

use anyhow::Result;
use async_trait::async_trait;

/// Durable, app-private file storage keyed by file name.
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`write`](FileStore::write) | Persist a base64 payload under a name |
/// | [`read`](FileStore::read) | Read a file back as bare base64 |
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Persist `data` under `path`.
    ///
    /// `data` is base64 text, with or without a `data:…;base64,` prefix;
    /// backends store the decoded bytes. Fails if storage is unavailable.
    async fn write(&self, path: &str, data: &str) -> Result<()>;

    /// Read the file at `path`, returned as a bare base64 string.
    ///
    /// Fails if the path does not exist.
    async fn read(&self, path: &str) -> Result<String>;
}

/// Durable key-value preference storage for small strings.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Set `key` to `value`, overwriting any prior value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Get the value for `key`, or `None` when absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;
}
