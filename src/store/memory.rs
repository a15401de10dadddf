//! In-memory [`FileStore`] and [`PreferenceStore`] implementations for
//! testing.
//!
//! Uses `HashMap` behind `std::sync::RwLock` for thread safety. Nothing is
//! durable; a fresh instance starts empty.

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::encode;

use super::{FileStore, PreferenceStore};

/// In-memory file store keyed by file name, holding decoded bytes.
#[derive(Default)]
pub struct MemoryFileStore {
    files: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored files. Test helper.
    pub fn len(&self) -> usize {
        self.files.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a file exists under `path`. Test helper.
    pub fn contains(&self, path: &str) -> bool {
        self.files.read().unwrap().contains_key(path)
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn write(&self, path: &str, data: &str) -> Result<()> {
        let bytes = encode::decode_payload(data)?;
        self.files.write().unwrap().insert(path.to_string(), bytes);
        Ok(())
    }

    async fn read(&self, path: &str) -> Result<String> {
        let files = self.files.read().unwrap();
        match files.get(path) {
            Some(bytes) => Ok(encode::encode_bytes(bytes)),
            None => bail!("file not found: {}", path),
        }
    }
}

/// In-memory preference store.
#[derive(Default)]
pub struct MemoryPreferences {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferences {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().unwrap().get(key).cloned())
    }
}
