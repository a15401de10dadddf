//! URI fetching capability used by the encode-to-durable-form step.
//!
//! A capture result carries a transient display URI; this module resolves
//! such a URI to raw bytes. [`WebFetcher`] is the default implementation:
//! `http(s)` URIs go through reqwest, while `data:` and `file://` URIs are
//! resolved locally without touching the network.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;

use crate::encode;

/// Resolves a URI to its raw bytes.
#[async_trait]
pub trait UriFetcher: Send + Sync {
    /// Fetch the bytes at `uri`. Failures propagate; no retry.
    async fn fetch(&self, uri: &str) -> Result<Vec<u8>>;
}

/// Default [`UriFetcher`] backed by reqwest for remote URIs.
pub struct WebFetcher {
    client: reqwest::Client,
}

impl WebFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for WebFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UriFetcher for WebFetcher {
    async fn fetch(&self, uri: &str) -> Result<Vec<u8>> {
        if uri.starts_with("data:") {
            return encode::decode_payload(uri)
                .with_context(|| "data URI does not carry a base64 payload".to_string());
        }

        if let Some(path) = uri.strip_prefix("file://") {
            return tokio::fs::read(path)
                .await
                .with_context(|| format!("failed to read {}", path));
        }

        if uri.starts_with("http://") || uri.starts_with("https://") {
            let response = self
                .client
                .get(uri)
                .send()
                .await
                .with_context(|| format!("failed to fetch {}", uri))?;
            let response = response
                .error_for_status()
                .with_context(|| format!("fetch of {} returned an error status", uri))?;
            let bytes = response
                .bytes()
                .await
                .with_context(|| format!("failed to read body of {}", uri))?;
            return Ok(bytes.to_vec());
        }

        bail!("unsupported URI scheme: {}", uri);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_data_uri() {
        let fetcher = WebFetcher::new();
        let uri = encode::to_jpeg_data_uri(b"pixels");
        let bytes = fetcher.fetch(&uri).await.unwrap();
        assert_eq!(bytes, b"pixels");
    }

    #[tokio::test]
    async fn test_fetch_file_uri() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), b"on disk").unwrap();
        let fetcher = WebFetcher::new();
        let uri = format!("file://{}", tmp.path().display());
        let bytes = fetcher.fetch(&uri).await.unwrap();
        assert_eq!(bytes, b"on disk");
    }

    #[tokio::test]
    async fn test_unknown_scheme_is_an_error() {
        let fetcher = WebFetcher::new();
        assert!(fetcher.fetch("blob:abc123").await.is_err());
    }
}
