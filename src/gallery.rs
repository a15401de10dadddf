//! The photo gallery service: capture-and-add and reload.
//!
//! [`PhotoGallery`] owns the in-memory index and drives the injected
//! capabilities: the camera produces a transient display URI, the fetcher
//! resolves it to bytes, the file store keeps the durable copy, and the
//! preference store keeps the serialized index under a fixed key.
//!
//! The index is the sole durable source of truth for gallery membership. A
//! file written to storage but not referenced by the index is orphaned and
//! never cleaned up.
//!
//! Both operations take `&mut self`: the index has exactly one owner and is
//! never mutated concurrently. If two gallery instances share a preference
//! store, the last writer wins.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::debug;

use crate::camera::{Camera, CaptureOptions, CapturedPhoto};
use crate::config::Config;
use crate::encode::{self, JPEG_DATA_URI_PREFIX};
use crate::fetch::{UriFetcher, WebFetcher};
use crate::models::PhotoRecord;
use crate::store::sqlite::SqlitePreferences;
use crate::store::{disk::DiskFileStore, FileStore, PreferenceStore};

/// Ordered photo index plus the capabilities needed to maintain it.
pub struct PhotoGallery {
    camera: Arc<dyn Camera>,
    fetcher: Arc<dyn UriFetcher>,
    files: Arc<dyn FileStore>,
    prefs: Arc<dyn PreferenceStore>,
    storage_key: String,
    quality: u8,
    photos: Vec<PhotoRecord>,
    last_name_millis: i64,
}

impl PhotoGallery {
    /// Build a gallery with the default storage key (`"photos"`) and
    /// capture quality (100).
    pub fn new(
        camera: Arc<dyn Camera>,
        fetcher: Arc<dyn UriFetcher>,
        files: Arc<dyn FileStore>,
        prefs: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self::with_settings(camera, fetcher, files, prefs, "photos", 100)
    }

    /// Build a gallery with an explicit storage key and capture quality.
    pub fn with_settings(
        camera: Arc<dyn Camera>,
        fetcher: Arc<dyn UriFetcher>,
        files: Arc<dyn FileStore>,
        prefs: Arc<dyn PreferenceStore>,
        storage_key: impl Into<String>,
        quality: u8,
    ) -> Self {
        Self {
            camera,
            fetcher,
            files,
            prefs,
            storage_key: storage_key.into(),
            quality,
            photos: Vec::new(),
            last_name_millis: 0,
        }
    }

    /// Open a gallery on the concrete backends named by `config`: a
    /// [`DiskFileStore`] for photo bytes, [`SqlitePreferences`] for the
    /// index, and a [`WebFetcher`] for URI resolution.
    pub async fn open(config: &Config, camera: Arc<dyn Camera>) -> Result<Self> {
        let files = Arc::new(DiskFileStore::new(&config.storage.photos_dir)?);
        let prefs = Arc::new(SqlitePreferences::connect(&config.storage.preferences_db).await?);
        Ok(Self::with_settings(
            camera,
            Arc::new(WebFetcher::new()),
            files,
            prefs,
            config.gallery.storage_key.clone(),
            config.camera.quality,
        ))
    }

    /// The current index, most-recently-added first.
    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }

    /// Capture a photo and add it to the gallery.
    ///
    /// Invokes the camera interactively, persists the captured bytes under a
    /// timestamp-derived file name, inserts the new record at the head of
    /// the index, and writes the whole serialized index to the preference
    /// store. The persist step is awaited; its failure surfaces here, but
    /// the in-memory insertion is not rolled back.
    ///
    /// A capture failure (permission denied, cancelled) propagates
    /// unmodified and leaves both storage and the index untouched.
    pub async fn add_new_photo(&mut self) -> Result<&PhotoRecord> {
        let options = CaptureOptions {
            quality: self.quality,
            ..Default::default()
        };
        let captured = self.camera.get_photo(&options).await?;

        let saved = self.save_photo(&captured).await?;
        debug!(filepath = %saved.filepath, "photo saved");
        self.photos.insert(0, saved);
        self.persist_index().await?;
        Ok(&self.photos[0])
    }

    /// Reload the index from the preference store and recompute every
    /// record's display source from stored file bytes.
    ///
    /// An absent preference value yields an empty index. Record
    /// reconstruction is strictly sequential and fail-fast: the first file
    /// read failure aborts the remaining records and propagates. On
    /// success the in-memory index is replaced wholesale, most-recent-first
    /// ordering preserved, and every record carries a freshly computed
    /// inline data URI.
    pub async fn load_saved(&mut self) -> Result<()> {
        let stored = self.prefs.get(&self.storage_key).await?;
        let mut photos: Vec<PhotoRecord> = match stored {
            Some(value) => {
                serde_json::from_str(&value).context("malformed stored photo index")?
            }
            None => Vec::new(),
        };

        for photo in &mut photos {
            let data = self
                .files
                .read(&photo.filepath)
                .await
                .with_context(|| format!("failed to load photo {}", photo.filepath))?;
            // Persisted display URIs were never durable; always recompute.
            photo.webview_path = Some(format!("{}{}", JPEG_DATA_URI_PREFIX, data));
        }

        debug!(count = photos.len(), "photo index reloaded");
        self.photos = photos;
        Ok(())
    }

    /// Encode the captured photo to its durable form and write it to the
    /// file store under a fresh timestamp-derived name.
    async fn save_photo(&mut self, captured: &CapturedPhoto) -> Result<PhotoRecord> {
        let base64_data = self.read_as_base64(&captured.web_path).await?;
        let file_name = self.next_file_name();
        self.files.write(&file_name, &base64_data).await?;

        Ok(PhotoRecord {
            filepath: file_name,
            webview_path: Some(captured.web_path.clone()),
        })
    }

    /// Fetch the bytes behind a transient display URI and wrap them in a
    /// `data:image/jpeg;base64,…` string suitable for the file store.
    async fn read_as_base64(&self, uri: &str) -> Result<String> {
        let bytes = self
            .fetcher
            .fetch(uri)
            .await
            .with_context(|| format!("failed to read captured photo at {}", uri))?;
        Ok(encode::to_jpeg_data_uri(&bytes))
    }

    async fn persist_index(&self) -> Result<()> {
        let serialized = serde_json::to_string(&self.photos)?;
        self.prefs
            .set(&self.storage_key, &serialized)
            .await
            .context("failed to persist photo index")?;
        debug!(count = self.photos.len(), "photo index persisted");
        Ok(())
    }

    /// Epoch-millisecond file name, bumped when two captures land in the
    /// same millisecond so names stay unique within a process.
    fn next_file_name(&mut self) -> String {
        let mut millis = Utc::now().timestamp_millis();
        if millis <= self.last_name_millis {
            millis = self.last_name_millis + 1;
        }
        self.last_name_millis = millis;
        format!("{}.jpeg", millis)
    }
}
