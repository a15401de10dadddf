//! Camera capability trait and capture options.
//!
//! The gallery never talks to device hardware directly; it depends on this
//! trait and the host application injects a platform implementation. Tests
//! inject a stub that returns canned `data:` URIs.
//!
//! Capture failures are typed so callers can distinguish a permission
//! refusal from a user cancellation; neither is retried at this layer.

use async_trait::async_trait;
use thiserror::Error;

/// How the capture result is returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultType {
    /// A transient, process-local display URI.
    Uri,
}

/// Where the photo comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraSource {
    /// Live capture from the device camera.
    Camera,
    /// Existing item from the device photo library.
    Photos,
}

/// Options passed to [`Camera::get_photo`].
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    pub result_type: ResultType,
    pub source: CameraSource,
    /// JPEG quality, 0–100.
    pub quality: u8,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            result_type: ResultType::Uri,
            source: CameraSource::Camera,
            quality: 100,
        }
    }
}

/// A successful capture result.
///
/// `web_path` is only valid for the current process session; durable storage
/// must re-encode the bytes it points at.
#[derive(Debug, Clone)]
pub struct CapturedPhoto {
    pub web_path: String,
}

/// Errors surfaced by a camera implementation.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("camera permission denied")]
    PermissionDenied,
    #[error("capture cancelled by user")]
    Cancelled,
    #[error("camera unavailable: {0}")]
    Unavailable(String),
}

/// Device camera capability.
///
/// Implementations must be `Send + Sync`; the gallery holds one behind an
/// `Arc<dyn Camera>`.
#[async_trait]
pub trait Camera: Send + Sync {
    /// Trigger an interactive capture and return the transient result.
    async fn get_photo(&self, options: &CaptureOptions) -> Result<CapturedPhoto, CameraError>;
}
