//! Base64 data-URI helpers for the durable photo form.
//!
//! Captured bytes travel through the file store as base64 text. Writes may
//! carry a full `data:image/jpeg;base64,…` URI (the encode-to-durable-form
//! output); reads return a bare base64 payload that the reload path wraps
//! back into a data URI for display.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Prefix used for all inline display URIs produced by this crate.
pub const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Encode raw bytes as an inline JPEG data URI.
pub fn to_jpeg_data_uri(bytes: &[u8]) -> String {
    format!("{}{}", JPEG_DATA_URI_PREFIX, STANDARD.encode(bytes))
}

/// Strip an optional `data:…;base64,` prefix, returning the bare payload.
pub fn strip_data_uri(data: &str) -> &str {
    match data.split_once(";base64,") {
        Some((scheme, payload)) if scheme.starts_with("data:") => payload,
        _ => data,
    }
}

/// Decode a base64 payload that may or may not carry a data-URI prefix.
pub fn decode_payload(data: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(strip_data_uri(data))
        .context("invalid base64 payload")
}

/// Encode raw bytes as a bare base64 string.
pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
