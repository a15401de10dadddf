//! Core data model: the photo records that make up the gallery index.
//!
//! The persisted index is a JSON array of these records, most-recent-first,
//! stored under a single preference key. The serialized field names
//! (`filepath`, `webviewPath`) are the durable wire format and must not
//! change without a migration.

use serde::{Deserialize, Serialize};

/// A single saved photo in the gallery index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    /// Generated file name (`<epoch-millis>.jpeg`) used as the on-disk key
    /// within the file store.
    pub filepath: String,
    /// Display URI for the presentation layer, either the transient URI
    /// returned by the camera or an inline `data:image/jpeg;base64,…` URI.
    ///
    /// Not durable across restarts: reload recomputes it for every record.
    #[serde(rename = "webviewPath", skip_serializing_if = "Option::is_none")]
    pub webview_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_wire_field_names() {
        let record = PhotoRecord {
            filepath: "1693228800000.jpeg".to_string(),
            webview_path: Some("data:image/jpeg;base64,AAAA".to_string()),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"filepath\""));
        assert!(json.contains("\"webviewPath\""));
    }

    #[test]
    fn test_absent_webview_path_is_omitted() {
        let record = PhotoRecord {
            filepath: "1693228800000.jpeg".to_string(),
            webview_path: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("webviewPath"));
    }

    #[test]
    fn test_deserializes_without_webview_path() {
        let record: PhotoRecord = serde_json::from_str(r#"{"filepath":"1.jpeg"}"#).unwrap();
        assert_eq!(record.filepath, "1.jpeg");
        assert!(record.webview_path.is_none());
    }
}
