//! # Photokeep
//!
//! A capability-driven photo capture and gallery persistence library.
//!
//! Photokeep captures photos through an injected [`Camera`](camera::Camera)
//! capability, persists each capture to an injected
//! [`FileStore`](store::FileStore), and keeps an ordered, JSON-serialized
//! index of saved photos in an injected
//! [`PreferenceStore`](store::PreferenceStore). On startup the index is
//! reloaded and every record's display source is recomputed from stored
//! bytes.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌───────────────┐   ┌─────────────┐
//! │  Camera  │──▶│ PhotoGallery  │──▶│  FileStore  │
//! │ (device) │   │ index (Vec)   │   │ <millis>.jpeg│
//! └──────────┘   └──────┬────────┘   └─────────────┘
//!                       │
//!                       ▼
//!                ┌───────────────┐
//!                │PreferenceStore│
//!                │ "photos" = [… │
//!                └───────────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Photo record and persisted index shape |
//! | [`camera`] | Camera capability trait and capture options |
//! | [`fetch`] | URI-to-bytes fetching capability |
//! | [`encode`] | base64 data-URI helpers |
//! | [`store`] | File and preference storage traits + backends |
//! | [`gallery`] | Capture-and-add and reload operations |

pub mod camera;
pub mod config;
pub mod encode;
pub mod fetch;
pub mod gallery;
pub mod models;
pub mod store;
