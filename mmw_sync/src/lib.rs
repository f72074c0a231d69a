#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Synchronization of assembled playlists into a playlist service.

pub mod catalog;
pub mod local;
pub mod sync;

pub use catalog::{PlaylistCatalog, PlaylistId, RemotePlaylist, TrackRef};
pub use local::{CatalogPlaylist, LocalCatalog};
pub use sync::{SyncError, SyncOptions, SyncReport, sync_playlists};
