//! Configuration for the `mmw` tools, stored as JSON under `~/mmw`.

mod schema;

pub use schema::{Config, PlaylistConfig, ReportConfig, SyncConfig};
