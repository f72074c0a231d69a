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

//! Record extraction and ranking for event play logs.
//!
//! Text sources go through the [`Extractor`] (which uses [`sanitize`] and the
//! [`LineClassifier`]) into a [`Dataset`]. The dataset feeds [`rank`] for
//! frequency reports and [`assemble`] for per-issue playlists.

pub mod classify;
pub mod error;
pub mod extract;
pub mod playlist;
pub mod rank;
pub mod record;
pub mod report;
pub mod sanitize;

pub use classify::{DEFAULT_HEADER_MARKER, LineClass, LineClassifier, RawTrack};
pub use error::{CoercionError, PatternError, RankError};
pub use extract::{Extractor, extract};
pub use playlist::{Playlist, PlaylistTemplate, assemble, assemble_with, date_from_identifier};
pub use rank::{Direction, RankField, RankedEntry, rank};
pub use record::{Dataset, Record, SourceData, SourceMetadata};
pub use report::{render_band_report, render_track_report, title_case};
pub use sanitize::sanitize;
