//! The remote playlist catalog seen by the synchronizer.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaylistId(pub String);

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A playlist as listed by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePlaylist {
    pub id: PlaylistId,
    pub title: String,
}

/// A track the catalog resolved from a band and title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackRef {
    pub band: Option<String>,
    pub title: String,
}

impl TrackRef {
    /// Stable key, `band - title` or just the title.
    #[must_use]
    pub fn key(&self) -> String {
        match &self.band {
            Some(band) => format!("{band} - {}", self.title),
            None => self.title.clone(),
        }
    }
}

/// Operations the synchronizer needs from a playlist service.
///
/// Implementations own all I/O; the synchronizer only decides what to call.
pub trait PlaylistCatalog {
    /// All playlists currently in the catalog.
    fn playlists(&self) -> anyhow::Result<Vec<RemotePlaylist>>;

    fn create_playlist(
        &mut self,
        title: &str,
        description: Option<&str>,
    ) -> anyhow::Result<RemotePlaylist>;

    /// Number of tracks currently in a playlist.
    fn track_count(&self, playlist: &PlaylistId) -> anyhow::Result<usize>;

    /// Resolve a track, `None` when the catalog does not know it.
    fn find_track(&self, band: Option<&str>, title: &str) -> anyhow::Result<Option<TrackRef>>;

    fn add_track(&mut self, playlist: &PlaylistId, track: &TrackRef) -> anyhow::Result<()>;

    fn love_track(&mut self, track: &TrackRef) -> anyhow::Result<()>;

    fn tag_track(&mut self, track: &TrackRef, tag: &str) -> anyhow::Result<()>;
}
