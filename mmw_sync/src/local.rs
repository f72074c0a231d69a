//! A catalog stored in a local JSON file.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::catalog::{PlaylistCatalog, PlaylistId, RemotePlaylist, TrackRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPlaylist {
    pub id: PlaylistId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tracks: Vec<TrackRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    playlists: Vec<CatalogPlaylist>,
    #[serde(default)]
    loved: BTreeSet<String>,
    #[serde(default)]
    tags: BTreeMap<String, BTreeSet<String>>,
}

/// JSON-backed catalog; every track lookup succeeds.
#[derive(Debug, Clone, Default)]
pub struct LocalCatalog {
    path: Option<PathBuf>,
    data: CatalogFile,
}

impl LocalCatalog {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the catalog file, starting empty when it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let data = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read catalog {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid catalog file {}", path.display()))?
        } else {
            info!("Catalog {} does not exist yet, starting empty", path.display());
            CatalogFile::default()
        };

        Ok(Self {
            path: Some(path),
            data,
        })
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write the catalog back to its file. In-memory catalogs are not saved.
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write catalog {}", path.display()))?;

        info!("Saved catalog to {}", path.display());
        Ok(())
    }

    #[must_use]
    pub fn playlist_by_title(&self, title: &str) -> Option<&CatalogPlaylist> {
        self.data.playlists.iter().find(|p| p.title == title)
    }

    #[must_use]
    pub fn is_loved(&self, track: &TrackRef) -> bool {
        self.data.loved.contains(&track.key())
    }

    #[must_use]
    pub fn tags_of(&self, track: &TrackRef) -> Vec<&str> {
        self.data
            .tags
            .get(&track.key())
            .map(|tags| tags.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// One past the largest `pl-N` id in the file, so ids stay unique when
    /// playlists were removed by hand.
    fn next_playlist_id(&self) -> PlaylistId {
        let highest = self
            .data
            .playlists
            .iter()
            .filter_map(|p| p.id.0.strip_prefix("pl-")?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        PlaylistId(format!("pl-{}", highest + 1))
    }

    fn playlist_mut(&mut self, id: &PlaylistId) -> anyhow::Result<&mut CatalogPlaylist> {
        self.data
            .playlists
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| anyhow::anyhow!("unknown playlist {id}"))
    }
}

impl PlaylistCatalog for LocalCatalog {
    fn playlists(&self) -> anyhow::Result<Vec<RemotePlaylist>> {
        Ok(self
            .data
            .playlists
            .iter()
            .map(|p| RemotePlaylist {
                id: p.id.clone(),
                title: p.title.clone(),
            })
            .collect())
    }

    fn create_playlist(
        &mut self,
        title: &str,
        description: Option<&str>,
    ) -> anyhow::Result<RemotePlaylist> {
        let id = self.next_playlist_id();
        self.data.playlists.push(CatalogPlaylist {
            id: id.clone(),
            title: title.to_string(),
            description: description.map(str::to_string),
            tracks: Vec::new(),
        });

        Ok(RemotePlaylist {
            id,
            title: title.to_string(),
        })
    }

    fn track_count(&self, playlist: &PlaylistId) -> anyhow::Result<usize> {
        self.data
            .playlists
            .iter()
            .find(|p| &p.id == playlist)
            .map(|p| p.tracks.len())
            .ok_or_else(|| anyhow::anyhow!("unknown playlist {playlist}"))
    }

    fn find_track(&self, band: Option<&str>, title: &str) -> anyhow::Result<Option<TrackRef>> {
        Ok(Some(TrackRef {
            band: band.map(str::to_string),
            title: title.to_string(),
        }))
    }

    fn add_track(&mut self, playlist: &PlaylistId, track: &TrackRef) -> anyhow::Result<()> {
        self.playlist_mut(playlist)?.tracks.push(track.clone());
        Ok(())
    }

    fn love_track(&mut self, track: &TrackRef) -> anyhow::Result<()> {
        self.data.loved.insert(track.key());
        Ok(())
    }

    fn tag_track(&mut self, track: &TrackRef, tag: &str) -> anyhow::Result<()> {
        self.data
            .tags
            .entry(track.key())
            .or_default()
            .insert(tag.to_string());
        Ok(())
    }
}
