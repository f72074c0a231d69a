//! Length-based reconciliation of local playlists into a catalog.
//!
//! Playlists are matched by title. Missing ones are created, and each remote
//! playlist only receives the local tracks past its current length. Tracks
//! are not compared, so a remote playlist edited by hand can drift.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

use mmw_core::{Playlist, Record};

use crate::catalog::{PlaylistCatalog, PlaylistId};

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Catalog error while {0}: {1:#}")]
    Catalog(&'static str, anyhow::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Mark every appended track as loved.
    pub love: bool,
    /// Tag added to every appended track.
    pub tag: Option<String>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            love: true,
            tag: Some("metalmittwoch".to_string()),
        }
    }
}

/// What a sync run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Playlists created in the catalog.
    pub created: usize,
    /// Tracks appended across all playlists.
    pub appended: usize,
    /// Tracks that could not be resolved or added.
    pub skipped: usize,
    /// Playlists already at least as long as the local one.
    pub unchanged: usize,
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} playlists created, {} tracks appended, {} tracks skipped, {} playlists up to date",
            self.created, self.appended, self.skipped, self.unchanged
        )
    }
}

/// Bring the catalog up to date with the local playlists.
///
/// # Errors
/// Fails when the catalog cannot list, create or count playlists. A track
/// that cannot be found or added is logged and counted as skipped. A track
/// that was added but could not be loved or tagged still counts as appended.
pub fn sync_playlists<C>(
    catalog: &mut C,
    local: &[Playlist],
    options: &SyncOptions,
) -> Result<SyncReport, SyncError>
where
    C: PlaylistCatalog + ?Sized,
{
    let mut report = SyncReport::default();

    info!("Retrieving existing catalog playlists");
    let mut by_title: HashMap<String, PlaylistId> = catalog
        .playlists()
        .map_err(|e| SyncError::Catalog("listing playlists", e))?
        .into_iter()
        .map(|remote| (remote.title, remote.id))
        .collect();

    for playlist in local {
        if by_title.contains_key(&playlist.title) {
            debug!("Playlist {:?} already exists", playlist.title);
            continue;
        }

        info!("Creating playlist {:?}", playlist.title);
        let created = catalog
            .create_playlist(&playlist.title, playlist.description.as_deref())
            .map_err(|e| SyncError::Catalog("creating a playlist", e))?;
        by_title.insert(playlist.title.clone(), created.id);
        report.created += 1;
    }

    for playlist in local {
        let Some(id) = by_title.get(&playlist.title) else {
            continue;
        };

        let remote_len = catalog
            .track_count(id)
            .map_err(|e| SyncError::Catalog("counting playlist tracks", e))?;
        if remote_len >= playlist.tracks.len() {
            report.unchanged += 1;
            continue;
        }

        info!(
            "Synchronizing {:?}: appending {} tracks",
            playlist.title,
            playlist.tracks.len() - remote_len
        );
        for record in &playlist.tracks[remote_len..] {
            match append_track(catalog, id, record, options) {
                Ok(true) => report.appended += 1,
                Ok(false) => {
                    warn!(
                        "Could not find track {:?} by {:?}, skipping",
                        record.track, record.band
                    );
                    report.skipped += 1;
                }
                Err(e) => {
                    warn!(
                        "Could not add track {:?} by {:?}, skipping: {e:#}",
                        record.track, record.band
                    );
                    report.skipped += 1;
                }
            }
        }
    }

    info!("Sync finished: {}", report);
    Ok(report)
}

fn append_track<C>(
    catalog: &mut C,
    playlist: &PlaylistId,
    record: &Record,
    options: &SyncOptions,
) -> anyhow::Result<bool>
where
    C: PlaylistCatalog + ?Sized,
{
    let Some(track) = catalog.find_track(record.band.as_deref(), &record.track)? else {
        return Ok(false);
    };

    catalog.add_track(playlist, &track)?;

    // Added; love and tag failures from here on are only logged.
    if options.love {
        if let Err(e) = catalog.love_track(&track) {
            warn!("Could not love {:?}: {e:#}", track.key());
        }
    }
    if let Some(tag) = &options.tag {
        if let Err(e) = catalog.tag_track(&track, tag) {
            warn!("Could not tag {:?} with {tag:?}: {e:#}", track.key());
        }
    }

    Ok(true)
}
