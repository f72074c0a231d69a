use mmw_config::Config;
use mmw_core::assemble_with;
use mmw_sync::{LocalCatalog, SyncOptions, sync_playlists};
use std::path::PathBuf;
use tracing::info;

use super::load_dataset;

/// Input parameters for the Sync command strategy.
#[derive(Debug, Clone)]
pub struct SyncInput {
    pub config: Config,
    /// Optional data directory override
    pub dir: Option<PathBuf>,
    /// Optional catalog file override
    pub catalog: Option<PathBuf>,
}

/// Strategy for reconciling the assembled playlists into the catalog file.
///
/// Playlists are matched by title, missing ones are created and existing
/// ones only receive the tracks past their current length.
#[derive(Debug, Clone, Copy)]
pub struct SyncStrategy;

impl super::CommandStrategy for SyncStrategy {
    type Input = SyncInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let dataset = load_dataset(&input.config, input.dir)?;

        info!("Generating local playlists");
        let playlists = assemble_with(&dataset, &input.config.playlist.template());

        let catalog_path = match input.catalog {
            Some(path) => path,
            None => input.config.sync.resolved_catalog_path()?,
        };
        let mut catalog = LocalCatalog::open(&catalog_path)?;

        let tag = input.config.sync.tag.trim();
        let options = SyncOptions {
            love: true,
            tag: (!tag.is_empty()).then(|| tag.to_string()),
        };

        let report = sync_playlists(&mut catalog, &playlists, &options)?;
        catalog.save()?;

        println!("{report}");
        Ok(())
    }
}
