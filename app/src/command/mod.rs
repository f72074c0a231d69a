//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main`.

use mmw_config::Config;
use mmw_core::{Dataset, Extractor, LineClassifier};
use mmw_sources::DirectorySource;
use std::path::PathBuf;
use tracing::info;

mod info;
mod init;
mod playlists;
mod stats;
mod sync;
mod version;

pub use info::{InfoInput, InfoStrategy};
pub use init::InitStrategy;
pub use playlists::{PlaylistsInput, PlaylistsStrategy};
pub use stats::{StatsInput, StatsStrategy};
pub use sync::{SyncInput, SyncStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Read every log below the data directory and extract the dataset.
///
/// `dir` overrides `config.data_dir`.
fn load_dataset(config: &Config, dir: Option<PathBuf>) -> anyhow::Result<Dataset> {
    let root = dir.unwrap_or_else(|| config.data_dir.clone());
    info!("Collecting local data from {}", root.display());

    let mut source = DirectorySource::new(root);
    if let Some(glob) = &config.file_glob {
        source = source.with_glob(glob.clone());
    }
    let sources = source.collect()?;

    let classifier = LineClassifier::new(&config.header_marker)?;
    let dataset = Extractor::new(classifier)
        .extract(sources.into_iter().map(<(String, Vec<String>)>::from));

    Ok(dataset)
}
