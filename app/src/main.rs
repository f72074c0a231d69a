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

use clap::{Parser, Subcommand};
use mmw_config::Config;
use mmw_core::{Direction, RankField};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    CommandStrategy, InfoInput, InfoStrategy, InitStrategy, PlaylistsInput, PlaylistsStrategy,
    StatsInput, StatsStrategy, SyncInput, SyncStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "mmw")]
#[command(about = "metalmittwoch track log statistics and playlists", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/mmw/config.json
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the most played bands and tracks
    Stats {
        /// Data directory holding the track logs
        #[arg(short = 'd', long)]
        dir: Option<PathBuf>,

        /// Number of entries per report
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Only rank this field (band or track)
        #[arg(short = 'f', long)]
        field: Option<RankField>,

        /// Rank the least played entries instead
        #[arg(long)]
        least: bool,
    },
    /// Print one playlist per issue
    Playlists {
        /// Data directory holding the track logs
        #[arg(short = 'd', long)]
        dir: Option<PathBuf>,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Synchronize playlists into the catalog file
    Sync {
        /// Data directory holding the track logs
        #[arg(short = 'd', long)]
        dir: Option<PathBuf>,

        /// Catalog file to update
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Initialize configuration
    Init,
    /// Show the effective configuration
    Info,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Stats {
            dir,
            limit,
            field,
            least,
        } => {
            let direction = if least {
                Direction::Least
            } else {
                Direction::Most
            };
            StatsStrategy.execute(StatsInput {
                config: load_config(cli.config.as_deref())?,
                dir,
                limit,
                field,
                direction,
            })?;
        }
        Commands::Playlists { dir, json } => {
            PlaylistsStrategy.execute(PlaylistsInput {
                config: load_config(cli.config.as_deref())?,
                dir,
                json,
            })?;
        }
        Commands::Sync { dir, catalog } => {
            SyncStrategy.execute(SyncInput {
                config: load_config(cli.config.as_deref())?,
                dir,
                catalog,
            })?;
        }
        Commands::Init => {
            InitStrategy.execute(())?;
        }
        Commands::Info => {
            InfoStrategy.execute(InfoInput {
                config: load_config(cli.config.as_deref())?,
                config_path: cli.config,
            })?;
        }
        Commands::Version => {
            VersionStrategy.execute(())?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = Config::load_or_default(path)?;
    info!("Using data directory {}", config.data_dir.display());
    Ok(config)
}
