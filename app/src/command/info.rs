use mmw_config::Config;
use std::path::PathBuf;

/// Input parameters for the Info command strategy.
#[derive(Debug, Clone)]
pub struct InfoInput {
    pub config: Config,
    /// Config file given on the command line, if any
    pub config_path: Option<PathBuf>,
}

/// Strategy for displaying the effective configuration.
///
/// This strategy outputs:
/// - Where the configuration was loaded from
/// - The data directory and whether it exists
/// - Pattern, report, playlist and sync settings
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = InfoInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = input.config;

        println!("=== mmw Configuration ===\n");

        println!("Config File:");
        let config_path = match input.config_path {
            Some(path) => path,
            None => Config::default_path()?,
        };
        let state = if config_path.exists() {
            "loaded"
        } else {
            "not found, using defaults"
        };
        println!("  Path: {} ({state})", config_path.display());
        println!();

        println!("Data:");
        println!("  Directory: {}", config.data_dir.display());
        println!(
            "  Status: {}",
            if config.data_dir.is_dir() {
                "Found"
            } else {
                "Missing"
            }
        );
        println!(
            "  File Glob: {}",
            config.file_glob.as_deref().unwrap_or("(all files)")
        );
        println!("  Header Marker: {}", config.header_marker);
        println!();

        println!("Report:");
        println!("  Limit: {}", config.report.limit);
        println!();

        println!("Playlists:");
        println!("  Event Name: {}", config.playlist.event_name);
        println!("  Topic Prefix: {:?}", config.playlist.topic_prefix);
        println!();

        println!("Sync:");
        println!(
            "  Catalog: {}",
            config.sync.resolved_catalog_path()?.display()
        );
        if config.sync.tag.trim().is_empty() {
            println!("  Tag: (none)");
        } else {
            println!("  Tag: {}", config.sync.tag);
        }

        Ok(())
    }
}
