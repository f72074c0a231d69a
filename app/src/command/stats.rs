use mmw_config::Config;
use mmw_core::{Direction, RankField, rank, render_band_report, render_track_report};
use std::path::PathBuf;

use super::load_dataset;

/// Input parameters for the Stats command strategy.
#[derive(Debug, Clone)]
pub struct StatsInput {
    pub config: Config,
    /// Optional data directory override
    pub dir: Option<PathBuf>,
    /// Optional report length override
    pub limit: Option<usize>,
    /// Only rank this field; both when unset
    pub field: Option<RankField>,
    pub direction: Direction,
}

/// Strategy for printing the most (or least) played bands and tracks.
#[derive(Debug, Clone, Copy)]
pub struct StatsStrategy;

impl super::CommandStrategy for StatsStrategy {
    type Input = StatsInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let limit = input.limit.unwrap_or(input.config.report.limit);
        let dataset = load_dataset(&input.config, input.dir)?;

        let adjective = match input.direction {
            Direction::Most => "Top",
            Direction::Least => "Bottom",
        };
        let fields = input
            .field
            .map_or_else(|| vec![RankField::Band, RankField::Track], |field| vec![field]);

        for field in fields {
            let entries = rank(&dataset, field, limit, input.direction)?;
            let report = match field {
                RankField::Band => render_band_report(&entries, &format!("{adjective} Bands")),
                RankField::Track => {
                    render_track_report(&dataset, &entries, &format!("{adjective} Tracks"))
                }
            };
            println!("{report}");
        }

        println!(
            "{} records from {} sources, {} unreadable lines",
            dataset.record_count(),
            dataset.sources.len(),
            dataset.unreadable_count
        );

        Ok(())
    }
}
