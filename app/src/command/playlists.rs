use mmw_config::Config;
use mmw_core::{Playlist, assemble_with, title_case};
use std::path::PathBuf;
use tracing::info;

use super::load_dataset;

/// Input parameters for the Playlists command strategy.
#[derive(Debug, Clone)]
pub struct PlaylistsInput {
    pub config: Config,
    /// Optional data directory override
    pub dir: Option<PathBuf>,
    /// Print JSON instead of text
    pub json: bool,
}

/// Strategy for printing the assembled playlists.
#[derive(Debug, Clone, Copy)]
pub struct PlaylistsStrategy;

impl super::CommandStrategy for PlaylistsStrategy {
    type Input = PlaylistsInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let dataset = load_dataset(&input.config, input.dir)?;
        let playlists = assemble_with(&dataset, &input.config.playlist.template());
        info!("Generated {} playlists", playlists.len());

        if input.json {
            println!("{}", serde_json::to_string_pretty(&playlists)?);
        } else {
            for playlist in &playlists {
                print!("{}", render_playlist(playlist));
            }
        }

        Ok(())
    }
}

fn render_playlist(playlist: &Playlist) -> String {
    let mut out = format!("{}\n", playlist.title);
    if let Some(description) = &playlist.description {
        out.push_str(description);
        out.push('\n');
    }

    for record in &playlist.tracks {
        let track = title_case(&record.track);
        let line = match &record.band {
            Some(band) => format!("  {:02}. {} - {track}\n", record.order, title_case(band)),
            None => format!("  {:02}. {track}\n", record.order),
        };
        out.push_str(&line);
    }

    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mmw_core::{assemble, extract};

    #[test]
    fn renders_title_description_and_tracks() {
        let dataset = extract([(
            "2015-03-04/log",
            ["#metalmittwoch #7 (doom)", "  1  Black Sabbath - Paranoid", "  2  Orchid"],
        )]);
        let playlists = assemble(&dataset);

        assert_eq!(
            render_playlist(&playlists[0]),
            "#metalmittwoch issue #7 on 2015-03-04\nSpecial topic: doom\n  01. Black Sabbath - Paranoid\n  02. Orchid\n\n"
        );
    }
}
