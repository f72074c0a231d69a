//! Assembly of per-issue playlists from extracted sources.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::record::{Dataset, Record, SourceData, SourceMetadata};

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("Static regex pattern is guaranteed to be valid")
});

/// Fixed text used to build playlist titles and descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistTemplate {
    pub event_name: String,
    pub topic_prefix: String,
}

impl Default for PlaylistTemplate {
    fn default() -> Self {
        Self {
            event_name: crate::classify::DEFAULT_HEADER_MARKER.to_string(),
            topic_prefix: "Special topic: ".to_string(),
        }
    }
}

impl PlaylistTemplate {
    #[must_use]
    pub fn title(&self, issue: &str, date: Option<NaiveDate>) -> String {
        match date {
            Some(date) => format!("{} issue {issue} on {date}", self.event_name),
            None => format!("{} issue {issue}", self.event_name),
        }
    }

    #[must_use]
    pub fn description(&self, topic: Option<&str>) -> Option<String> {
        topic
            .filter(|topic| !topic.is_empty())
            .map(|topic| format!("{}{topic}", self.topic_prefix))
    }
}

/// An ordered playlist for one issue of the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub title: String,
    pub description: Option<String>,
    pub issue: String,
    pub date: Option<NaiveDate>,
    /// Tracks sorted by ascending order.
    pub tracks: Vec<Record>,
}

/// Last `YYYY-MM-DD` in the identifier that is a real calendar date.
#[must_use]
pub fn date_from_identifier(identifier: &str) -> Option<NaiveDate> {
    DATE_PATTERN
        .find_iter(identifier)
        .filter_map(|m| NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok())
        .last()
}

/// Build playlists for every source with a header, ordered by issue number.
#[must_use]
pub fn assemble(dataset: &Dataset) -> Vec<Playlist> {
    assemble_with(dataset, &PlaylistTemplate::default())
}

/// Like [`assemble`], with custom title and description text.
#[must_use]
pub fn assemble_with(dataset: &Dataset, template: &PlaylistTemplate) -> Vec<Playlist> {
    let mut by_issue: BTreeMap<u64, Playlist> = BTreeMap::new();

    for (identifier, source) in &dataset.sources {
        let Some(metadata) = &source.metadata else {
            debug!("Skipping {}: no header line", identifier);
            continue;
        };
        let Some(number) = metadata.issue_number() else {
            warn!(
                "Skipping {}: issue {:?} has no usable number",
                identifier, metadata.issue
            );
            continue;
        };

        let playlist = build_playlist(identifier, metadata, source, template);
        if let Some(replaced) = by_issue.insert(number, playlist) {
            warn!(
                "Issue {} appears in several sources, {} replaces {:?}",
                metadata.issue, identifier, replaced.title
            );
        }
    }

    by_issue.into_values().collect()
}

fn build_playlist(
    identifier: &str,
    metadata: &SourceMetadata,
    source: &SourceData,
    template: &PlaylistTemplate,
) -> Playlist {
    let date = date_from_identifier(identifier);

    Playlist {
        title: template.title(&metadata.issue, date),
        description: template.description(metadata.topic.as_deref()),
        issue: metadata.issue.clone(),
        date,
        tracks: source.records.values().cloned().collect(),
    }
}
