//! Frequency ranking of bands and tracks.
//!
//! Values are counted across all records, sorted by count and grouped into
//! tie groups. Groups are emitted whole until the limit is reached, so the
//! result can run past the limit by the size of the last group minus one.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use crate::error::RankError;
use crate::record::{Dataset, Record};

/// Which record field to count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankField {
    Band,
    Track,
}

impl RankField {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Band => "band",
            Self::Track => "track",
        }
    }

    fn value_of(self, record: &Record) -> Option<&str> {
        match self {
            Self::Band => record.band.as_deref(),
            Self::Track => Some(record.track.as_str()),
        }
    }
}

impl FromStr for RankField {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "band" => Ok(Self::Band),
            "track" => Ok(Self::Track),
            _ => Err(RankError::UnknownField(s.to_string())),
        }
    }
}

/// Whether the most or the least frequent values come first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Most,
    Least,
}

impl Direction {
    fn compare(self, a: usize, b: usize) -> Ordering {
        match self {
            Self::Most => b.cmp(&a),
            Self::Least => a.cmp(&b),
        }
    }
}

impl FromStr for Direction {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "most" | "top" => Ok(Self::Most),
            "least" | "bottom" => Ok(Self::Least),
            _ => Err(RankError::UnknownDirection(s.to_string())),
        }
    }
}

/// A field value and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub value: String,
    pub count: usize,
}

/// Rank the values of `field` across every record in the dataset.
///
/// Entries sharing a count are ordered by value. Records without a band are
/// ignored when ranking bands.
///
/// # Errors
/// Returns [`RankError::InvalidLimit`] when `limit` is zero.
pub fn rank(
    dataset: &Dataset,
    field: RankField,
    limit: usize,
    direction: Direction,
) -> Result<Vec<RankedEntry>, RankError> {
    if limit == 0 {
        return Err(RankError::InvalidLimit(limit));
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in dataset.records().filter_map(|record| field.value_of(record)) {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut entries: Vec<RankedEntry> = counts
        .into_iter()
        .map(|(value, count)| RankedEntry {
            value: value.to_string(),
            count,
        })
        .collect();

    entries.sort_by(|a, b| {
        direction
            .compare(a.count, b.count)
            .then_with(|| a.value.cmp(&b.value))
    });

    Ok(take_whole_groups(entries, limit))
}

/// Take tie groups from sorted entries until at least `limit` are taken.
fn take_whole_groups(entries: Vec<RankedEntry>, limit: usize) -> Vec<RankedEntry> {
    let mut ranked = Vec::with_capacity(limit.min(entries.len()));
    let mut remaining = entries.into_iter().peekable();

    while ranked.len() < limit {
        let Some(first) = remaining.next() else {
            break;
        };
        let count = first.count;
        ranked.push(first);

        while let Some(tied) = remaining.next_if(|entry| entry.count == count) {
            ranked.push(tied);
        }
    }

    ranked
}
