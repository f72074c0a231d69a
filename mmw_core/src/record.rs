//! Typed records produced by extraction.
//!
//! A [`Dataset`] is built once by the extractor and only read afterwards by
//! the ranking engine and the playlist assembler.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One parsed "track played" line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Position declared on the line within its source.
    pub order: u32,
    /// Sanitized band name; `None` for title-only lines.
    pub band: Option<String>,
    /// Sanitized track title, never empty.
    pub track: String,
}

/// Header information attached to a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Issue token including the leading `#`, e.g. `#12`.
    pub issue: String,
    pub topic: Option<String>,
}

impl SourceMetadata {
    /// Numeric part of the issue token.
    #[must_use]
    pub fn issue_number(&self) -> Option<u64> {
        self.issue.strip_prefix('#')?.parse().ok()
    }
}

/// Everything extracted from a single source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceData {
    /// Records keyed by their declared order; a later line with the same
    /// order replaces the earlier one.
    pub records: BTreeMap<u32, Record>,
    pub metadata: Option<SourceMetadata>,
}

/// The collected result of one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub sources: BTreeMap<String, SourceData>,
    /// Lines that matched a track pattern but failed coercion.
    pub unreadable_count: usize,
}

impl Dataset {
    /// All records, in source order and then by declared order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.sources
            .values()
            .flat_map(|source| source.records.values())
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.sources.values().map(|source| source.records.len()).sum()
    }

    /// Band of the first record carrying the given track title.
    #[must_use]
    pub fn band_of_track(&self, track: &str) -> Option<&str> {
        self.records()
            .find(|record| record.track == track)
            .and_then(|record| record.band.as_deref())
    }
}
