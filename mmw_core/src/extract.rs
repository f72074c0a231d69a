//! Extraction of records from named text sources.

use std::collections::btree_map::Entry;
use tracing::{debug, info, warn};

use crate::classify::{LineClass, LineClassifier};
use crate::record::{Dataset, SourceData};

/// Runs the line classifier over every line of every source.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    classifier: LineClassifier,
}

impl Extractor {
    #[must_use]
    pub const fn new(classifier: LineClassifier) -> Self {
        Self { classifier }
    }

    /// Build a [`Dataset`] from `(identifier, lines)` pairs.
    ///
    /// Unmatched lines are skipped. Track lines that fail coercion are
    /// dropped and counted in [`Dataset::unreadable_count`].
    pub fn extract<I, S, L, T>(&self, sources: I) -> Dataset
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut dataset = Dataset::default();

        for (identifier, lines) in sources {
            let identifier = identifier.into();
            let mut source = SourceData::default();

            for line in lines {
                self.ingest_line(
                    &identifier,
                    line.as_ref(),
                    &mut source,
                    &mut dataset.unreadable_count,
                );
            }

            debug!(
                "Extracted {} records from {} (header: {})",
                source.records.len(),
                identifier,
                source.metadata.is_some()
            );

            if dataset.sources.insert(identifier.clone(), source).is_some() {
                warn!("Source {} was given twice, keeping the later one", identifier);
            }
        }

        info!(
            "Extracted {} records from {} sources ({} unreadable lines)",
            dataset.record_count(),
            dataset.sources.len(),
            dataset.unreadable_count
        );

        dataset
    }

    fn ingest_line(
        &self,
        identifier: &str,
        line: &str,
        source: &mut SourceData,
        unreadable_count: &mut usize,
    ) {
        match self.classifier.classify(line) {
            LineClass::TrackWithBand(raw) | LineClass::TrackOnly(raw) => match raw.coerce() {
                Ok(record) => match source.records.entry(record.order) {
                    Entry::Occupied(mut slot) => {
                        debug!(
                            "Order {} repeated in {}, replacing {:?}",
                            record.order,
                            identifier,
                            slot.get().track
                        );
                        slot.insert(record);
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(record);
                    }
                },
                Err(e) => {
                    debug!("Unreadable line in {}: {:?} ({})", identifier, line, e);
                    *unreadable_count += 1;
                }
            },
            LineClass::Header(metadata) => {
                if let Some(previous) = source.metadata.replace(metadata) {
                    debug!(
                        "Header repeated in {}, replacing issue {}",
                        identifier, previous.issue
                    );
                }
            }
            LineClass::Unmatched => {}
        }
    }
}

/// Extract with the default `#metalmittwoch` patterns.
pub fn extract<I, S, L, T>(sources: I) -> Dataset
where
    I: IntoIterator<Item = (S, L)>,
    S: Into<String>,
    L: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    Extractor::default().extract(sources)
}
