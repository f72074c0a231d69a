//! Line classification against the fixed track and header patterns.
//!
//! Patterns are tried in strict priority order: full track line, title-only
//! track line, header. The first match wins.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CoercionError, PatternError};
use crate::record::{Record, SourceMetadata};
use crate::sanitize::sanitize;

/// Header marker used by the `#metalmittwoch` logs.
pub const DEFAULT_HEADER_MARKER: &str = "#metalmittwoch";

// ASCII digits only.
const FULL_PATTERN: &str =
    r"^ +(?P<order>[0-9]+) +([0-9]+ *[-:])?(?P<band>.*?) *[-:] *(?P<track>.*) *$";
const TITLE_PATTERN: &str = r"^ +(?P<order>[0-9]+) +([0-9]+ *[-:])?(?P<track>.*) *$";
const HEADER_TAIL: &str = r" +(?P<issue>#[0-9]+)( +\((?P<topic>.*)\))? *$";

#[expect(
    clippy::expect_used,
    reason = "Static patterns with an escaped literal marker are always valid"
)]
static DEFAULT_CLASSIFIER: Lazy<LineClassifier> = Lazy::new(|| {
    LineClassifier::new(DEFAULT_HEADER_MARKER).expect("default line patterns must compile")
});

/// Track fields as captured from the line, before coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTrack<'a> {
    pub order: &'a str,
    pub band: Option<&'a str>,
    pub track: &'a str,
}

impl RawTrack<'_> {
    /// Turn the captured fields into a [`Record`].
    ///
    /// # Errors
    /// Fails when the order does not fit a `u32` or the track title is empty
    /// once sanitized.
    pub fn coerce(&self) -> Result<Record, CoercionError> {
        let order = self
            .order
            .parse::<u32>()
            .map_err(|_| CoercionError::InvalidOrder(self.order.to_string()))?;

        let track = sanitize(self.track);
        if track.is_empty() {
            return Err(CoercionError::EmptyTrack);
        }

        let band = self.band.map(sanitize).filter(|band| !band.is_empty());

        Ok(Record { order, band, track })
    }
}

/// Outcome of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    TrackWithBand(RawTrack<'a>),
    TrackOnly(RawTrack<'a>),
    Header(SourceMetadata),
    Unmatched,
}

/// The compiled line patterns.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    full: Regex,
    title: Regex,
    header: Regex,
}

impl LineClassifier {
    /// Compile the patterns for the given header marker.
    ///
    /// The marker is matched literally.
    pub fn new(header_marker: &str) -> Result<Self, PatternError> {
        if header_marker.is_empty() {
            return Err(PatternError::EmptyMarker);
        }

        let header = format!("^{}{HEADER_TAIL}", regex::escape(header_marker));

        Ok(Self {
            full: compile("full", FULL_PATTERN)?,
            title: compile("title", TITLE_PATTERN)?,
            header: compile("header", &header)?,
        })
    }

    /// Process-wide classifier for [`DEFAULT_HEADER_MARKER`].
    #[must_use]
    pub fn shared() -> &'static Self {
        &DEFAULT_CLASSIFIER
    }

    #[must_use]
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let line = line.trim_end_matches(['\r', '\n']);

        if let Some(caps) = self.full.captures(line) {
            return LineClass::TrackWithBand(RawTrack {
                order: caps.name("order").map_or("", |m| m.as_str()),
                band: caps.name("band").map(|m| m.as_str()),
                track: caps.name("track").map_or("", |m| m.as_str()),
            });
        }

        if let Some(caps) = self.title.captures(line) {
            return LineClass::TrackOnly(RawTrack {
                order: caps.name("order").map_or("", |m| m.as_str()),
                band: None,
                track: caps.name("track").map_or("", |m| m.as_str()),
            });
        }

        if let Some(caps) = self.header.captures(line) {
            return LineClass::Header(SourceMetadata {
                issue: caps
                    .name("issue")
                    .map_or_else(String::new, |m| m.as_str().to_string()),
                topic: caps.name("topic").map(|m| m.as_str().to_string()),
            });
        }

        LineClass::Unmatched
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::shared().clone()
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError::Regex { name, source })
}
