//! Plain-text rendering of ranking results.

use crate::rank::RankedEntry;
use crate::record::Dataset;

/// Capitalize every letter that does not follow another letter.
///
/// `"black sabbath"` becomes `"Black Sabbath"`, `"ac/dc"` becomes `"Ac/Dc"`.
#[must_use]
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for c in value.chars() {
        if previous_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }

    out
}

fn push_heading(out: &mut String, heading: &str) {
    out.push_str(heading);
    out.push('\n');
    out.push_str(&"-".repeat(heading.chars().count()));
    out.push('\n');
}

/// Render `#01: Value (3 times)` lines under an underlined heading.
#[must_use]
pub fn render_band_report(entries: &[RankedEntry], heading: &str) -> String {
    let mut out = String::new();
    push_heading(&mut out, heading);

    for (index, entry) in entries.iter().enumerate() {
        let line = format!(
            "#{:02}: {} ({} times)\n",
            index + 1,
            title_case(&entry.value),
            entry.count
        );
        out.push_str(&line);
    }

    out
}

/// Render `#01: Band - Track (3 times)` lines, with the band taken from the
/// first record that carries the track.
#[must_use]
pub fn render_track_report(dataset: &Dataset, entries: &[RankedEntry], heading: &str) -> String {
    let mut out = String::new();
    push_heading(&mut out, heading);

    for (index, entry) in entries.iter().enumerate() {
        let track = title_case(&entry.value);
        let line = match dataset.band_of_track(&entry.value) {
            Some(band) => format!(
                "#{:02}: {} - {track} ({} times)\n",
                index + 1,
                title_case(band),
                entry.count
            ),
            None => format!("#{:02}: {track} ({} times)\n", index + 1, entry.count),
        };
        out.push_str(&line);
    }

    out
}
