//! Normalization of free-text fields.

/// Annotation delimiters, checked in this order.
const ANNOTATION_DELIMITERS: [char; 3] = ['|', '(', '['];

fn is_padding(c: char) -> bool {
    c == '\'' || c == '"' || c.is_whitespace()
}

/// Normalize a raw band or track fragment so repeated plays group together.
///
/// Lowercases, strips surrounding quotes and whitespace, and cuts off
/// trailing annotations such as `(live)` or `[remastered]`. A delimiter at
/// the very start is kept, so `"(parenthetical)"` stays intact.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mut value = lowered.trim_matches(is_padding);

    for delimiter in ANNOTATION_DELIMITERS {
        if let Some(pos) = value.find(delimiter) {
            if pos > 0 {
                value = &value[..pos];
            }
        }
    }

    value.trim_matches(is_padding).to_string()
}
