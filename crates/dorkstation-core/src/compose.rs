//! Template compositor: ordered chips in, one query template out.

use tracing::trace;

use crate::types::{Chip, ChipKind, KEYWORD_KEY};

/// Render chips, in order, into a single template string.
///
/// Empty or all-empty input yields `""`. Repeated kinds all emit; nothing is
/// reordered or deduplicated.
pub fn compose(chips: &[Chip]) -> String {
    let parts: Vec<String> = chips.iter().filter_map(fragment).collect();
    let template = collapse_whitespace(&parts.join(" "));
    trace!(chips = chips.len(), template = %template, "composed template");
    template
}

fn fragment(chip: &Chip) -> Option<String> {
    let value = chip.value.trim();
    match chip.kind {
        ChipKind::Phrase => {
            let inner = if value.is_empty() { format!("{{{}}}", KEYWORD_KEY) } else { value.to_string() };
            Some(format!("\"{}\"", inner))
        }
        ChipKind::OrGroup => {
            let terms = split_terms(value);
            if terms.is_empty() { None } else { Some(format!("({})", terms.join(" OR "))) }
        }
        ChipKind::Exclude => {
            let terms: Vec<String> = split_terms(value)
                .into_iter()
                .map(|t| if t.starts_with('-') { t.to_string() } else { format!("-{}", t) })
                .collect();
            if terms.is_empty() { None } else { Some(terms.join(" ")) }
        }
        ChipKind::Site | ChipKind::Filetype | ChipKind::InUrl | ChipKind::InTitle => {
            if value.is_empty() {
                return None;
            }
            chip.kind.prefix().map(|p| format!("{}{}", p, value))
        }
    }
}

fn split_terms(value: &str) -> Vec<&str> {
    value.split(',').map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// Collapse every whitespace run to one space and trim both ends.
pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
