//! Suggestion engine: additive edits proposed from the raw keyword and the
//! current template.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::chips::ChipSequence;
use crate::types::{ChipKind, Suggestion, SuggestionAction};

/// Upper bound on suggestions returned per call.
pub const MAX_SUGGESTIONS: usize = 4;

const NOISY_HOST: &str = "pinterest.com";

fn device_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(?:model|router|xr|mk|pro|plus|series|v\d)\b").expect("device token regex")
    })
}

fn institution_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(?:city|county|dept|department|university|school|district)\b")
            .expect("institution token regex")
    })
}

fn has_pdf_filter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)filetype:pdf\b").expect("pdf filter regex"))
}

fn has_gov_or_edu_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)site:\.(?:gov|edu)\b").expect("gov/edu site regex"))
}

fn visual_intent_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"photo|design|inspiration").expect("visual intent regex"))
}

/// Propose up to [`MAX_SUGGESTIONS`] edits.
///
/// Every rule is evaluated; the list keeps rule priority order (device
/// manuals, official domains, exact phrase, noisy host) and drops the
/// lowest-priority entries when capped.
pub fn suggest(keyword: &str, template: &str) -> Vec<Suggestion> {
    let lowered = keyword.to_lowercase();
    let mut out = Vec::new();

    if device_re().is_match(&lowered) && !has_pdf_filter_re().is_match(template) {
        out.push(Suggestion {
            action: SuggestionAction::Add { kind: ChipKind::Filetype, value: "pdf".to_string() },
            reason: "Looks like a device; try manuals/specs.",
        });
    }
    if institution_re().is_match(&lowered) && !has_gov_or_edu_re().is_match(template) {
        out.push(Suggestion {
            action: SuggestionAction::Add { kind: ChipKind::Site, value: ".gov".to_string() },
            reason: "Government domains often have official docs.",
        });
    }
    if !template.contains('"') && keyword.chars().any(char::is_whitespace) {
        out.push(Suggestion {
            action: SuggestionAction::Wrap,
            reason: "Use quotes for exact full-name matching.",
        });
    }
    if !template.contains(&format!("-{}", NOISY_HOST)) && visual_intent_re().is_match(&lowered) {
        out.push(Suggestion {
            action: SuggestionAction::Exclude { term: NOISY_HOST.to_string() },
            reason: "Remove Pinterest results.",
        });
    }

    out.truncate(MAX_SUGGESTIONS);
    debug!(count = out.len(), "suggestions computed");
    out
}

/// Apply a suggestion to the chip sequence.
///
/// `Wrap` fills the first phrase chip with `keyword`, or prepends a new
/// phrase chip when there is none.
pub fn apply_suggestion(chips: &mut ChipSequence, suggestion: &Suggestion, keyword: &str) {
    match &suggestion.action {
        SuggestionAction::Add { kind, value } => {
            chips.push(*kind, value.clone());
        }
        SuggestionAction::Wrap => {
            let first_phrase = chips.iter().find(|c| c.kind == ChipKind::Phrase).map(|c| c.id.clone());
            match first_phrase {
                Some(id) => {
                    chips.update(&id, keyword);
                }
                None => {
                    chips.prepend(ChipKind::Phrase, keyword);
                }
            }
        }
        SuggestionAction::Exclude { term } => {
            chips.push(ChipKind::Exclude, term.clone());
        }
    }
}
