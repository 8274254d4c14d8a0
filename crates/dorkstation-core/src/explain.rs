//! Operator explainer and learning-mode query variants.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::types::{Operator, OperatorFinding};

const MAX_VARIANTS: usize = 4;

fn quoted_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""[^"]+""#).expect("quoted phrase regex"))
}

fn or_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bOR\b").expect("OR token regex"))
}

fn exclude_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|\s)-[a-zA-Z]").expect("exclude regex"))
}

/// Report which known operators appear in `text`.
///
/// Each operator is reported at most once and always in canonical order
/// (quotes, site, filetype, intitle, inurl, OR, exclude, parentheses),
/// whatever its position in the input.
pub fn explain_operators(text: &str) -> Vec<OperatorFinding> {
    let lowered = text.to_lowercase();
    Operator::CANONICAL
        .into_iter()
        .filter(|op| detects(*op, text, &lowered))
        .map(OperatorFinding::from)
        .collect()
}

fn detects(op: Operator, text: &str, lowered: &str) -> bool {
    match op {
        Operator::Quotes => quoted_re().is_match(text),
        Operator::Site => lowered.contains("site:"),
        Operator::Filetype => lowered.contains("filetype:"),
        Operator::InTitle => lowered.contains("intitle:"),
        Operator::InUrl => lowered.contains("inurl:"),
        Operator::Or => or_token_re().is_match(text),
        Operator::Exclude => exclude_re().is_match(text),
        Operator::Parentheses => text.contains('(') && text.contains(')'),
    }
}

/// Quick rewrites of `query` for experimentation, deduplicated, at most four.
pub fn variants(query: &str) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }
    let mut candidates = vec![
        format!("{} -site:pinterest.com", query),
        query.replace("site:.gov", "site:.edu"),
    ];
    if !query.contains("filetype:") {
        candidates.push(format!("{} filetype:pdf", query));
    }
    if !query.contains("intitle:") {
        candidates.push(format!("intitle:(report OR resume) {}", query));
    }
    let mut seen = HashSet::new();
    candidates.retain(|v| seen.insert(v.clone()));
    candidates.truncate(MAX_VARIANTS);
    candidates
}
