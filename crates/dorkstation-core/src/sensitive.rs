//! Advisory detection of templates that look like credential or admin-panel
//! hunting. Annotates only; never blocks or rewrites.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::types::SensitivityFlag;

fn admin_path_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\binurl:\s*(?:admin|login|signup|register|dashboard)\b").expect("admin path regex")
    })
}

fn credential_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(?:password|passwd|api_key|token)\b").expect("credential regex"))
}

fn index_of_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bindex\.of\b").expect("index.of regex"))
}

/// Flags raised by `template`, matched case-insensitively, in fixed order.
pub fn detect_sensitive(template: &str) -> Vec<SensitivityFlag> {
    let t = template.to_lowercase();
    let mut flags = Vec::new();
    if admin_path_re().is_match(&t) {
        flags.push(SensitivityFlag::AdminPaths);
    }
    if credential_re().is_match(&t) {
        flags.push(SensitivityFlag::CredentialTerms);
    }
    if index_of_re().is_match(&t) || t.contains("intitle:\"index of\"") {
        flags.push(SensitivityFlag::DirectoryListing);
    }
    if !flags.is_empty() {
        debug!(?flags, "sensitive operators detected");
    }
    flags
}
