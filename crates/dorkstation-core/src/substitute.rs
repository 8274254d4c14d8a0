//! Substitution engine for `{name}` placeholders.

use tracing::trace;

use crate::compose::collapse_whitespace;
use crate::types::{SubstitutionMap, KEYWORD_KEY};

/// Fill placeholders in `template`.
///
/// Every named key except `q` is replaced first, in map order. `{q}` is then
/// filled from the map's `q` entry when it is non-blank, else from `keyword`;
/// either way the value is trimmed. Re-rendering output that has no
/// placeholders left returns it unchanged.
pub fn render(template: &str, substitutions: &SubstitutionMap, keyword: &str) -> String {
    let mut out = template.to_string();
    for (name, value) in substitutions.iter().filter(|(k, _)| k.as_str() != KEYWORD_KEY) {
        out = out.replace(&placeholder(name), value);
    }
    let keyword = substitutions
        .get(KEYWORD_KEY)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| keyword.trim());
    out = out.replace(&placeholder(KEYWORD_KEY), keyword);
    let rendered = collapse_whitespace(&out);
    trace!(template, rendered = %rendered, "rendered template");
    rendered
}

fn placeholder(name: &str) -> String {
    format!("{{{}}}", name)
}
