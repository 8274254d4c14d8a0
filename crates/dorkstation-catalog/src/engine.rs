//! Search engines a rendered query can be opened against.

use serde::Serialize;
use url::Url;

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Engine {
    pub key: &'static str,
    pub label: &'static str,
    pub base: &'static str,
    /// Query-string parameter that carries the search text.
    pub param: &'static str,
}

pub const ENGINES: [Engine; 4] = [
    Engine { key: "google", label: "Google", base: "https://www.google.com/search", param: "q" },
    Engine { key: "duck", label: "DuckDuckGo", base: "https://duckduckgo.com/", param: "q" },
    Engine { key: "startpage", label: "Startpage", base: "https://www.startpage.com/do/search", param: "query" },
    Engine { key: "brave", label: "Brave", base: "https://search.brave.com/search", param: "q" },
];

pub fn is_known(key: &str) -> bool {
    ENGINES.iter().any(|e| e.key == key)
}

/// Engine for `key`, falling back to Google.
pub fn get_engine(key: &str) -> &'static Engine {
    ENGINES.iter().find(|e| e.key == key).unwrap_or(&ENGINES[0])
}

pub fn to_search_url(key: &str, query: &str) -> Result<String, CatalogError> {
    let engine = get_engine(key);
    let mut url = Url::parse(engine.base)?;
    url.query_pairs_mut().clear().append_pair(engine.param, query);
    Ok(url.into())
}
