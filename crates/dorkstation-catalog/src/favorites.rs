use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

use dorkstation_core::types::KEYWORD_KEY;
use dorkstation_core::ChipSequence;

use crate::error::CatalogError;
use crate::templates::Category;

/// A saved template. `id` is derived from category, label and template so
/// the same row can only be saved once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Favorite {
    pub id: String,
    pub label: String,
    pub template: String,
    pub category: Category,
}

impl Favorite {
    pub fn new(category: Category, label: impl Into<String>, template: impl Into<String>) -> Self {
        let label = label.into();
        let template = template.into();
        Self { id: make_id(category, &label, &template), label, template, category }
    }
}

pub fn make_id(category: Category, label: &str, template: &str) -> String {
    format!("{}|{}|{}", category, label, template)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Favorites {
    items: Vec<Favorite>,
}

impl Favorites {
    pub fn new(items: Vec<Favorite>) -> Self {
        Self { items }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|f| f.id == id)
    }

    /// Save the row if it is not a favorite yet, otherwise remove it.
    pub fn toggle(&mut self, category: Category, label: &str, template: &str) -> ToggleOutcome {
        let id = make_id(category, label, template);
        if self.contains(&id) {
            self.items.retain(|f| f.id != id);
            ToggleOutcome::Removed
        } else {
            self.items.push(Favorite::new(category, label, template));
            ToggleOutcome::Added
        }
    }

    /// Save the template composed from `chips`, labelled after its first
    /// phrase chip.
    pub fn add_custom(&mut self, category: Category, chips: &ChipSequence) -> AddOutcome {
        let phrase = chips.first_phrase().filter(|p| !p.is_empty()).map(str::to_string);
        let label = format!("Custom (Visual): {}", phrase.unwrap_or_else(|| format!("{{{}}}", KEYWORD_KEY)));
        let fav = Favorite::new(category, label, chips.compose());
        if self.contains(&fav.id) {
            return AddOutcome::AlreadyPresent;
        }
        self.items.push(fav);
        AddOutcome::Added
    }

    /// Merge an exported favorites array, keeping entries whose id is new.
    ///
    /// Entries without an id, or that do not parse, are skipped. Returns the
    /// number of favorites added.
    pub fn merge_import(&mut self, json_text: &str) -> Result<usize, CatalogError> {
        let data: Value = serde_json::from_str(json_text)?;
        let Value::Array(entries) = data else {
            return Err(CatalogError::NotAnArray);
        };
        let mut seen: HashSet<String> = self.items.iter().map(|f| f.id.clone()).collect();
        let mut added = 0;
        for entry in entries {
            let has_id = entry.get("id").and_then(Value::as_str).is_some_and(|id| !id.is_empty());
            if !has_id {
                continue;
            }
            match serde_json::from_value::<Favorite>(entry) {
                Ok(fav) if seen.insert(fav.id.clone()) => {
                    self.items.push(fav);
                    added += 1;
                }
                Ok(_) => {}
                Err(e) => warn!(error = %e, "skipping malformed favorite"),
            }
        }
        debug!(added, "favorites merged");
        Ok(added)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Favorite> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Favorite] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
