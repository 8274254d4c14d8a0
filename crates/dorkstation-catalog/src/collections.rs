//! Named sets of saved templates.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use tracing::debug;
use twox_hash::XxHash64;

use crate::error::CatalogError;
use crate::favorites::{AddOutcome, Favorite};
use crate::templates::Category;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionItem {
    pub label: String,
    pub template: String,
    pub category: Category,
}

impl From<&Favorite> for CollectionItem {
    fn from(f: &Favorite) -> Self {
        Self { label: f.label.clone(), template: f.template.clone(), category: f.category }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<CollectionItem>,
    #[serde(rename = "createdAt")]
    pub created_at: u64,
    #[serde(rename = "updatedAt")]
    pub updated_at: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Collections {
    items: Vec<Collection>,
}

/// `COLL_` plus six hex digits of an XxHash64 over name, time and salt.
fn collection_id(name: &str, now_ms: u64, salt: u64) -> String {
    let mut hasher = XxHash64::with_seed(0);
    name.hash(&mut hasher);
    now_ms.hash(&mut hasher);
    salt.hash(&mut hasher);
    format!("COLL_{:06x}", hasher.finish() & 0xff_ffff)
}

impl Collections {
    pub fn create(&mut self, name: &str, description: &str, now_ms: u64) -> &Collection {
        let mut salt = self.items.len() as u64;
        let mut id = collection_id(name, now_ms, salt);
        while self.get(&id).is_some() {
            salt += 1;
            id = collection_id(name, now_ms, salt);
        }
        debug!(%id, name, "collection created");
        self.items.push(Collection {
            id,
            name: name.to_string(),
            description: description.to_string(),
            items: Vec::new(),
            created_at: now_ms,
            updated_at: now_ms,
        });
        &self.items[self.items.len() - 1]
    }

    /// Add `item` unless an entry with the same label and template exists.
    pub fn add_item(&mut self, collection_id: &str, item: CollectionItem, now_ms: u64) -> Result<AddOutcome, CatalogError> {
        let coll = self
            .items
            .iter_mut()
            .find(|c| c.id == collection_id)
            .ok_or_else(|| CatalogError::NotFound(format!("collection '{}'", collection_id)))?;
        if coll.items.iter().any(|it| it.label == item.label && it.template == item.template) {
            return Ok(AddOutcome::AlreadyPresent);
        }
        coll.items.push(item);
        coll.updated_at = now_ms;
        Ok(AddOutcome::Added)
    }

    pub fn remove_item(&mut self, collection_id: &str, index: usize, now_ms: u64) -> bool {
        match self.items.iter_mut().find(|c| c.id == collection_id) {
            Some(coll) if index < coll.items.len() => {
                coll.items.remove(index);
                coll.updated_at = now_ms;
                true
            }
            _ => false,
        }
    }

    pub fn delete(&mut self, collection_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|c| c.id != collection_id);
        self.items.len() != before
    }

    pub fn get(&self, collection_id: &str) -> Option<&Collection> {
        self.items.iter().find(|c| c.id == collection_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Collection> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
