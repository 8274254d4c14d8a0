//! Community packs: typed validation at the import boundary, import/export
//! and generation from favorites.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::error::{CatalogError, PackRejection};
use crate::favorites::Favorite;
use crate::templates::{Category, TemplateRow};

fn default_version() -> u32 {
    1
}

/// A named bundle of templates grouped by category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pack {
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default, rename = "createdAt")]
    pub created_at: u64,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: u64,
    #[serde(default, rename = "Person")]
    pub person: Vec<TemplateRow>,
    #[serde(default, rename = "Place")]
    pub place: Vec<TemplateRow>,
    #[serde(default, rename = "Thing")]
    pub thing: Vec<TemplateRow>,
}

impl Default for Pack {
    fn default() -> Self {
        Self {
            name: String::new(),
            author: String::new(),
            description: String::new(),
            version: default_version(),
            created_at: 0,
            updated_at: 0,
            person: Vec::new(),
            place: Vec::new(),
            thing: Vec::new(),
        }
    }
}

impl Pack {
    pub fn rows(&self, category: Category) -> &[TemplateRow] {
        match category {
            Category::Person => &self.person,
            Category::Place => &self.place,
            Category::Thing => &self.thing,
        }
    }

    /// Suggested download name: inner whitespace runs become `_`, leading
    /// and trailing whitespace is dropped.
    pub fn export_file_name(&self) -> String {
        format!("{}_pack.json", self.name.split_whitespace().collect::<Vec<_>>().join("_"))
    }
}

/// Check the shape of an untrusted JSON value and convert it to a [`Pack`].
///
/// Only the name, the category arrays and each row's `label`/`template` are
/// required. Other fields of the wrong type fall back to their defaults.
pub fn validate_pack(value: &Value) -> Result<Pack, PackRejection> {
    let obj = value.as_object().ok_or(PackRejection::NotAnObject)?;
    let name = match obj.get("name").and_then(Value::as_str) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => return Err(PackRejection::MissingName),
    };
    let mut pack = Pack {
        name,
        author: text_field(obj, "author"),
        description: text_field(obj, "description"),
        version: obj.get("version").and_then(Value::as_u64).and_then(|v| u32::try_from(v).ok()).unwrap_or(default_version()),
        created_at: millis_field(obj, "createdAt"),
        updated_at: millis_field(obj, "updatedAt"),
        ..Pack::default()
    };
    for category in Category::ALL {
        let rows = match obj.get(category.as_str()) {
            None | Some(Value::Null) => continue,
            Some(rows) => rows
                .as_array()
                .ok_or_else(|| PackRejection::CategoryNotArray { name: pack.name.clone(), category })?,
        };
        let mut parsed = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let label = row.get("label").and_then(Value::as_str);
            let template = row.get("template").and_then(Value::as_str);
            let (Some(label), Some(template)) = (label, template) else {
                return Err(PackRejection::InvalidRow { name: pack.name.clone(), category, index });
            };
            let hint = row.get("hint").and_then(Value::as_str).unwrap_or_default();
            parsed.push(TemplateRow::new(label, template, hint));
        }
        match category {
            Category::Person => pack.person = parsed,
            Category::Place => pack.place = parsed,
            Category::Thing => pack.thing = parsed,
        }
    }
    Ok(pack)
}

fn text_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

/// Timestamps may arrive as integers or floats; anything else reads as 0.
fn millis_field(obj: &Map<String, Value>, key: &str) -> u64 {
    match obj.get(key) {
        Some(v) => v.as_u64().or_else(|| v.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)).unwrap_or(0),
        None => 0,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub added: Vec<String>,
    pub rejected: Vec<PackRejection>,
}

/// Import one pack object or an array of them into `existing`.
///
/// Valid packs whose name is not yet installed are appended; everything else
/// is reported in [`ImportSummary::rejected`]. Text that is not JSON at all
/// is an error.
pub fn import_packs(existing: &mut Vec<Pack>, json_text: &str) -> Result<ImportSummary, CatalogError> {
    let data: Value = serde_json::from_str(json_text)?;
    let candidates = match data {
        Value::Array(items) => items,
        other => vec![other],
    };
    let mut names: HashSet<String> = existing.iter().map(|p| p.name.clone()).collect();
    let mut summary = ImportSummary::default();
    for candidate in &candidates {
        match validate_pack(candidate) {
            Ok(pack) if names.contains(&pack.name) => {
                summary.rejected.push(PackRejection::Duplicate(pack.name));
            }
            Ok(pack) => {
                names.insert(pack.name.clone());
                summary.added.push(pack.name.clone());
                existing.push(pack);
            }
            Err(rejection) => {
                warn!(%rejection, "pack rejected");
                summary.rejected.push(rejection);
            }
        }
    }
    debug!(added = summary.added.len(), rejected = summary.rejected.len(), "pack import finished");
    Ok(summary)
}

pub fn remove_pack(existing: &mut Vec<Pack>, name: &str) -> bool {
    let before = existing.len();
    existing.retain(|p| p.name != name);
    existing.len() != before
}

/// Bundle favorites into a shareable pack.
pub fn favorites_to_pack(favorites: &[Favorite], name: &str, author: &str, now_ms: u64) -> Pack {
    let mut pack = Pack {
        name: if name.trim().is_empty() { "Untitled".to_string() } else { name.trim().to_string() },
        author: if author.is_empty() { "Local".to_string() } else { author.to_string() },
        description: "Generated from favorites".to_string(),
        version: 1,
        created_at: now_ms,
        updated_at: now_ms,
        ..Pack::default()
    };
    for fav in favorites {
        let row = TemplateRow::new(fav.label.clone(), fav.template.clone(), "Saved favorite");
        match fav.category {
            Category::Person => pack.person.push(row),
            Category::Place => pack.place.push(row),
            Category::Thing => pack.thing.push(row),
        }
    }
    pack
}
