use serde::Serialize;
use thiserror::Error;

use crate::templates::Category;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid engine URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Expected a JSON array of favorites")]
    NotAnArray,

    #[error("Invalid store key: {0}")]
    InvalidKey(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Why an imported pack was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum PackRejection {
    #[error("pack must be a JSON object")]
    NotAnObject,

    #[error("pack name is missing or not a string")]
    MissingName,

    #[error("pack '{name}': {category} must be an array")]
    CategoryNotArray { name: String, category: Category },

    #[error("pack '{name}': {category} row {index} needs a string label and template")]
    InvalidRow { name: String, category: Category, index: usize },

    #[error("pack '{0}' is already installed")]
    Duplicate(String),
}
