//! dorkstation-catalog
//!
//! Everything around the query core that a front end needs: built-in
//! templates and preset packs, community pack import/export, favorites,
//! collections, search engine URLs, the learning quiz and a JSON state store.

pub mod collections;
pub mod engine;
pub mod error;
pub mod favorites;
pub mod pack;
pub mod quiz;
pub mod store;
pub mod templates;

pub use collections::{Collection, CollectionItem, Collections};
pub use engine::{get_engine, to_search_url, Engine, ENGINES};
pub use error::{CatalogError, PackRejection};
pub use favorites::{AddOutcome, Favorite, Favorites, ToggleOutcome};
pub use pack::{favorites_to_pack, import_packs, validate_pack, ImportSummary, Pack};
pub use store::{FileStore, MemoryStore, StateStore};
pub use templates::{Category, TemplateRow, View};
