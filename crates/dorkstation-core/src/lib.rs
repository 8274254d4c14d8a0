//! dorkstation-core
//!
//! Pure query-template composition: chips are composed into a template,
//! placeholders are substituted, and the result is annotated with operator
//! findings, sensitivity flags and suggestions. Nothing here touches storage.
#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod chips;
pub mod compose;
pub mod config;
pub mod error;
pub mod explain;
pub mod sensitive;
pub mod session;
pub mod substitute;
pub mod suggest;
pub mod types;

pub use chips::ChipSequence;
pub use compose::compose;
pub use explain::{explain_operators, variants};
pub use sensitive::detect_sensitive;
pub use session::{QueryReport, QuerySession};
pub use substitute::render;
pub use suggest::{apply_suggestion, suggest, MAX_SUGGESTIONS};
pub use types::{
    Chip, ChipId, ChipKind, Operator, OperatorFinding, SensitivityFlag, SubstitutionMap,
    Suggestion, SuggestionAction,
};
