//! Single state container for one query under construction.
//!
//! The UI owns a `QuerySession`, mutates it once per user action, and reads
//! everything it displays back out of it.

use serde::{Deserialize, Serialize};

use crate::chips::ChipSequence;
use crate::explain::explain_operators;
use crate::sensitive::detect_sensitive;
use crate::substitute::render;
use crate::suggest::{apply_suggestion, suggest};
use crate::types::{OperatorFinding, SensitivityFlag, SubstitutionMap, Suggestion};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuerySession {
    pub keyword: String,
    pub substitutions: SubstitutionMap,
    pub chips: ChipSequence,
}

/// Everything derived from a session in one render cycle.
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    pub template: String,
    pub rendered: String,
    pub findings: Vec<OperatorFinding>,
    pub flags: Vec<SensitivityFlag>,
    pub suggestions: Vec<Suggestion>,
}

impl QuerySession {
    pub fn new(keyword: impl Into<String>, chips: ChipSequence) -> Self {
        Self { keyword: keyword.into(), substitutions: SubstitutionMap::new(), chips }
    }

    pub fn with_substitution(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.substitutions.insert(name.into(), value.into());
        self
    }

    /// A query can only be opened once there is a keyword.
    pub fn is_ready(&self) -> bool {
        !self.keyword.trim().is_empty()
    }

    pub fn template(&self) -> String {
        self.chips.compose()
    }

    pub fn rendered(&self) -> String {
        render(&self.template(), &self.substitutions, &self.keyword)
    }

    pub fn findings(&self) -> Vec<OperatorFinding> {
        explain_operators(&self.template())
    }

    pub fn flags(&self) -> Vec<SensitivityFlag> {
        detect_sensitive(&self.template())
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        suggest(&self.keyword, &self.template())
    }

    pub fn apply(&mut self, suggestion: &Suggestion) {
        apply_suggestion(&mut self.chips, suggestion, &self.keyword);
    }

    pub fn report(&self) -> QueryReport {
        let template = self.template();
        QueryReport {
            rendered: render(&template, &self.substitutions, &self.keyword),
            findings: explain_operators(&template),
            flags: detect_sensitive(&template),
            suggestions: suggest(&self.keyword, &template),
            template,
        }
    }
}
