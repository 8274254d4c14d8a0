//! Domain types shared by the compositor, explainer and suggestion engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub type ChipId = String;

/// Placeholder name (without braces) to replacement text.
///
/// Ordered so that substitution runs in a stable key order.
pub type SubstitutionMap = BTreeMap<String, String>;

/// The reserved placeholder filled from the keyword.
pub const KEYWORD_KEY: &str = "q";

/// The closed set of fragment kinds a chip can carry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChipKind {
    Phrase,
    #[serde(rename = "or")]
    OrGroup,
    Site,
    Filetype,
    InUrl,
    InTitle,
    Exclude,
}

impl ChipKind {
    pub const ALL: [ChipKind; 7] = [
        ChipKind::Phrase,
        ChipKind::OrGroup,
        ChipKind::Site,
        ChipKind::Filetype,
        ChipKind::InUrl,
        ChipKind::InTitle,
        ChipKind::Exclude,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChipKind::Phrase => "phrase",
            ChipKind::OrGroup => "or",
            ChipKind::Site => "site",
            ChipKind::Filetype => "filetype",
            ChipKind::InUrl => "inurl",
            ChipKind::InTitle => "intitle",
            ChipKind::Exclude => "exclude",
        }
    }

    /// Operator prefix emitted for single-term filter kinds.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            ChipKind::Site => Some("site:"),
            ChipKind::Filetype => Some("filetype:"),
            ChipKind::InUrl => Some("inurl:"),
            ChipKind::InTitle => Some("intitle:"),
            ChipKind::Phrase | ChipKind::OrGroup | ChipKind::Exclude => None,
        }
    }

    /// Short help text shown next to an empty chip.
    pub fn help(self) -> &'static str {
        match self {
            ChipKind::Phrase => "Exact phrase. Leave empty to use {q}.",
            ChipKind::OrGroup => "Comma-separated terms; will be wrapped like (a OR b OR c).",
            ChipKind::Site => "Domain or TLD, e.g., example.com or .gov",
            ChipKind::Filetype => "pdf, docx, xls, etc.",
            ChipKind::InUrl => "Require term in URL path.",
            ChipKind::InTitle => "Require term in page title.",
            ChipKind::Exclude => "Comma-separated terms; each becomes -term.",
        }
    }
}

impl fmt::Display for ChipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChipKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        ChipKind::ALL
            .into_iter()
            .find(|k| k.as_str() == lowered)
            .ok_or_else(|| Error::UnknownChipKind(s.to_string()))
    }
}

/// One user-editable query fragment.
///
/// `id` only identifies the chip for ordering, update and removal; it never
/// influences the composed query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chip {
    pub id: ChipId,
    pub kind: ChipKind,
    pub value: String,
}

impl Chip {
    pub fn new(id: impl Into<ChipId>, kind: ChipKind, value: impl Into<String>) -> Self {
        Self { id: id.into(), kind, value: value.into() }
    }
}

/// Search operators the explainer knows about, in canonical report order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Quotes,
    Site,
    Filetype,
    InTitle,
    InUrl,
    Or,
    Exclude,
    Parentheses,
}

impl Operator {
    pub const CANONICAL: [Operator; 8] = [
        Operator::Quotes,
        Operator::Site,
        Operator::Filetype,
        Operator::InTitle,
        Operator::InUrl,
        Operator::Or,
        Operator::Exclude,
        Operator::Parentheses,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Operator::Quotes => "\"…\" (quotes)",
            Operator::Site => "site:",
            Operator::Filetype => "filetype:",
            Operator::InTitle => "intitle:",
            Operator::InUrl => "inurl:",
            Operator::Or => "OR",
            Operator::Exclude => "- (minus)",
            Operator::Parentheses => "(parentheses)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Operator::Quotes => "Exact phrase matching; keeps word order.",
            Operator::Site => "Limit to a domain/TLD (e.g., site:.gov).",
            Operator::Filetype => "Restrict to a file type (pdf/docx/xls).",
            Operator::InTitle => "Require words in the page title.",
            Operator::InUrl => "Require words in the URL path.",
            Operator::Or => "Match either term on each side of OR.",
            Operator::Exclude => "Exclude noisy terms/sites.",
            Operator::Parentheses => "Group logic so OR/excludes apply correctly.",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OperatorFinding {
    pub operator: Operator,
    pub label: &'static str,
    pub description: &'static str,
}

impl From<Operator> for OperatorFinding {
    fn from(operator: Operator) -> Self {
        Self { operator, label: operator.label(), description: operator.description() }
    }
}

/// Advisory classification of a template.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityFlag {
    AdminPaths,
    CredentialTerms,
    DirectoryListing,
}

impl SensitivityFlag {
    pub fn label(self) -> &'static str {
        match self {
            SensitivityFlag::AdminPaths => "admin/login paths",
            SensitivityFlag::CredentialTerms => "credential terms",
            SensitivityFlag::DirectoryListing => "directory listing",
        }
    }
}

impl fmt::Display for SensitivityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The edit a suggestion proposes to the chip sequence.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SuggestionAction {
    Add { kind: ChipKind, value: String },
    Wrap,
    Exclude { term: String },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Suggestion {
    pub action: SuggestionAction,
    pub reason: &'static str,
}

impl Suggestion {
    /// Compact button-style label, e.g. `+filetype:pdf` or `-pinterest.com`.
    pub fn label(&self) -> String {
        match &self.action {
            SuggestionAction::Add { kind, value } => format!("+{}:{}", kind, value),
            SuggestionAction::Wrap => "Wrap in \"…\"".to_string(),
            SuggestionAction::Exclude { term } => format!("-{}", term),
        }
    }
}
