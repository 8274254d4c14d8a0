//! Caller-owned chip sequence: ordering, editing and drag-and-drop moves.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::compose::compose;
use crate::error::{Error, Result};
use crate::types::{Chip, ChipId, ChipKind};

/// Ordered chips plus the counter used to mint fresh ids (`c0`, `c1`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChipSequence {
    chips: Vec<Chip>,
    next_id: u64,
}

impl Default for ChipSequence {
    /// A phrase slot for the keyword followed by empty site and filetype chips.
    fn default() -> Self {
        let mut seq = Self::empty();
        for kind in [ChipKind::Phrase, ChipKind::Site, ChipKind::Filetype] {
            seq.add(kind);
        }
        seq
    }
}

impl ChipSequence {
    pub fn empty() -> Self {
        Self { chips: Vec::new(), next_id: 0 }
    }

    /// Build a sequence from `(kind, value)` pairs, minting ids in order.
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = (ChipKind, S)>,
        S: Into<String>,
    {
        let mut seq = Self::empty();
        for (kind, value) in parts {
            seq.push(kind, value);
        }
        seq
    }

    /// Parse `kind=value` specs such as `site=.gov` or `phrase=` into a sequence.
    pub fn parse_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self> {
        let mut seq = Self::empty();
        for spec in specs {
            let spec = spec.as_ref();
            let (kind, value) = spec.split_once('=').ok_or_else(|| Error::MalformedChipSpec(spec.to_string()))?;
            seq.push(kind.parse()?, value);
        }
        Ok(seq)
    }

    fn mint_id(&mut self) -> ChipId {
        let id = format!("c{}", self.next_id);
        self.next_id += 1;
        id
    }

    /// Append an empty chip of `kind`.
    pub fn add(&mut self, kind: ChipKind) -> ChipId {
        self.push(kind, String::new())
    }

    pub fn push(&mut self, kind: ChipKind, value: impl Into<String>) -> ChipId {
        let id = self.mint_id();
        self.chips.push(Chip::new(id.clone(), kind, value));
        id
    }

    pub fn prepend(&mut self, kind: ChipKind, value: impl Into<String>) -> ChipId {
        let id = self.mint_id();
        self.chips.insert(0, Chip::new(id.clone(), kind, value));
        id
    }

    /// Replace the value of chip `id`. Returns false if no such chip.
    pub fn update(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.chips.iter_mut().find(|c| c.id == id) {
            Some(chip) => {
                chip.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.chips.len();
        self.chips.retain(|c| c.id != id);
        self.chips.len() != before
    }

    /// Move chip `src` into the slot currently held by `dst`.
    ///
    /// No-op (returning false) when the ids are equal or either is unknown.
    pub fn move_chip(&mut self, src: &str, dst: &str) -> bool {
        if src == dst {
            return false;
        }
        let src_idx = self.position(src);
        let dst_idx = self.position(dst);
        let (Some(src_idx), Some(dst_idx)) = (src_idx, dst_idx) else {
            return false;
        };
        let moved = self.chips.remove(src_idx);
        self.chips.insert(dst_idx, moved);
        trace!(src, dst, from = src_idx, to = dst_idx, "moved chip");
        true
    }

    /// Back to a single empty phrase chip.
    pub fn reset(&mut self) {
        self.chips.clear();
        self.add(ChipKind::Phrase);
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.chips.iter().position(|c| c.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Chip> {
        self.chips.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chip> {
        self.chips.iter()
    }

    pub fn as_slice(&self) -> &[Chip] {
        &self.chips
    }

    pub fn len(&self) -> usize {
        self.chips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    /// Value of the first phrase chip, if any.
    pub fn first_phrase(&self) -> Option<&str> {
        self.chips.iter().find(|c| c.kind == ChipKind::Phrase).map(|c| c.value.as_str())
    }

    pub fn compose(&self) -> String {
        compose(&self.chips)
    }
}

impl<'a> IntoIterator for &'a ChipSequence {
    type Item = &'a Chip;
    type IntoIter = std::slice::Iter<'a, Chip>;

    fn into_iter(self) -> Self::IntoIter {
        self.chips.iter()
    }
}
