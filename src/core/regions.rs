use serde::{Deserialize, Serialize};

/// A reference-space region to replace with the ambiguity character.
///
/// Coordinates are 1-based inclusive. Regions may overlap; application uses
/// union semantics, so overlap never double-masks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskRegion {
    pub start: usize,
    pub end: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl MaskRegion {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Strand of a coding sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strand {
    Forward,
    Reverse,
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Reverse => write!(f, "reverse"),
        }
    }
}

/// One CDS span from the gene-boundary table.
///
/// Coordinates are 1-based inclusive, exactly as written in the table.
/// Table order is preserved so extraction output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneBoundary {
    pub name: String,
    pub start: usize,
    pub end: usize,
    pub strand: Strand,
}

impl GeneBoundary {
    pub fn new(name: impl Into<String>, start: usize, end: usize, strand: Strand) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            strand,
        }
    }

    /// Span length in reference bases.
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // a parsed boundary always spans at least one base
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }
}
