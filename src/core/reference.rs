use std::path::Path;

use crate::core::regions::{GeneBoundary, MaskRegion};
use crate::error::CurateError;
use crate::parsing;

/// The loaded reference bundle: genome sequence, mask-region table,
/// gene-boundary table, and the ITR trim point.
///
/// Built once via [`ReferenceModel::load`], then shared read-only across the
/// batch workers. All coordinates held here are 1-based reference-space.
#[derive(Debug, Clone)]
pub struct ReferenceModel {
    name: String,
    sequence: Vec<u8>,
    mask_regions: Vec<MaskRegion>,
    gene_boundaries: Vec<GeneBoundary>,
    trim_point: usize,
}

impl ReferenceModel {
    /// Assemble a model from already-validated parts.
    ///
    /// [`ReferenceModel::load`] is the validating entry point; this exists
    /// for callers that build reference data in memory.
    pub fn new(
        name: impl Into<String>,
        sequence: impl Into<Vec<u8>>,
        mask_regions: Vec<MaskRegion>,
        gene_boundaries: Vec<GeneBoundary>,
        trim_point: usize,
    ) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
            mask_regions,
            gene_boundaries,
            trim_point,
        }
    }

    /// Load and validate the reference bundle from disk.
    ///
    /// # Errors
    ///
    /// `InvalidReference` unless the FASTA holds exactly one record,
    /// `MalformedTable` for table problems (reported with path and line),
    /// `CoordinateOutOfRange` for a trim point outside the reference, and
    /// `Io` for unreadable files.
    pub fn load(
        reference_fasta: &Path,
        mask_table: &Path,
        gene_table: &Path,
        trim_end: usize,
    ) -> Result<Self, CurateError> {
        let reference = parsing::fasta::read_reference(reference_fasta)?;
        let length = reference.seq.len();

        let mask_regions = parsing::tables::parse_mask_table(mask_table, length)?;
        let gene_boundaries = parsing::tables::parse_gene_boundaries(gene_table, length)?;

        if trim_end == 0 || trim_end > length {
            return Err(CurateError::CoordinateOutOfRange {
                coord: trim_end,
                length,
            });
        }

        tracing::debug!(
            reference = %reference.id,
            length,
            mask_regions = mask_regions.len(),
            genes = gene_boundaries.len(),
            trim_end,
            "loaded reference bundle"
        );

        Ok(Self::new(
            reference.id,
            reference.seq,
            mask_regions,
            gene_boundaries,
            trim_end,
        ))
    }

    /// Reference identifier from the FASTA header.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ungapped reference length.
    #[must_use]
    pub fn length(&self) -> usize {
        self.sequence.len()
    }

    /// Ungapped reference sequence.
    #[must_use]
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Mask regions in table order.
    #[must_use]
    pub fn mask_regions(&self) -> &[MaskRegion] {
        &self.mask_regions
    }

    /// Gene boundaries in table order.
    #[must_use]
    pub fn gene_boundaries(&self) -> &[GeneBoundary] {
        &self.gene_boundaries
    }

    /// First coordinate of the second ITR.
    #[must_use]
    pub fn trim_point(&self) -> usize {
        self.trim_point
    }
}
