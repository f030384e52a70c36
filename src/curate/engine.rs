//! Batch curation: fan out per-row transforms, fan in deterministically.
//!
//! Rows are independent once the immutable [`ReferenceModel`] is built, so
//! the batch maps over row indices on the rayon pool and collects in input
//! order. A row that fails (shape mismatch, unmappable coordinate) is
//! excluded from the output and recorded in the summary; it never aborts its
//! siblings.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::core::coords::CoordinateMap;
use crate::core::reference::ReferenceModel;
use crate::core::types::{CurateOptions, SeqRecord};
use crate::curate::{cds, mask};
use crate::error::CurateError;

/// Outcome of one batch run.
#[derive(Debug)]
pub struct BatchOutput {
    /// Curated alignment rows, input order, reference row first.
    pub alignment: Vec<SeqRecord>,
    /// Extracted CDS records; empty unless `extract_cds` was set.
    pub cds: Vec<SeqRecord>,
    /// Per-batch accounting, including excluded rows.
    pub summary: BatchSummary,
}

/// Per-batch accounting, serializable for `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Rows in the input alignment (reference row included).
    pub total: usize,
    /// Rows curated successfully.
    pub curated: usize,
    /// Rows excluded from output.
    pub failed: Vec<QueryFailure>,
}

/// One excluded row and the reason.
#[derive(Debug, Clone, Serialize)]
pub struct QueryFailure {
    pub id: String,
    pub reason: String,
}

/// Transformed output for one row.
struct RowOutput {
    row: SeqRecord,
    cds: Vec<SeqRecord>,
}

/// Curate a whole alignment against the reference model.
///
/// `records[0]` must be the reference row; its ungapped length has to match
/// the reference genome, otherwise nothing in the batch can be mapped and
/// the whole run fails with `AlignmentShapeMismatch`. Every row (the
/// reference row included) is then transformed independently.
///
/// # Errors
///
/// Only batch-fatal conditions surface here; per-row failures land in the
/// returned [`BatchSummary`].
pub fn curate_batch(
    model: &ReferenceModel,
    records: &[SeqRecord],
    options: &CurateOptions,
) -> Result<BatchOutput, CurateError> {
    let Some(reference_row) = records.first() else {
        return Err(CurateError::AlignmentShapeMismatch {
            reference_columns: model.length(),
            query_columns: 0,
        });
    };
    let ungapped = reference_row
        .seq
        .iter()
        .filter(|&&b| b != crate::core::types::GAP)
        .count();
    if ungapped != model.length() {
        return Err(CurateError::AlignmentShapeMismatch {
            reference_columns: model.length(),
            query_columns: ungapped,
        });
    }

    debug!(
        rows = records.len(),
        columns = reference_row.seq.len(),
        "curating batch"
    );

    let results: Vec<Result<RowOutput, QueryFailure>> = records
        .par_iter()
        .map(|record| {
            curate_row(model, &reference_row.seq, record, options).map_err(|e| QueryFailure {
                id: record.id.clone(),
                reason: e.to_string(),
            })
        })
        .collect();

    let mut alignment = Vec::with_capacity(records.len());
    let mut cds_records = Vec::new();
    let mut failed = Vec::new();

    for result in results {
        match result {
            Ok(output) => {
                alignment.push(output.row);
                cds_records.extend(output.cds);
            }
            Err(failure) => {
                warn!(id = %failure.id, reason = %failure.reason, "row excluded");
                failed.push(failure);
            }
        }
    }

    let summary = BatchSummary {
        total: records.len(),
        curated: alignment.len(),
        failed,
    };

    Ok(BatchOutput {
        alignment,
        cds: cds_records,
        summary,
    })
}

/// Run the per-row pipeline: map, mask/trim, extract.
fn curate_row(
    model: &ReferenceModel,
    reference_row: &[u8],
    record: &SeqRecord,
    options: &CurateOptions,
) -> Result<RowOutput, CurateError> {
    let map = CoordinateMap::build(reference_row, &record.seq)?;

    let masked = mask::apply_masking(
        &record.seq,
        &map,
        model.mask_regions(),
        model.trim_point(),
        options,
    )?;

    let cds = if options.extract_cds {
        let extracted = cds::extract(&record.id, &record.seq, &map, model.gene_boundaries())?;
        if options.concatenate {
            vec![cds::concatenate(&record.id, &extracted)]
        } else {
            cds::into_records(extracted)
        }
    } else {
        Vec::new()
    };

    Ok(RowOutput {
        row: SeqRecord::new(record.id.clone(), masked),
        cds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::regions::{GeneBoundary, MaskRegion, Strand};
    use crate::core::types::ItrPolicy;

    fn model() -> ReferenceModel {
        ReferenceModel::new(
            "ref",
            b"ACGTACGTAC".to_vec(),
            vec![MaskRegion::new(4, 5)],
            vec![GeneBoundary::new("gene CDS", 2, 4, Strand::Forward)],
            9,
        )
    }

    fn batch() -> Vec<SeqRecord> {
        vec![
            SeqRecord::new("ref", b"ACGTACGTAC".to_vec()),
            SeqRecord::new("q1", b"ACCTACGTAC".to_vec()),
            SeqRecord::new("q2", b"ACGTAC--AC".to_vec()),
        ]
    }

    #[test]
    fn test_batch_masks_every_row() {
        let output = curate_batch(&model(), &batch(), &CurateOptions::default()).unwrap();

        assert_eq!(output.alignment.len(), 3);
        // Mask [4,5] plus ITR mask from 9: every non-gap base covered turns N.
        assert_eq!(output.alignment[0].seq, b"ACGNNCGTNN");
        assert_eq!(output.alignment[1].seq, b"ACCNNCGTNN");
        assert_eq!(output.alignment[2].seq, b"ACGNNC--NN");
        assert!(output.summary.failed.is_empty());
    }

    #[test]
    fn test_batch_trim_is_uniform() {
        let options = CurateOptions {
            itr_policy: ItrPolicy::Trim,
            ..CurateOptions::default()
        };
        let output = curate_batch(&model(), &batch(), &options).unwrap();

        for row in &output.alignment {
            assert_eq!(row.seq.len(), 8);
        }
    }

    #[test]
    fn test_batch_isolates_bad_row() {
        let mut records = batch();
        records.push(SeqRecord::new("short", b"ACGT".to_vec()));

        let output = curate_batch(&model(), &records, &CurateOptions::default()).unwrap();

        assert_eq!(output.summary.total, 4);
        assert_eq!(output.summary.curated, 3);
        assert_eq!(output.summary.failed.len(), 1);
        assert_eq!(output.summary.failed[0].id, "short");
        assert!(output.summary.failed[0].reason.contains("shape mismatch"));
        // Output order is input order with the bad row excised.
        let ids: Vec<&str> = output.alignment.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["ref", "q1", "q2"]);
    }

    #[test]
    fn test_batch_rejects_reference_row_mismatch() {
        let records = vec![SeqRecord::new("ref", b"ACGT".to_vec())];
        let err = curate_batch(&model(), &records, &CurateOptions::default()).unwrap_err();
        assert!(matches!(err, CurateError::AlignmentShapeMismatch { .. }));
    }

    #[test]
    fn test_batch_extracts_cds_per_row() {
        let options = CurateOptions {
            mask_repeats: false,
            itr_policy: ItrPolicy::Keep,
            extract_cds: true,
            concatenate: false,
        };
        let output = curate_batch(&model(), &batch(), &options).unwrap();

        assert_eq!(output.cds.len(), 3);
        assert_eq!(output.cds[0].id, "ref|gene_CDS");
        assert_eq!(output.cds[0].seq, b"CGT");
        assert_eq!(output.cds[1].id, "q1|gene_CDS");
        assert_eq!(output.cds[1].seq, b"CCT");
    }

    #[test]
    fn test_batch_concatenate_one_record_per_genome() {
        let reference = ReferenceModel::new(
            "ref",
            b"ACGTACGTAC".to_vec(),
            vec![],
            vec![
                GeneBoundary::new("one CDS", 1, 3, Strand::Forward),
                GeneBoundary::new("two CDS", 6, 8, Strand::Forward),
            ],
            9,
        );
        let options = CurateOptions {
            mask_repeats: false,
            itr_policy: ItrPolicy::Keep,
            extract_cds: true,
            concatenate: true,
        };
        let records = vec![SeqRecord::new("ref", b"ACGTACGTAC".to_vec())];

        let output = curate_batch(&reference, &records, &options).unwrap();

        assert_eq!(output.cds.len(), 1);
        assert_eq!(output.cds[0].id, "ref");
        assert_eq!(output.cds[0].seq, b"ACGNNNCGT");
    }
}
