//! Region masking and ITR handling for one aligned row.
//!
//! Mask regions arrive in reference coordinates, get translated to
//! alignment-column intervals through the per-query [`CoordinateMap`], merged
//! into a disjoint union, and applied as byte replacements. Gap characters
//! are never touched: a deletion stays a deletion, it does not become an
//! ambiguity call. Under the trim policy the row is cut at the column mapped
//! from the trim point instead; the reference side of the map is
//! query-independent, so every row of a batch is cut at the same column and
//! the alignment stays rectangular.

use crate::core::coords::CoordinateMap;
use crate::core::regions::MaskRegion;
use crate::core::types::{CurateOptions, ItrPolicy, GAP, MASK_CHAR};
use crate::error::CurateError;

/// Half-open column interval, merged prior to application so overlapping
/// mask regions are applied exactly once.
type ColumnSpan = (usize, usize);

/// Apply the masking policies to one query row, returning a fresh row.
///
/// # Errors
///
/// `CoordinateOutOfRange` if a region bound or the trim point does not map
/// into the reference seen by this alignment.
pub fn apply_masking(
    query_row: &[u8],
    map: &CoordinateMap,
    mask_regions: &[MaskRegion],
    trim_point: usize,
    options: &CurateOptions,
) -> Result<Vec<u8>, CurateError> {
    let mut row = query_row.to_vec();

    let mut spans: Vec<ColumnSpan> = Vec::new();

    if options.mask_repeats {
        for region in mask_regions {
            spans.push(region_span(map, region.start, region.end)?);
        }
    }

    if options.itr_policy == ItrPolicy::Mask {
        spans.push(region_span(map, trim_point, map.reference_length())?);
    }

    for (start, end) in merge_spans(spans) {
        for byte in &mut row[start..end] {
            if *byte != GAP {
                *byte = MASK_CHAR;
            }
        }
    }

    if options.itr_policy == ItrPolicy::Trim {
        row.truncate(map.ref_to_column(trim_point)?);
    }

    Ok(row)
}

/// Map an inclusive reference-space region to a half-open column span.
fn region_span(
    map: &CoordinateMap,
    start: usize,
    end: usize,
) -> Result<ColumnSpan, CurateError> {
    let start_column = map.ref_to_column(start)?;
    let end_column = map.ref_to_column(end)?;
    Ok((start_column, end_column + 1))
}

/// Merge half-open intervals into a disjoint, sorted union.
fn merge_spans(mut spans: Vec<ColumnSpan>) -> Vec<ColumnSpan> {
    spans.sort_unstable();

    let mut merged: Vec<ColumnSpan> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        match merged.last_mut() {
            Some((_, last_end)) if start <= *last_end => {
                *last_end = (*last_end).max(end);
            }
            _ => merged.push((start, end)),
        }
    }
    merged
}
