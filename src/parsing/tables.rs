//! Parsers for the mask-region and gene-boundary CSV tables.
//!
//! Mask table: `start,end[,label]` per line, optional header. Gene-boundary
//! table: header `Name,Minimum,Maximum,Length,Direction` with
//! `Direction` in {forward, reverse}. Both are validated against the
//! reference length at parse time; line numbers in errors are 1-based.

use std::path::Path;

use crate::core::regions::{GeneBoundary, MaskRegion, Strand};
use crate::error::CurateError;

fn malformed(path: &Path, line: usize, reason: impl Into<String>) -> CurateError {
    CurateError::MalformedTable {
        path: path.to_path_buf(),
        line,
        reason: reason.into(),
    }
}

/// Parse the mask-region table and validate bounds against the reference.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, or `MalformedTable` for missing
/// or non-numeric bounds, inverted regions, or regions beyond the reference.
pub fn parse_mask_table(path: &Path, reference_length: usize) -> Result<Vec<MaskRegion>, CurateError> {
    let content = std::fs::read_to_string(path).map_err(|e| CurateError::io(path, e))?;
    parse_mask_text(&content, reference_length, path)
}

fn parse_mask_text(
    text: &str,
    reference_length: usize,
    path: &Path,
) -> Result<Vec<MaskRegion>, CurateError> {
    let mut regions = Vec::new();
    let mut first_data_line = true;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();

        // First non-empty/non-comment line may be a header
        if first_data_line {
            first_data_line = false;
            if fields[0].trim().parse::<usize>().is_err() {
                continue;
            }
        }

        let line_num = i + 1;

        if fields.len() < 2 {
            return Err(malformed(path, line_num, "fewer than 2 fields"));
        }

        let start: usize = fields[0].trim().parse().map_err(|_| {
            malformed(path, line_num, format!("invalid start: '{}'", fields[0]))
        })?;
        let end: usize = fields[1].trim().parse().map_err(|_| {
            malformed(path, line_num, format!("invalid end: '{}'", fields[1]))
        })?;

        if start == 0 || start > end {
            return Err(malformed(
                path,
                line_num,
                format!("invalid region {start}..{end} (want 1 <= start <= end)"),
            ));
        }
        if end > reference_length {
            return Err(malformed(
                path,
                line_num,
                format!("region end {end} beyond reference length {reference_length}"),
            ));
        }

        let mut region = MaskRegion::new(start, end);
        if let Some(label) = fields.get(2) {
            let label = label.trim();
            if !label.is_empty() {
                region = region.with_label(label);
            }
        }

        regions.push(region);
    }

    Ok(regions)
}

/// Parse the gene-boundary table and validate spans against the reference.
///
/// The `Length` column must agree with the bounds: either `max - min + 1`
/// or `max - min` (the table generator writes span length short by one, so
/// both readings are accepted).
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, or `MalformedTable` for missing
/// or non-numeric fields, an unknown direction, a length that matches
/// neither convention, or spans beyond the reference.
pub fn parse_gene_boundaries(
    path: &Path,
    reference_length: usize,
) -> Result<Vec<GeneBoundary>, CurateError> {
    let content = std::fs::read_to_string(path).map_err(|e| CurateError::io(path, e))?;
    parse_gene_text(&content, reference_length, path)
}

fn parse_gene_text(
    text: &str,
    reference_length: usize,
    path: &Path,
) -> Result<Vec<GeneBoundary>, CurateError> {
    let mut boundaries = Vec::new();
    let mut first_data_line = true;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Header line: Name,Minimum,Maximum,Length,Direction
        if first_data_line {
            first_data_line = false;
            if line.to_lowercase().starts_with("name,") {
                continue;
            }
        }

        let line_num = i + 1;

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 5 {
            return Err(malformed(path, line_num, "fewer than 5 fields"));
        }

        let name = fields[0].trim().to_string();
        if name.is_empty() {
            return Err(malformed(path, line_num, "empty gene name"));
        }

        let start: usize = fields[1].trim().parse().map_err(|_| {
            malformed(path, line_num, format!("invalid minimum: '{}'", fields[1]))
        })?;
        let end: usize = fields[2].trim().parse().map_err(|_| {
            malformed(path, line_num, format!("invalid maximum: '{}'", fields[2]))
        })?;
        let length: usize = fields[3].trim().parse().map_err(|_| {
            malformed(path, line_num, format!("invalid length: '{}'", fields[3]))
        })?;

        let strand = match fields[4].trim() {
            "forward" => Strand::Forward,
            "reverse" => Strand::Reverse,
            other => {
                return Err(malformed(
                    path,
                    line_num,
                    format!("invalid direction: '{other}' (want forward or reverse)"),
                ))
            }
        };

        if start == 0 || start > end {
            return Err(malformed(
                path,
                line_num,
                format!("invalid span {start}..{end} (want 1 <= min <= max)"),
            ));
        }
        if end > reference_length {
            return Err(malformed(
                path,
                line_num,
                format!("maximum {end} beyond reference length {reference_length}"),
            ));
        }

        let span = end - start + 1;
        if length != span && length != span - 1 {
            return Err(malformed(
                path,
                line_num,
                format!("length {length} does not match span {start}..{end} ({span} bases)"),
            ));
        }

        boundaries.push(GeneBoundary::new(name, start, end, strand));
    }

    Ok(boundaries)
}
