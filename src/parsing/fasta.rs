//! FASTA readers using noodles.
//!
//! Reads the reference genome (exactly one record) and the gapped alignment
//! (reference row first, then query rows). Supports both uncompressed and
//! gzip/bgzip compressed files, keyed on extension.

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;

use crate::core::types::SeqRecord;
use crate::error::CurateError;

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read the reference genome FASTA.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, and `InvalidReference` if the
/// file does not hold exactly one record or cannot be parsed as FASTA.
pub fn read_reference(path: &Path) -> Result<SeqRecord, CurateError> {
    let mut records = read_records(path)?;

    match records.len() {
        1 => Ok(records.remove(0)),
        0 => Err(CurateError::InvalidReference {
            path: path.to_path_buf(),
            reason: "no sequences found".to_string(),
        }),
        n => Err(CurateError::InvalidReference {
            path: path.to_path_buf(),
            reason: format!("expected exactly one record, found {n}"),
        }),
    }
}

/// Read the gapped multi-FASTA alignment in record order.
///
/// The first record is expected to be the reference row; that expectation is
/// checked by the batch engine, not here.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, and `InvalidReference` if the
/// content cannot be parsed as FASTA or holds no records.
pub fn read_alignment(path: &Path) -> Result<Vec<SeqRecord>, CurateError> {
    let records = read_records(path)?;

    if records.is_empty() {
        return Err(CurateError::InvalidReference {
            path: path.to_path_buf(),
            reason: "no sequences found".to_string(),
        });
    }

    Ok(records)
}

fn read_records(path: &Path) -> Result<Vec<SeqRecord>, CurateError> {
    let file = std::fs::File::open(path).map_err(|e| CurateError::io(path, e))?;

    if is_gzipped(path) {
        let reader = BufReader::new(GzDecoder::new(file));
        read_from(fasta::io::Reader::new(reader), path)
    } else {
        let reader = BufReader::new(file);
        read_from(fasta::io::Reader::new(reader), path)
    }
}

fn read_from<R: BufRead>(
    mut reader: fasta::io::Reader<R>,
    path: &Path,
) -> Result<Vec<SeqRecord>, CurateError> {
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| CurateError::InvalidReference {
            path: path.to_path_buf(),
            reason: format!("failed to parse FASTA record: {e}"),
        })?;

        let id = String::from_utf8_lossy(record.name()).to_string();
        let seq = record.sequence().as_ref().to_vec();
        records.push(SeqRecord::new(id, seq));
    }

    Ok(records)
}
