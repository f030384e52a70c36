//! FASTA output.
//!
//! Records are written in the order given, wrapped at a fixed width. The
//! width is a formatting convention only; re-parsing a written file yields
//! the same records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::types::SeqRecord;
use crate::error::CurateError;

/// Bases per FASTA sequence line.
pub const LINE_WIDTH: usize = 60;

/// Write records to a multi-FASTA file, preserving order.
///
/// # Errors
///
/// `Io` with the destination path if the file cannot be created or written.
pub fn write_fasta(records: &[SeqRecord], path: &Path) -> Result<(), CurateError> {
    let file = File::create(path).map_err(|e| CurateError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    write_fasta_to(records, &mut writer).map_err(|e| CurateError::io(path, e))
}

fn write_fasta_to<W: Write>(records: &[SeqRecord], writer: &mut W) -> std::io::Result<()> {
    for record in records {
        writeln!(writer, ">{}", record.id)?;
        for chunk in record.seq.chunks(LINE_WIDTH) {
            writer.write_all(chunk)?;
            writeln!(writer)?;
        }
    }
    writer.flush()
}
