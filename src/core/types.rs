use serde::{Deserialize, Serialize};

/// Gap character used by the upstream aligner.
pub const GAP: u8 = b'-';

/// Ambiguity character written over masked bases.
pub const MASK_CHAR: u8 = b'N';

/// Separator joining concatenated CDS sequences for one genome.
pub const CDS_SEPARATOR: &[u8] = b"NNN";

/// One named sequence: an aligned row on input, a curated row or an
/// extracted CDS on output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    /// Identifier from the FASTA header (text up to the first whitespace).
    pub id: String,
    /// Sequence bytes. Alignment rows include gap characters.
    pub seq: Vec<u8>,
}

impl SeqRecord {
    pub fn new(id: impl Into<String>, seq: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            seq: seq.into(),
        }
    }
}

/// What to do with the second ITR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItrPolicy {
    /// Replace non-gap characters at/after the trim point with the ambiguity
    /// character. The default.
    Mask,
    /// Cut every row at the column mapped from the trim point.
    Trim,
    /// Leave the ITR alone.
    Keep,
}

/// Per-batch curation switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurateOptions {
    /// Mask the repetitive regions from the mask table. Disabled by `--no-mask`.
    pub mask_repeats: bool,
    /// ITR handling: mask (default), trim, or keep.
    pub itr_policy: ItrPolicy,
    /// Extract CDS regions per genome.
    pub extract_cds: bool,
    /// Join each genome's CDS sequences into one record. Only meaningful
    /// with `extract_cds`.
    pub concatenate: bool,
}

impl Default for CurateOptions {
    fn default() -> Self {
        Self {
            mask_repeats: true,
            itr_policy: ItrPolicy::Mask,
            extract_cds: false,
            concatenate: false,
        }
    }
}
