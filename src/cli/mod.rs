//! Command-line interface for aln-curate.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **curate**: Mask/trim a reference-guided alignment and optionally
//!   extract CDS regions
//! - **check**: Validate a reference data bundle (FASTA + tables + trim
//!   point) and print a summary
//!
//! ## Usage
//!
//! ```text
//! # Curate an alignment with the default policies (repeat + ITR masking)
//! aln-curate curate batch.aln.fasta -r reference.fasta -m to_mask.csv -b gene_boundaries.csv
//!
//! # Trim the second ITR off instead of masking it
//! aln-curate curate batch.aln.fasta -r reference.fasta -m to_mask.csv -b gene_boundaries.csv --trim-itr
//!
//! # Extract concatenated coding sequences as well
//! aln-curate curate batch.aln.fasta -r reference.fasta -m to_mask.csv -b gene_boundaries.csv \
//!     --extract-cds --concatenate
//!
//! # JSON summary for scripting
//! aln-curate curate batch.aln.fasta -r reference.fasta -m to_mask.csv -b gene_boundaries.csv --format json
//!
//! # Sanity-check a reference bundle
//! aln-curate check -r reference.fasta -m to_mask.csv -b gene_boundaries.csv
//! ```

use clap::{Parser, Subcommand};

pub mod check;
pub mod curate;

#[derive(Parser)]
#[command(name = "aln-curate")]
#[command(version)]
#[command(about = "Curate reference-guided viral genome alignments")]
#[command(
    long_about = "aln-curate post-processes a reference-guided multiple-sequence alignment into an analysis-ready one.\n\nGiven a reference genome with a mask-region table, a gene-boundary table and an ITR trim point, it:\n- masks repetitive/low-confidence regions with N\n- masks or trims the second inverted terminal repeat\n- optionally extracts (and concatenates) coding sequences per genome"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for the run summary
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Mask/trim an alignment and optionally extract CDS regions
    Curate(curate::CurateArgs),

    /// Validate a reference data bundle and print a summary
    Check(check::CheckArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
