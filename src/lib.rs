//! # aln-curate
//!
//! A library for curating reference-guided multiple-sequence alignments of
//! viral genomes (e.g. orthopoxvirus genomes) into analysis-ready ones.
//!
//! A reference-guided alignment carries every query genome in the reference's
//! column space, but downstream analysis wants repetitive regions masked, the
//! second inverted terminal repeat (ITR) masked or trimmed, and sometimes the
//! coding sequences pulled out per genome. All three operations are given in
//! reference coordinates and have to survive the insertions and deletions of
//! each individual query.
//!
//! `aln-curate` solves this with a per-query [`CoordinateMap`]: a dense
//! translation table between 1-based reference coordinates and alignment
//! columns, built by walking the reference row once. Masking, ITR handling
//! and CDS extraction all index into it read-only.
//!
//! ## Features
//!
//! - **Repeat masking**: replaces low-confidence regions with `N`, union
//!   semantics over overlapping regions, gaps untouched
//! - **ITR handling**: mask the tail, trim every row at the same column, or
//!   leave it alone
//! - **CDS extraction**: ungapped per-gene sequences, reverse-complemented
//!   on the reverse strand, optionally concatenated per genome
//! - **Batch isolation**: a malformed query is excluded and reported; its
//!   siblings still curate
//!
//! ## Example
//!
//! ```rust,no_run
//! use aln_curate::{curate_batch, CurateOptions, ReferenceModel};
//! use aln_curate::parsing::fasta::read_alignment;
//! use std::path::Path;
//!
//! // Load the reference bundle: genome, mask table, gene table, ITR point
//! let model = ReferenceModel::load(
//!     Path::new("reference.fasta"),
//!     Path::new("to_mask.csv"),
//!     Path::new("gene_boundaries.csv"),
//!     185_579,
//! ).unwrap();
//!
//! // Curate an aligned batch with the default policies
//! let records = read_alignment(Path::new("batch.aln.fasta")).unwrap();
//! let batch = curate_batch(&model, &records, &CurateOptions::default()).unwrap();
//!
//! for row in &batch.alignment {
//!     println!("{}: {} columns", row.id, row.seq.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: reference model, coordinate map, region tables, options
//! - [`curate`]: masking, CDS extraction, and the batch engine
//! - [`parsing`]: FASTA and CSV table readers
//! - [`output`]: FASTA writer
//! - [`cli`]: command-line interface implementation

pub mod cli;
pub mod core;
pub mod curate;
pub mod error;
pub mod output;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::coords::CoordinateMap;
pub use crate::core::reference::ReferenceModel;
pub use crate::core::regions::{GeneBoundary, MaskRegion, Strand};
pub use crate::core::types::{CurateOptions, ItrPolicy, SeqRecord};
pub use crate::curate::engine::{curate_batch, BatchOutput, BatchSummary};
pub use crate::error::CurateError;
