//! Parsers for the reference bundle and the aligned input.
//!
//! This module provides parsers for:
//!
//! - **FASTA files**: the single-record reference genome and the gapped
//!   multi-FASTA alignment produced by the upstream aligner
//! - **Mask tables**: CSV of reference-space regions to mask
//! - **Gene-boundary tables**: CSV of CDS spans
//!   (`Name,Minimum,Maximum,Length,Direction`)
//!
//! All parsers report failures through [`CurateError`](crate::error::CurateError)
//! with the offending path (and line, for tables).

pub mod fasta;
pub mod tables;
