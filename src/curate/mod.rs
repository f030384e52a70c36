//! The curation engine: masking, ITR handling, CDS extraction, batching.
//!
//! [`mask`] and [`cds`] transform one aligned row at a time through a
//! [`CoordinateMap`](crate::core::coords::CoordinateMap); [`engine`] runs
//! the whole batch in parallel and aggregates results deterministically.

pub mod cds;
pub mod engine;
pub mod mask;
