//! The shapecons crate.
//!
//! Derives folding constraints from two related RNA fragments: base pairs of
//! a dot-bracket structure are kept only if both nucleotides show a
//! consistent reactivity band in the shorter and the longer fragment.
//!
//! The result is written in the constraint file layout understood by
//! RNAstructure-style folding tools.
//!

mod error;
mod emitter;
mod pipeline;
mod report;

pub use error::*;
pub use emitter::*;
pub use pipeline::*;
pub use report::*;

pub use sc_reactivity;
pub use sc_structure;
