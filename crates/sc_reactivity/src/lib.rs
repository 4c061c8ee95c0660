//! The sc_reactivity crate.
//!
//! Provides the reactivity side of constraint generation:
//!  - per-fragment reactivity profiles (with clamping).
//!  - low/medium/high bands and their population statistics.
//!  - selection of positions whose band is preserved between two fragments.
//!

mod error;
mod profile;
mod band;
mod statistics;
mod window;
mod selector;

pub use error::*;
pub use profile::*;
pub use band::*;
pub use statistics::*;
pub use window::*;
pub use selector::*;

pub use sc_structure::NAIDX;
