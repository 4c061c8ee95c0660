//! The sc_structure crate.
//!
//! Parses dot-bracket secondary structures into 1-based base-pair lists:
//!  - `()` for the primary pairing alphabet.
//!  - `[]` for a second, independently matched pseudoknot alphabet.
//!

mod error;
mod pair_list;
mod dotbracket;
mod structure_file;

pub use error::*;
pub use pair_list::*;
pub use dotbracket::*;
pub use structure_file::*;


/// Nucleic Acid INdeX: we use `u16` (0 to 65k), which is plenty for the
/// fragments we compare. Positions are **1-based** throughout this workspace.
pub type NAIDX = u16;

