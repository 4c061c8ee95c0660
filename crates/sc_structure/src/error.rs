use std::fmt;

use crate::Alphabet;

/// Errors raised while reading a dot-bracket structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// A closing bracket without an open partner (1-based position).
    Unbalanced { alphabet: Alphabet, position: usize },

    /// An opening bracket that is never closed (1-based position).
    Unclosed { alphabet: Alphabet, position: usize },

    /// The structure does not fit into `NAIDX` positions.
    TooLong(usize),

    /// No dot-bracket line was found in a structure file.
    NoStructure,
}

impl StructureError {
    /// The alphabet that failed, if this is a bracket-matching error.
    pub fn alphabet(&self) -> Option<Alphabet> {
        match self {
            StructureError::Unbalanced { alphabet, .. }
            | StructureError::Unclosed { alphabet, .. } => Some(*alphabet),
            _ => None,
        }
    }
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::Unbalanced { alphabet, position } => {
                write!(f, "unbalanced {alphabet} brackets: unmatched close at position {position}")
            }
            StructureError::Unclosed { alphabet, position } => {
                write!(f, "unbalanced {alphabet} brackets: unclosed open at position {position}")
            }
            StructureError::TooLong(len) => {
                write!(f, "structure of length {len} exceeds the supported maximum")
            }
            StructureError::NoStructure => write!(f, "no dot-bracket structure found"),
        }
    }
}

impl std::error::Error for StructureError {}

