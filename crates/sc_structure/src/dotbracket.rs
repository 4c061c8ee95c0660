//! Dot-bracket parsing with a second bracket alphabet for pseudoknots.
//!
//! Each alphabet is matched on its own stack, so `(([[))]]` is a valid
//! structure with two crossing helices. Everything that is not one of the
//! four brackets is unpaired.
//!

use std::fmt;
use log::debug;

use crate::NAIDX;
use crate::Pair;
use crate::PairList;
use crate::StructureError;

/// The gap marker that may be stripped before numbering.
pub const GAP: char = '-';

/// The two independently matched bracket alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// `(` and `)`
    Primary,
    /// `[` and `]`
    Pseudoknot,
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Primary => write!(f, "primary '()'"),
            Alphabet::Pseudoknot => write!(f, "pseudoknot '[]'"),
        }
    }
}

/// A single dot-bracket symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotBracket {
    Open(Alphabet),
    Close(Alphabet),
    /// `.`, `-` and anything else.
    Unpaired,
}

impl From<char> for DotBracket {
    fn from(c: char) -> Self {
        match c {
            '(' => DotBracket::Open(Alphabet::Primary),
            ')' => DotBracket::Close(Alphabet::Primary),
            '[' => DotBracket::Open(Alphabet::Pseudoknot),
            ']' => DotBracket::Close(Alphabet::Pseudoknot),
            _ => DotBracket::Unpaired,
        }
    }
}

impl From<DotBracket> for char {
    fn from(db: DotBracket) -> Self {
        match db {
            DotBracket::Open(Alphabet::Primary) => '(',
            DotBracket::Close(Alphabet::Primary) => ')',
            DotBracket::Open(Alphabet::Pseudoknot) => '[',
            DotBracket::Close(Alphabet::Pseudoknot) => ']',
            DotBracket::Unpaired => '.',
        }
    }
}

/// Parser settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Strip `-` gap markers before numbering positions.
    pub remove_gaps: bool,
}

/// The base pairs of a parsed dot-bracket string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    length: usize,
    primary: PairList,
    pseudoknot: PairList,
}

impl Structure {
    /// Parse a dot-bracket string; see [`ParseOptions`] for gap handling.
    pub fn parse(structure: &str, options: ParseOptions) -> Result<Self, StructureError> {
        let symbols: Vec<char> = if options.remove_gaps {
            structure.chars().filter(|&c| c != GAP).collect()
        } else {
            structure.chars().collect()
        };

        if symbols.len() > NAIDX::MAX as usize {
            return Err(StructureError::TooLong(symbols.len()));
        }

        let mut primary_stack: Vec<NAIDX> = Vec::new();
        let mut pseudoknot_stack: Vec<NAIDX> = Vec::new();
        let mut primary = Vec::new();
        let mut pseudoknot = Vec::new();

        for (idx, &c) in symbols.iter().enumerate() {
            let pos = (idx + 1) as NAIDX;
            match DotBracket::from(c) {
                DotBracket::Open(Alphabet::Primary) => primary_stack.push(pos),
                DotBracket::Open(Alphabet::Pseudoknot) => pseudoknot_stack.push(pos),
                DotBracket::Close(alphabet) => {
                    let (stack, pairs) = match alphabet {
                        Alphabet::Primary => (&mut primary_stack, &mut primary),
                        Alphabet::Pseudoknot => (&mut pseudoknot_stack, &mut pseudoknot),
                    };
                    let i = stack.pop().ok_or(StructureError::Unbalanced {
                        alphabet,
                        position: pos as usize,
                    })?;
                    pairs.push(Pair::new(i, pos));
                }
                DotBracket::Unpaired => {}
            }
        }

        if let Some(&i) = primary_stack.last() {
            return Err(StructureError::Unclosed {
                alphabet: Alphabet::Primary,
                position: i as usize,
            });
        }
        if let Some(&i) = pseudoknot_stack.last() {
            return Err(StructureError::Unclosed {
                alphabet: Alphabet::Pseudoknot,
                position: i as usize,
            });
        }

        debug!(
            "Parsed structure of length {}: {} primary, {} pseudoknot pairs.",
            symbols.len(),
            primary.len(),
            pseudoknot.len()
        );

        Ok(Structure {
            length: symbols.len(),
            primary: PairList::from(primary),
            pseudoknot: PairList::from(pseudoknot),
        })
    }

    /// Number of positions after optional gap removal.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn primary(&self) -> &PairList {
        &self.primary
    }

    pub fn pseudoknot(&self) -> &PairList {
        &self.pseudoknot
    }

    pub fn into_pairs(self) -> (PairList, PairList) {
        (self.primary, self.pseudoknot)
    }

    /// Rebuild the bracket topology: all unpaired symbols become `.`.
    pub fn to_dotbracket(&self) -> String {
        let mut dbv = vec![DotBracket::Unpaired; self.length];
        for (alphabet, pairs) in [
            (Alphabet::Primary, &self.primary),
            (Alphabet::Pseudoknot, &self.pseudoknot),
        ] {
            for pair in pairs {
                dbv[pair.i() as usize - 1] = DotBracket::Open(alphabet);
                dbv[pair.j() as usize - 1] = DotBracket::Close(alphabet);
            }
        }
        dbv.into_iter().map(char::from).collect()
    }
}

impl TryFrom<&str> for Structure {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Structure::parse(s, ParseOptions::default())
    }
}

/// Parse a dot-bracket string into (primary, pseudoknot) pair lists.
pub fn parse(structure: &str) -> Result<(PairList, PairList), StructureError> {
    Structure::try_from(structure).map(Structure::into_pairs)
}
