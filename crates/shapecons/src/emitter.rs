//! The constraint file.
//!
//! Only the `Pairs:` section is ever populated. All other sections are
//! written with their empty sentinel, since the folding tool expects every
//! section to be present.
//!

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use sc_reactivity::ConstraintSet;
use sc_structure::Pair;
use sc_structure::PairList;

/// Forced pairs, in the order they were parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintFile {
    pairs: Vec<Pair>,
}

impl ConstraintFile {
    /// Keep the pairs whose two positions are both retained.
    pub fn emit(pairs: &PairList, retained: &ConstraintSet) -> Self {
        let pairs = pairs
            .iter()
            .filter(|p| retained.contains(p.i()) && retained.contains(p.j()))
            .copied()
            .collect();
        Self { pairs }
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Write the whole file at once.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        fs::write(path, self.to_string())
    }
}

impl fmt::Display for ConstraintFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DS:\n-1")?;
        writeln!(f, "SS:\n-1")?;
        writeln!(f, "Mod:\n-1")?;
        writeln!(f, "Pairs:")?;
        for pair in &self.pairs {
            writeln!(f, "{} {}", pair.i(), pair.j())?;
        }
        writeln!(f, "-1 -1")?;
        writeln!(f, "FMN:\n-1")?;
        writeln!(f, "Forbids:\n-1 -1")
    }
}
