//! Pair and PairList definitions.
//!
//! Beware that these implementations are **1-based**, matching the
//! numbering of reactivity tables and constraint files.
//!

use std::fmt;
use itertools::Itertools;

use crate::NAIDX;

/// A base pair (i, j) with i < j.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair { i: NAIDX, j: NAIDX }

impl Pair {
    /// Create a new pair (i, j). Panics in debug if i >= j.
    pub fn new(i: NAIDX, j: NAIDX) -> Self {
        debug_assert!(i < j);
        debug_assert!(i > 0);
        Pair { i, j }
    }

    /// Return the 5'-side index.
    pub fn i(&self) -> NAIDX {
        self.i
    }

    /// Return the 3'-side index.
    pub fn j(&self) -> NAIDX {
        self.j
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.i, self.j)
    }
}

/// An ordered list of base pairs of one alphabet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairList {
    pairs: Vec<Pair>,
}

impl PairList {
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pair> + '_ {
        self.pairs.iter()
    }

    /// Pairs as plain `(i, j)` tuples, mostly for inspection.
    pub fn to_tuples(&self) -> Vec<(NAIDX, NAIDX)> {
        self.pairs.iter().map(|p| (p.i(), p.j())).collect()
    }
}

impl From<Vec<Pair>> for PairList {
    /// Sorts by opening position.
    fn from(mut pairs: Vec<Pair>) -> Self {
        pairs.sort_unstable();
        PairList { pairs }
    }
}

impl<'a> IntoIterator for &'a PairList {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl fmt::Display for PairList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pairs.iter().join(","))
    }
}
