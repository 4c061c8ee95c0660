//! Neighbourhood consistency of a per-position sequence.
//!
//! A position is stable if every value in the centered window around it
//! equals its own value. The sequence ends are padded with the nearest
//! interior value, so edges are judged on the values they actually have.
//!

use crate::InvalidWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsistencyWindow {
    radius: usize,
}

impl Default for ConsistencyWindow {
    /// Width 1: every position is stable.
    fn default() -> Self {
        Self { radius: 0 }
    }
}

impl ConsistencyWindow {
    pub fn new(width: usize) -> Result<Self, InvalidWindow> {
        if width % 2 == 0 {
            return Err(InvalidWindow(width));
        }
        Ok(Self { radius: width / 2 })
    }

    pub fn width(&self) -> usize {
        2 * self.radius + 1
    }

    /// Stability flag for every element of `seq`.
    pub fn stable<T: PartialEq>(&self, seq: &[T]) -> Vec<bool> {
        if seq.is_empty() {
            return Vec::new();
        }
        let last = seq.len() - 1;
        (0..seq.len())
            .map(|k| {
                let lo = k.saturating_sub(self.radius);
                let hi = (k + self.radius).min(last);
                // Padding repeats seq[0] and seq[last], which lie inside [lo, hi].
                seq[lo..=hi].iter().all(|x| *x == seq[k])
            })
            .collect()
    }
}
