//! Select positions whose reactivity band is preserved between two fragments.
//!
//! Each position of the shorter fragment is classified with the fixed band
//! boundaries. The longer fragment's value at the same position must lie in
//! that band widened by the band's standard deviation. Positions past the
//! end of the longer fragment are not compared.
//!

use log::debug;
use nohash_hasher::IntSet;

use crate::NAIDX;
use crate::BandStatistics;
use crate::ConsistencyWindow;
use crate::ReactivityBand;
use crate::ReactivityProfile;

/// Positions retained as consistent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    positions: IntSet<NAIDX>,
}

impl ConstraintSet {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, position: NAIDX) -> bool {
        self.positions.contains(&position)
    }

    /// Iterator over all positions in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = NAIDX> + '_ {
        self.positions.iter().copied()
    }

    /// Return all positions as a sorted Vec (for deterministic inspection).
    pub fn to_vec(&self) -> Vec<NAIDX> {
        let mut v: Vec<_> = self.iter().collect();
        v.sort_unstable();
        v
    }
}

impl FromIterator<NAIDX> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = NAIDX>>(iter: I) -> Self {
        Self { positions: iter.into_iter().collect() }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConstraintSelector<'a> {
    stats: &'a BandStatistics,
    window: ConsistencyWindow,
}

impl<'a> ConstraintSelector<'a> {
    pub fn new(stats: &'a BandStatistics) -> Self {
        Self { stats, window: ConsistencyWindow::default() }
    }

    /// Additionally require the comparison outcome to be stable in a window.
    pub fn with_window(mut self, window: ConsistencyWindow) -> Self {
        self.window = window;
        self
    }

    /// Is the band of `shorter` preserved in `longer` (within tolerance)?
    pub fn preserved(&self, shorter: f64, longer: f64) -> bool {
        match ReactivityBand::classify(shorter) {
            Some(band) => band.admits(longer, self.stats.tolerance(band)),
            None => false,
        }
    }

    /// Per-position comparison outcome for positions `1..=min(len)`.
    pub fn compare(&self, shorter: &ReactivityProfile, longer: &ReactivityProfile) -> Vec<bool> {
        shorter
            .iter()
            .map_while(|(p, s)| longer.get(p).map(|l| self.preserved(s, l)))
            .collect()
    }

    pub fn select(&self, shorter: &ReactivityProfile, longer: &ReactivityProfile) -> ConstraintSet {
        let preserved = self.compare(shorter, longer);
        if preserved.len() < shorter.len() {
            debug!(
                "Comparing only {} of {} positions, longer fragment ends early.",
                preserved.len(),
                shorter.len()
            );
        }
        let stable = self.window.stable(&preserved);
        let set: ConstraintSet = preserved
            .iter()
            .zip(stable)
            .enumerate()
            .filter(|&(_, (&kept, stable))| kept && stable)
            .map(|(idx, _)| (idx + 1) as NAIDX)
            .collect();
        debug!(
            "Retained {} of {} compared positions (window {}).",
            set.len(),
            preserved.len(),
            self.window.width()
        );
        set
    }
}

/// Positions of `shorter` whose band is preserved in `longer`.
pub fn select(
    shorter: &ReactivityProfile,
    longer: &ReactivityProfile,
    stats: &BandStatistics,
) -> ConstraintSet {
    ConstraintSelector::new(stats).select(shorter, longer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(values: &[f64]) -> ReactivityProfile {
        ReactivityProfile::from_values(values.to_vec()).unwrap()
    }

    #[test]
    fn test_fixed_binning_example() {
        let shorter = profile(&[0.1, 0.5, 0.9]);
        let longer = profile(&[0.1, 0.9, 0.95]);
        let stats = BandStatistics::from_deviations(0.0, 0.0, 0.0);
        assert_eq!(select(&shorter, &longer, &stats).to_vec(), vec![1, 3]);
    }

    #[test]
    fn test_zero_deviation_matches_exact_bins() {
        let values = [0.0, 0.2, 0.4, 0.45, 0.7, 0.75, 1.0, -0.1];
        let stats = BandStatistics::from_deviations(0.0, 0.0, 0.0);
        for &s in &values {
            for &l in &values {
                let got = !select(&profile(&[s]), &profile(&[l]), &stats).is_empty();
                let exact = ReactivityBand::classify(s).is_some()
                    && ReactivityBand::classify(s) == ReactivityBand::classify(l);
                assert_eq!(got, exact, "{s} {l}");
            }
        }
    }

    #[test]
    fn test_adaptive_widening() {
        let stats = BandStatistics::from_deviations(0.1, 0.1, 0.1);
        let sel = ConstraintSelector::new(&stats);
        assert!(sel.preserved(0.3, 0.45));  // LOW drifts up
        assert!(!sel.preserved(0.3, 0.55));
        assert!(sel.preserved(0.5, 0.75));  // MEDIUM widened upwards
        assert!(sel.preserved(0.5, 0.35));  // and downwards
        assert!(sel.preserved(0.9, 0.65));  // HIGH widened downwards
        assert!(!sel.preserved(0.9, 0.55));
    }

    #[test]
    fn test_undefined_deviation_falls_back() {
        // Only LOW values: MEDIUM and HIGH have no statistics.
        let stats = BandStatistics::compute([&profile(&[0.1, 0.2, 0.3])]);
        let sel = ConstraintSelector::new(&stats);
        assert!(!sel.preserved(0.9, 0.7));
        assert!(sel.preserved(0.9, 0.71));
    }

    #[test]
    fn test_negative_values_never_retained() {
        // Negative reactivities are not clamped up to zero.
        let stats = BandStatistics::from_deviations(0.2, 0.2, 0.2);
        let sel = ConstraintSelector::new(&stats);
        assert!(!sel.preserved(-0.1, 0.1));
        assert!(!sel.preserved(0.1, -0.1));
    }

    #[test]
    fn test_longer_profile_shorter_than_shorter() {
        let shorter = profile(&[0.1, 0.1, 0.1]);
        let longer = profile(&[0.1, 0.1]);
        let stats = BandStatistics::from_deviations(0.0, 0.0, 0.0);
        assert_eq!(select(&shorter, &longer, &stats).to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_largest_profile_is_compared_completely() {
        let p = profile(&vec![0.1; NAIDX::MAX as usize]);
        let stats = BandStatistics::from_deviations(0.0, 0.0, 0.0);
        let set = select(&p, &p, &stats);
        assert_eq!(set.len(), NAIDX::MAX as usize);
        assert!(set.contains(NAIDX::MAX));
    }

    #[test]
    fn test_window_filters_unstable_neighbourhoods() {
        let shorter = profile(&[0.1; 7]);
        let longer = profile(&[0.1, 0.1, 0.1, 0.9, 0.1, 0.1, 0.1]);
        let stats = BandStatistics::from_deviations(0.0, 0.0, 0.0);
        let sel = ConstraintSelector::new(&stats).with_window(ConsistencyWindow::new(3).unwrap());
        assert_eq!(sel.select(&shorter, &longer).to_vec(), vec![1, 2, 6, 7]);
        assert_eq!(select(&shorter, &longer, &stats).to_vec(), vec![1, 2, 3, 5, 6, 7]);
    }
}
