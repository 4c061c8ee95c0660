//! Population statistics of reactivity bands.
//!
//! Computed once per run from a collection of profiles and passed
//! explicitly to the selector.
//!

use log::debug;
use log::warn;
use serde::Serialize;

use crate::ReactivityBand;
use crate::ReactivityProfile;

/// Mean and population standard deviation of one band's members.
///
/// Both are `None` if the band had no members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BandSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub sd: Option<f64>,
}

impl BandSummary {
    fn from_members(members: &[f64]) -> Self {
        if members.is_empty() {
            return Self::default();
        }
        let n = members.len() as f64;
        let mean = members.iter().sum::<f64>() / n;
        let var = members.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Self {
            count: members.len(),
            mean: Some(mean),
            sd: Some(var.sqrt()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BandStatistics {
    pub low: BandSummary,
    pub medium: BandSummary,
    pub high: BandSummary,
}

impl BandStatistics {
    /// Scan all values of all profiles.
    pub fn compute<'a, I>(profiles: I) -> Self
    where
        I: IntoIterator<Item = &'a ReactivityProfile>,
    {
        let mut members: [Vec<f64>; 3] = Default::default();
        let mut nprofiles = 0;
        for profile in profiles {
            nprofiles += 1;
            for &v in profile.values() {
                for (band, m) in ReactivityBand::ALL.iter().zip(members.iter_mut()) {
                    if let Some(x) = band.member_value(v) {
                        m.push(x);
                    }
                }
            }
        }
        let [low, medium, high] = members.map(|m| BandSummary::from_members(&m));
        let stats = Self { low, medium, high };

        debug!("Band statistics from {nprofiles} profiles: {stats:?}");
        for band in ReactivityBand::ALL {
            if stats.get(band).sd.is_none() {
                warn!("No reactivities in the {band} band, using fixed boundaries.");
            }
        }
        stats
    }

    /// Statistics with given deviations, e.g. all zero for fixed binning.
    pub fn from_deviations(low: f64, medium: f64, high: f64) -> Self {
        let summary = |sd| BandSummary { count: 0, mean: None, sd: Some(sd) };
        Self {
            low: summary(low),
            medium: summary(medium),
            high: summary(high),
        }
    }

    pub fn get(&self, band: ReactivityBand) -> &BandSummary {
        match band {
            ReactivityBand::Low => &self.low,
            ReactivityBand::Medium => &self.medium,
            ReactivityBand::High => &self.high,
        }
    }

    /// The widening applied to `band`; zero when it is undefined.
    pub fn tolerance(&self, band: ReactivityBand) -> f64 {
        self.get(band).sd.filter(|sd| sd.is_finite()).unwrap_or(0.0)
    }
}
