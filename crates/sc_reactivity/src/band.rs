//! Reactivity bands.
//!
//! Classification uses exclusive, fixed boundaries:
//! LOW = `[0, 0.4]`, MEDIUM = `(0.4, 0.7]`, HIGH = `(0.7, ∞)`.
//! Statistics use wider, overlapping membership ranges, and the comparison
//! of a second profile widens each band by a tolerance on the side that
//! extends it only.
//!

use std::fmt;
use serde::Serialize;

use crate::REACTIVITY_MAX;

/// Upper (inclusive) boundary of the LOW band.
pub const LOW_UPPER: f64 = 0.4;
/// Upper (inclusive) boundary of the MEDIUM band.
pub const MEDIUM_UPPER: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactivityBand {
    Low,
    Medium,
    High,
}

impl ReactivityBand {
    pub const ALL: [ReactivityBand; 3] = [
        ReactivityBand::Low,
        ReactivityBand::Medium,
        ReactivityBand::High,
    ];

    /// The fixed band of `value`; `None` for negative or NaN values.
    pub fn classify(value: f64) -> Option<Self> {
        if value.is_nan() || value < 0.0 {
            None
        } else if value <= LOW_UPPER {
            Some(ReactivityBand::Low)
        } else if value <= MEDIUM_UPPER {
            Some(ReactivityBand::Medium)
        } else {
            Some(ReactivityBand::High)
        }
    }

    /// Whether `value` lies in this band widened by `tolerance`.
    ///
    /// With `tolerance == 0.0` this is exactly `classify(value) == Some(self)`.
    pub fn admits(self, value: f64, tolerance: f64) -> bool {
        match self {
            ReactivityBand::Low => (0.0..=LOW_UPPER + tolerance).contains(&value),
            ReactivityBand::Medium => {
                value > LOW_UPPER - tolerance && value <= MEDIUM_UPPER + tolerance
            }
            ReactivityBand::High => value > MEDIUM_UPPER - tolerance,
        }
    }

    /// The value `value` contributes to this band's statistics, if any.
    ///
    /// Membership ranges overlap on purpose, so one value may count
    /// towards two bands.
    pub fn member_value(self, value: f64) -> Option<f64> {
        match self {
            ReactivityBand::Low => (value > 0.0 && value < 0.5).then_some(value),
            ReactivityBand::Medium => (value > 0.3 && value < 0.8).then_some(value),
            ReactivityBand::High => {
                if value >= REACTIVITY_MAX {
                    Some(REACTIVITY_MAX)
                } else {
                    (value > 0.6).then_some(value)
                }
            }
        }
    }
}

impl fmt::Display for ReactivityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReactivityBand::Low => write!(f, "LOW"),
            ReactivityBand::Medium => write!(f, "MEDIUM"),
            ReactivityBand::High => write!(f, "HIGH"),
        }
    }
}
