//! Per-position reactivity of one fragment.
//!
//! Tables have two whitespace-separated columns, `position value`, with
//! positions running densely from 1. Values above [`REACTIVITY_MAX`] are
//! clamped once on construction. Negative values are kept as they are.
//!

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use crate::NAIDX;
use crate::ProfileError;

/// Upper bound of a (normalized) reactivity measurement.
pub const REACTIVITY_MAX: f64 = 1.0;

/// Reactivities indexed by 1-based position.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactivityProfile {
    values: Vec<f64>,
}

impl ReactivityProfile {
    /// Build a profile where `values[0]` belongs to position 1.
    pub fn from_values(mut values: Vec<f64>) -> Result<Self, ProfileError> {
        if values.len() > NAIDX::MAX as usize {
            return Err(ProfileError::TooLong(values.len()));
        }
        for v in values.iter_mut() {
            if *v > REACTIVITY_MAX {
                *v = REACTIVITY_MAX;
            }
        }
        Ok(Self { values })
    }

    /// Read a `position value` table.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ProfileError> {
        let mut rows: Vec<(NAIDX, f64)> = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(ProfileError::Read)?;
            let mut fields = line.split_whitespace();
            let (Some(pos), Some(val)) = (fields.next(), fields.next()) else {
                if line.trim().is_empty() {
                    continue;
                }
                return Err(invalid_line(idx, &line));
            };
            let pos: NAIDX = pos.parse().map_err(|_| invalid_line(idx, &line))?;
            let val: f64 = val.parse().map_err(|_| invalid_line(idx, &line))?;
            rows.push((pos, val));
        }

        rows.sort_by_key(|&(pos, _)| pos);
        if let Some(w) = rows.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(ProfileError::DuplicatePosition(w[0].0));
        }
        for (k, &(pos, _)) in rows.iter().enumerate() {
            if pos as usize != k + 1 {
                return Err(ProfileError::NotContiguous { expected: k + 1, found: pos });
            }
        }

        Self::from_values(rows.into_iter().map(|(_, v)| v).collect())
    }

    /// Read a `position value` table from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// The (clamped) reactivity at `position`.
    pub fn value_at(&self, position: NAIDX) -> Result<f64, ProfileError> {
        self.get(position).ok_or(ProfileError::MissingPosition(position))
    }

    pub fn get(&self, position: NAIDX) -> Option<f64> {
        (position as usize)
            .checked_sub(1)
            .and_then(|idx| self.values.get(idx))
            .copied()
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterator over `(position, value)` in position order.
    pub fn iter(&self) -> impl Iterator<Item = (NAIDX, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(idx, &v)| ((idx + 1) as NAIDX, v))
    }
}

impl TryFrom<&str> for ReactivityProfile {
    type Error = ProfileError;

    fn try_from(table: &str) -> Result<Self, Self::Error> {
        Self::from_reader(table.as_bytes())
    }
}

fn invalid_line(idx: usize, content: &str) -> ProfileError {
    ProfileError::InvalidLine {
        line: idx + 1,
        content: content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_and_clamp() {
        let p = ReactivityProfile::try_from("1\t0.2\n2\t1.7\n3 0.9\n").unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(p.value_at(1).unwrap(), 0.2);
        assert_eq!(p.value_at(2).unwrap(), 1.0);
        assert_eq!(p.value_at(3).unwrap(), 0.9);
        assert!(p.values().iter().all(|&v| v <= REACTIVITY_MAX));
    }

    #[test]
    fn test_negative_values_are_not_clamped() {
        // Only the upper bound is enforced; noise below zero survives.
        let p = ReactivityProfile::from_values(vec![-0.3, 0.1]).unwrap();
        assert_eq!(p.value_at(1).unwrap(), -0.3);
    }

    #[test]
    fn test_unordered_rows_and_blank_lines() {
        let p = ReactivityProfile::try_from("2 0.5\n\n1 0.1\n").unwrap();
        assert_eq!(p.values(), &[0.1, 0.5]);
    }

    #[test]
    fn test_nan_is_accepted() {
        let p = ReactivityProfile::try_from("1 NaN\n2 0.3\n").unwrap();
        assert!(p.value_at(1).unwrap().is_nan());
    }

    #[test]
    fn test_missing_position() {
        let p = ReactivityProfile::from_values(vec![0.1, 0.2]).unwrap();
        assert!(matches!(p.value_at(3), Err(ProfileError::MissingPosition(3))));
        assert!(matches!(p.value_at(0), Err(ProfileError::MissingPosition(0))));
        assert_eq!(p.get(2), Some(0.2));
    }

    #[test]
    fn test_too_many_positions() {
        let max = NAIDX::MAX as usize;
        assert_eq!(ReactivityProfile::from_values(vec![0.1; max]).unwrap().len(), max);
        assert!(matches!(
            ReactivityProfile::from_values(vec![0.1; max + 1]),
            Err(ProfileError::TooLong(n)) if n == max + 1
        ));
    }

    #[test]
    fn test_table_errors() {
        assert!(matches!(
            ReactivityProfile::try_from("1 0.1\n1 0.2\n"),
            Err(ProfileError::DuplicatePosition(1))
        ));
        assert!(matches!(
            ReactivityProfile::try_from("1 0.1\n3 0.2\n"),
            Err(ProfileError::NotContiguous { expected: 2, found: 3 })
        ));
        assert!(matches!(
            ReactivityProfile::try_from("1 0.1\n2\n"),
            Err(ProfileError::InvalidLine { line: 2, .. })
        ));
        assert!(matches!(
            ReactivityProfile::try_from("a 0.1\n"),
            Err(ProfileError::InvalidLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = ReactivityProfile::from_path("/nonexistent/shape.txt").unwrap_err();
        assert!(matches!(err, ProfileError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/shape.txt"));
    }
}
