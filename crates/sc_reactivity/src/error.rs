use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::NAIDX;

/// Errors raised while loading or querying a reactivity profile.
#[derive(Debug)]
pub enum ProfileError {
    /// A reactivity table could not be read.
    Io { path: PathBuf, source: io::Error },

    /// Reading from an already opened source failed.
    Read(io::Error),

    /// A line that is not `position value`.
    InvalidLine { line: usize, content: String },

    /// The same position occurs twice in one table.
    DuplicatePosition(NAIDX),

    /// Positions do not run densely from 1.
    NotContiguous { expected: usize, found: NAIDX },

    /// The queried position is not part of the profile.
    MissingPosition(NAIDX),

    /// More values than `NAIDX` positions.
    TooLong(usize),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::Io { path, source } => {
                write!(f, "cannot read reactivity table {}: {source}", path.display())
            }
            ProfileError::Read(err) => write!(f, "i/o error: {err}"),
            ProfileError::InvalidLine { line, content } => {
                write!(f, "invalid reactivity line {line}: '{content}'")
            }
            ProfileError::DuplicatePosition(p) => write!(f, "duplicate position {p}"),
            ProfileError::NotContiguous { expected, found } => {
                write!(f, "positions are not contiguous: expected {expected}, found {found}")
            }
            ProfileError::MissingPosition(p) => write!(f, "no reactivity for position {p}"),
            ProfileError::TooLong(n) => {
                write!(f, "profile of {n} positions exceeds the supported maximum")
            }
        }
    }
}

impl std::error::Error for ProfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileError::Io { source, .. } => Some(source),
            ProfileError::Read(err) => Some(err),
            _ => None,
        }
    }
}

/// A consistency window must have an odd, non-zero width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWindow(pub usize);

impl fmt::Display for InvalidWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window width must be odd and at least 1, got {}", self.0)
    }
}

impl std::error::Error for InvalidWindow {}
