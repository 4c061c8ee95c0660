use std::fmt;
use std::io;
use std::path::PathBuf;

use sc_reactivity::InvalidWindow;
use sc_reactivity::ProfileError;
use sc_structure::StructureError;

/// Everything that aborts a constraint-generation run.
#[derive(Debug)]
pub enum Error {
    /// A required input or output path could not be accessed.
    Io { path: PathBuf, source: io::Error },

    /// The structure could not be parsed.
    Structure { path: PathBuf, source: StructureError },

    /// A reactivity table is missing or malformed.
    Profile(ProfileError),

    /// The consistency window is misconfigured.
    Window(InvalidWindow),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Error::Structure { path, source } => write!(f, "{}: {source}", path.display()),
            Error::Profile(err) => write!(f, "{err}"),
            Error::Window(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Structure { source, .. } => Some(source),
            Error::Profile(err) => Some(err),
            Error::Window(err) => Some(err),
        }
    }
}

impl From<ProfileError> for Error {
    fn from(err: ProfileError) -> Self {
        Error::Profile(err)
    }
}

impl From<InvalidWindow> for Error {
    fn from(err: InvalidWindow) -> Self {
        Error::Window(err)
    }
}
