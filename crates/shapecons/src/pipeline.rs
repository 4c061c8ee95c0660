//! One constraint-generation run: load, compare, intersect.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use log::debug;
use log::info;
use log::warn;

use sc_reactivity::BandStatistics;
use sc_reactivity::ConsistencyWindow;
use sc_reactivity::ConstraintSelector;
use sc_reactivity::ConstraintSet;
use sc_reactivity::ProfileError;
use sc_reactivity::ReactivityProfile;
use sc_structure::ParseOptions;
use sc_structure::Structure;
use sc_structure::find_dotbracket;

use crate::ConstraintFile;
use crate::Error;

/// File extension of reactivity tables in a statistics directory.
pub const TABLE_EXTENSION: &str = "txt";

/// Inputs and settings of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Reactivity table of the shorter fragment.
    pub shorter: PathBuf,
    /// Reactivity table of the longer fragment.
    pub longer: PathBuf,
    /// File holding the dot-bracket structure.
    pub structure: PathBuf,
    /// Directory of tables for the band statistics. Defaults to the two
    /// compared profiles.
    pub stats_dir: Option<PathBuf>,
    /// Odd width of the consistency window, 1 disables it.
    pub window: usize,
    /// Strip `-` gap markers from the structure before numbering.
    pub remove_gaps: bool,
}

impl Options {
    pub fn new<P: Into<PathBuf>>(shorter: P, longer: P, structure: P) -> Self {
        Self {
            shorter: shorter.into(),
            longer: longer.into(),
            structure: structure.into(),
            stats_dir: None,
            window: 1,
            remove_gaps: false,
        }
    }
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub structure: Structure,
    pub statistics: BandStatistics,
    pub retained: ConstraintSet,
    pub constraints: ConstraintFile,
}

pub fn run(options: &Options) -> Result<Outcome, Error> {
    let window = ConsistencyWindow::new(options.window)?;
    let parse_options = ParseOptions { remove_gaps: options.remove_gaps };
    let structure = read_structure(&options.structure, parse_options)?;

    let shorter = ReactivityProfile::from_path(&options.shorter)?;
    let longer = ReactivityProfile::from_path(&options.longer)?;
    if shorter.len() > longer.len() {
        warn!(
            "Shorter fragment has {} positions, longer fragment only {}.",
            shorter.len(),
            longer.len()
        );
    }
    if structure.len() != shorter.len() {
        warn!(
            "Structure length {} differs from shorter fragment length {}.",
            structure.len(),
            shorter.len()
        );
    }

    let statistics = match &options.stats_dir {
        Some(dir) => BandStatistics::compute(&load_profiles(dir)?),
        None => BandStatistics::compute([&shorter, &longer]),
    };

    let retained = ConstraintSelector::new(&statistics)
        .with_window(window)
        .select(&shorter, &longer);
    let constraints = ConstraintFile::emit(structure.primary(), &retained);

    info!(
        "Kept {} of {} base pairs ({} consistent positions).",
        constraints.pairs().len(),
        structure.primary().len(),
        retained.len()
    );
    if !structure.pseudoknot().is_empty() {
        info!("Pseudoknot pairs are not constrained: {}", structure.pseudoknot());
    }

    Ok(Outcome { structure, statistics, retained, constraints })
}

/// Read and parse the dot-bracket structure stored in `path`.
pub fn read_structure(path: &Path, options: ParseOptions) -> Result<Structure, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    find_dotbracket(&text)
        .and_then(|db| Structure::parse(db, options))
        .map_err(|source| Error::Structure { path: path.to_path_buf(), source })
}

/// Load every reactivity table in `dir`, in file name order.
///
/// `*.txt` files whose first line is not a `position value` row are skipped.
pub fn load_profiles(dir: &Path) -> Result<Vec<ReactivityProfile>, Error> {
    let io_error = |source| Error::Io { path: dir.to_path_buf(), source };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == TABLE_EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort();
    debug!("Loading {} reactivity tables from {}.", paths.len(), dir.display());

    let mut profiles = Vec::with_capacity(paths.len());
    for path in &paths {
        match ReactivityProfile::from_path(path) {
            Ok(profile) => profiles.push(profile),
            // Not a table at all, e.g. a constraint file written next to them.
            Err(ProfileError::InvalidLine { line: 1, .. }) => {
                warn!("Skipping {}: not a reactivity table.", path.display());
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(profiles)
}
