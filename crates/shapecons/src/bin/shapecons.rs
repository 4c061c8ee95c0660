//! Derive reactivity-consistent base-pair constraints for a fragment pair.
//!
//! ```shell
//! shapecons --shorter frag_a.txt --longer frag_b.txt --structure frag_a.db \
//!     --stats-dir reactivities/ --window 5 -o frag_a_cons.txt
//! ```

use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use clap_verbosity_flag::WarnLevel;

use shapecons::Options;
use shapecons::statistics_json;
use shapecons::statistics_table;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Reactivity table (`position value`) of the shorter fragment.
    #[arg(long)]
    shorter: PathBuf,

    /// Reactivity table of the longer fragment.
    #[arg(long)]
    longer: PathBuf,

    /// File containing the dot-bracket structure of the shorter fragment.
    #[arg(long)]
    structure: PathBuf,

    /// Directory of `*.txt` reactivity tables used for band statistics.
    /// Files whose first line is not a `position value` row (such as
    /// constraint files) are skipped.
    #[arg(long)]
    stats_dir: Option<PathBuf>,

    /// Odd width of the neighbourhood consistency window.
    #[arg(long, default_value_t = 1)]
    window: usize,

    /// Remove `-` gap markers from the structure before numbering.
    #[arg(long)]
    remove_gaps: bool,

    /// Output constraint file (stdout if omitted).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report band statistics as JSON instead of a table.
    #[arg(long)]
    stats_json: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

impl From<&Args> for Options {
    fn from(args: &Args) -> Self {
        Options {
            shorter: args.shorter.clone(),
            longer: args.longer.clone(),
            structure: args.structure.clone(),
            stats_dir: args.stats_dir.clone(),
            window: args.window,
            remove_gaps: args.remove_gaps,
        }
    }
}

fn init_logging(verbose: &Verbosity<WarnLevel>) {
    match std::env::var("RUST_LOG") {
        Ok(_) => env_logger::Builder::from_default_env().init(),
        Err(_) => env_logger::Builder::new()
            .filter_level(verbose.log_level_filter())
            .init(),
    };
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let outcome = shapecons::run(&Options::from(&args))?;

    match &args.output {
        Some(path) => outcome
            .constraints
            .write(path)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{}", outcome.constraints),
    }

    let report = if args.stats_json {
        statistics_json(&outcome.statistics)?
    } else {
        statistics_table(&outcome.statistics)
    };
    writeln!(std::io::stderr(), "{}", report.trim_end())?;
    Ok(())
}
