//! Diagnostics printed after a run (not part of the constraint file).

use colored::Colorize;
use sc_reactivity::BandStatistics;
use sc_reactivity::ReactivityBand;

fn fmt_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.4}"),
        None => "n/a".to_string(),
    }
}

/// Mean and standard deviation per band as a small table.
pub fn statistics_table(stats: &BandStatistics) -> String {
    let mut out = format!("{}\n", "band    count  mean    sd".bold());
    for band in ReactivityBand::ALL {
        let s = stats.get(band);
        let row = format!(
            "{:<7} {:>5}  {:<7} {}",
            band.to_string(),
            s.count,
            fmt_stat(s.mean),
            fmt_stat(s.sd)
        );
        if s.sd.is_some() {
            out.push_str(&row);
        } else {
            out.push_str(&row.yellow().to_string());
        }
        out.push('\n');
    }
    out
}

pub fn statistics_json(stats: &BandStatistics) -> serde_json::Result<String> {
    serde_json::to_string_pretty(stats)
}
