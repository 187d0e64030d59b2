//! Policy comparator (§4.5).
//!
//! The only piece of cross-run analysis kept in the kernel: a pure function
//! over two already-built [`StatsReport`]s, with no I/O or presentation
//! concerns, matching the narrow host-facing API's own shape (§6).

use crate::entities::Priority;
use crate::stats::StatsReport;

const WEIGHT_EMERGENCY: f64 = 3.0;
const WEIGHT_ELECTIVE: f64 = 1.5;
const WEIGHT_AMBULATORY: f64 = 1.0;
const WEIGHT_UNTREATED: f64 = 1000.0;

/// Lower is better. Combines weighted mean waits per priority class with a
/// heavy penalty for the fraction of patients never treated — which
/// includes arrivals rejected for lack of queue capacity, not only those
/// still waiting when the run ended.
pub fn score(report: &StatsReport) -> f64 {
    let wait_term = WEIGHT_EMERGENCY * wait_for(report, Priority::Emergency)
        + WEIGHT_ELECTIVE * wait_for(report, Priority::Elective)
        + WEIGHT_AMBULATORY * wait_for(report, Priority::Ambulatory);

    let untreated_fraction = if report.total_arrivals == 0 {
        0.0
    } else {
        1.0 - (report.total_discharged as f64 / report.total_arrivals as f64)
    };

    wait_term + WEIGHT_UNTREATED * untreated_fraction
}

fn wait_for(report: &StatsReport, priority: Priority) -> f64 {
    report
        .wait_mean_seconds
        .get(&format!("{priority:?}"))
        .copied()
        .unwrap_or(0.0)
}

/// Ranks `reports` best-first (ascending score), pairing each with its
/// originating label.
pub fn rank<'a>(reports: &'a [(&'a str, StatsReport)]) -> Vec<(&'a str, f64)> {
    let mut scored: Vec<(&str, f64)> = reports.iter().map(|(label, r)| (*label, score(r))).collect();
    scored.sort_by(|a, b| a.1.partial_cmp(&b.1).expect("scores are never NaN"));
    scored
}
