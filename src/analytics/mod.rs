//! Progress analytics module.
//!
//! Pure, stateless calculations over the full progress log plus the exercise
//! catalog. Nothing here touches storage; callers pass in the current log
//! snapshot and get plain derived values out:
//! - Pain Trend (per-day average pain series)
//! - Exercise Frequency (per-exercise histogram)
//! - Completion Summary (completion rate, totals, streak, latest pain)

pub mod frequency;
pub mod pain_trend;
pub mod summary;

// Re-exports for convenience
pub use frequency::{exercise_frequency, ExerciseFrequency};
pub use pain_trend::{pain_trend, PainTrendPoint};
pub use summary::{completion_summary, CompletionSummary};

use serde::{Deserialize, Serialize};

use crate::plan::Exercise;
use crate::storage::ProgressEntry;

/// All derived dashboard metrics, computed from one log snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub pain_trend: Vec<PainTrendPoint>,
    pub exercise_frequency: Vec<ExerciseFrequency>,
    pub summary: CompletionSummary,
}

/// Compute the full analytics report.
///
/// Entries may arrive in any order; no output assumes the log is sorted by
/// date. Empty inputs produce empty series and zeroed metrics.
pub fn report(entries: &[ProgressEntry], exercises: &[Exercise]) -> AnalyticsReport {
    AnalyticsReport {
        pain_trend: pain_trend(entries),
        exercise_frequency: exercise_frequency(entries, exercises),
        summary: completion_summary(entries, exercises),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_on_empty_inputs() {
        let report = report(&[], &[]);
        assert!(report.pain_trend.is_empty());
        assert!(report.exercise_frequency.is_empty());
        assert_eq!(report.summary.total_entries, 0);
        assert_eq!(report.summary.completion_rate, 0);
        assert_eq!(report.summary.streak_days, 0);
        assert_eq!(report.summary.latest_pain_level, None);
    }
}
