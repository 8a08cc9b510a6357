//! Completion metrics: rate, totals, streak, latest pain.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::plan::Exercise;
use crate::storage::ProgressEntry;

/// Headline metrics for the dashboard summary cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSummary {
    /// Percent of catalog exercises logged at least once, capped at 100:
    /// logged ids absent from the catalog can push distinct-id counts past
    /// the catalog size, but cannot mean more than the whole plan was covered
    pub completion_rate: u8,
    /// Total entries in the log
    pub total_entries: usize,
    /// Distinct exercise ids appearing in the log
    pub unique_exercises: usize,
    /// Longest run of consecutive calendar days with at least one entry
    pub streak_days: u32,
    /// Pain level of the most recently appended entry, if it has one
    pub latest_pain_level: Option<u8>,
}

/// Compute the summary metrics.
///
/// Completion rate is the one uniform rule: distinct exercise ids logged
/// divided by catalog size, rounded to an integer percent. Latest pain comes
/// from the last entry in append order, which is not necessarily the entry
/// with the latest date.
pub fn completion_summary(entries: &[ProgressEntry], exercises: &[Exercise]) -> CompletionSummary {
    if entries.is_empty() {
        return CompletionSummary::default();
    }

    let unique_exercises = entries
        .iter()
        .map(|e| e.exercise_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let completion_rate = if exercises.is_empty() {
        0
    } else {
        let rate = unique_exercises as f64 / exercises.len() as f64 * 100.0;
        rate.round().min(100.0) as u8
    };

    CompletionSummary {
        completion_rate,
        total_entries: entries.len(),
        unique_exercises,
        streak_days: longest_streak(entries),
        latest_pain_level: entries.last().and_then(|e| e.pain_level),
    }
}

/// Longest run of consecutive calendar days that each contain an entry.
///
/// Distinct log dates are deduplicated and sorted first; a run continues
/// while the next date is exactly one day after the previous. One distinct
/// date yields 1, an empty log yields 0.
fn longest_streak(entries: &[ProgressEntry]) -> u32 {
    let mut dates: Vec<NaiveDate> = entries
        .iter()
        .map(|e| e.date.date_naive())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    dates.sort();

    if dates.is_empty() {
        return 0;
    }

    let mut longest = 1;
    let mut current = 1;

    for pair in dates.windows(2) {
        if pair[0].checked_add_days(Days::new(1)) == Some(pair[1]) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
    }

    longest
}
