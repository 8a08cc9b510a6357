//! Pain level trend over calendar days.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::storage::ProgressEntry;

/// Average pain for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PainTrendPoint {
    /// Calendar day of the bucket
    pub date: NaiveDate,
    /// Mean of all pain levels recorded that day
    pub avg_pain: f32,
    /// Number of entries that carried a pain level
    pub samples: u32,
}

/// Bucket entries by calendar day and average `pain_level` per bucket.
///
/// Entries without a pain level do not open a bucket and do not shift an
/// existing bucket's mean. Days with no pain-bearing entries are absent from
/// the series. The result is sorted ascending by date regardless of the
/// order entries arrived in.
pub fn pain_trend(entries: &[ProgressEntry]) -> Vec<PainTrendPoint> {
    let mut buckets: BTreeMap<NaiveDate, (f32, u32)> = BTreeMap::new();

    for entry in entries {
        let Some(pain) = entry.pain_level else {
            continue;
        };

        let day = entry.date.date_naive();
        let (mean, count) = buckets.entry(day).or_insert((0.0, 0));

        // Running mean update; identical to the plain arithmetic mean of the
        // bucket's values.
        *mean = (*mean * *count as f32 + pain as f32) / (*count + 1) as f32;
        *count += 1;
    }

    buckets
        .into_iter()
        .map(|(date, (avg_pain, samples))| PainTrendPoint {
            date,
            avg_pain,
            samples,
        })
        .collect()
}
