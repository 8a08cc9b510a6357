//! Integration tests for the analytics engine over a realistic log.

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use rehabtrack::analytics;
use rehabtrack::plan::Exercise;
use rehabtrack::storage::ProgressEntry;

/// Build an entry logged at a specific day and hour.
fn entry(exercise_id: &str, y: i32, m: u32, d: u32, hour: u32, pain: Option<u8>) -> ProgressEntry {
    ProgressEntry {
        id: Uuid::new_v4(),
        exercise_id: exercise_id.to_string(),
        date: Utc.with_ymd_and_hms(y, m, d, hour, 0, 0).unwrap(),
        completed_sets: Some(3),
        completed_reps: Some(10),
        duration_seconds: None,
        pain_level: pain,
        difficulty_level: pain.map(|p| p.saturating_add(1).min(10)),
        notes: None,
    }
}

fn exercise(id: &str, name: &str) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        sets: Some(3),
        reps: Some(10),
        duration_seconds: None,
        instructions: None,
    }
}

fn catalog() -> Vec<Exercise> {
    vec![
        exercise("flexion", "Passive Elbow Flexion"),
        exercise("isometric", "Isometric Bicep Contraction"),
        exercise("slide", "Assisted Active Flexion"),
        exercise("stretch", "Wrist Stretch"),
    ]
}

#[test]
fn test_full_report_over_a_week_of_logs() {
    // Three consecutive days, then a rest day, then one more day.
    let entries = vec![
        entry("flexion", 2025, 1, 1, 9, Some(6)),
        entry("isometric", 2025, 1, 1, 18, Some(4)),
        entry("flexion", 2025, 1, 2, 9, Some(5)),
        entry("flexion", 2025, 1, 3, 9, None),
        entry("isometric", 2025, 1, 5, 9, Some(3)),
    ];

    let report = analytics::report(&entries, &catalog());

    // Streak: Jan 1-3, the Jan 5 entry starts a new run.
    assert_eq!(report.summary.streak_days, 3);
    assert_eq!(report.summary.total_entries, 5);
    // 2 of 4 catalog exercises logged.
    assert_eq!(report.summary.unique_exercises, 2);
    assert_eq!(report.summary.completion_rate, 50);
    assert_eq!(report.summary.latest_pain_level, Some(3));

    // Jan 1 averages 5.0; Jan 3 has no pain data and is absent.
    assert_eq!(report.pain_trend.len(), 3);
    assert!((report.pain_trend[0].avg_pain - 5.0).abs() < f32::EPSILON);
    assert_eq!(report.pain_trend[1].date.to_string(), "2025-01-02");
    assert_eq!(report.pain_trend[2].date.to_string(), "2025-01-05");

    // flexion:3 beats isometric:2.
    assert_eq!(report.exercise_frequency[0].name, "Passive Elbow Flexion");
    assert_eq!(report.exercise_frequency[0].count, 3);
    assert_eq!(report.exercise_frequency[1].count, 2);
}

#[test]
fn test_streak_from_spec_example() {
    let entries = vec![
        entry("flexion", 2025, 1, 1, 9, None),
        entry("flexion", 2025, 1, 2, 9, None),
        entry("flexion", 2025, 1, 3, 9, None),
        entry("flexion", 2025, 1, 5, 9, None),
    ];
    let summary = analytics::completion_summary(&entries, &catalog());
    assert_eq!(summary.streak_days, 3);
}

#[test]
fn test_streak_empty_and_single_day() {
    assert_eq!(analytics::completion_summary(&[], &catalog()).streak_days, 0);

    let one_day = vec![
        entry("flexion", 2025, 1, 1, 8, None),
        entry("isometric", 2025, 1, 1, 20, None),
    ];
    assert_eq!(
        analytics::completion_summary(&one_day, &catalog()).streak_days,
        1
    );
}

#[test]
fn test_streak_later_run_wins() {
    // Two-day run, gap, four-day run.
    let entries = vec![
        entry("flexion", 2025, 2, 1, 9, None),
        entry("flexion", 2025, 2, 2, 9, None),
        entry("flexion", 2025, 2, 10, 9, None),
        entry("flexion", 2025, 2, 11, 9, None),
        entry("flexion", 2025, 2, 12, 9, None),
        entry("flexion", 2025, 2, 13, 9, None),
    ];
    assert_eq!(
        analytics::completion_summary(&entries, &catalog()).streak_days,
        4
    );
}

#[test]
fn test_frequency_tie_break_is_first_seen() {
    let mut entries = Vec::new();
    entries.extend((0..3).map(|_| entry("flexion", 2025, 1, 1, 9, None)));
    entries.extend((0..5).map(|_| entry("isometric", 2025, 1, 1, 9, None)));
    entries.extend((0..3).map(|_| entry("slide", 2025, 1, 1, 9, None)));

    let histogram = analytics::exercise_frequency(&entries, &catalog());
    let ids: Vec<_> = histogram.iter().map(|f| f.exercise_id.as_str()).collect();
    assert_eq!(ids, vec!["isometric", "flexion", "slide"]);
}

#[test]
fn test_pain_trend_spec_example() {
    let entries = vec![
        entry("flexion", 2025, 1, 1, 9, Some(4)),
        entry("flexion", 2025, 1, 1, 12, None),
        entry("flexion", 2025, 1, 1, 18, Some(6)),
    ];

    let trend = analytics::pain_trend(&entries);
    assert_eq!(trend.len(), 1);
    assert!((trend[0].avg_pain - 5.0).abs() < f32::EPSILON);
    assert_eq!(trend[0].samples, 2);
}

#[test]
fn test_everything_safe_on_empty_inputs() {
    let report = analytics::report(&[], &[]);
    assert!(report.pain_trend.is_empty());
    assert!(report.exercise_frequency.is_empty());
    assert_eq!(report.summary, Default::default());

    // Entries but an empty catalog: defined results, rate pinned to 0.
    let entries = vec![entry("flexion", 2025, 1, 1, 9, Some(2))];
    let report = analytics::report(&entries, &[]);
    assert_eq!(report.summary.completion_rate, 0);
    assert_eq!(report.exercise_frequency[0].name, "Unknown");
    assert_eq!(report.pain_trend.len(), 1);
}
