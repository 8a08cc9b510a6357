//! Exercise frequency histogram.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::plan::Exercise;
use crate::storage::ProgressEntry;

/// Fallback label when an exercise id is not in the catalog.
pub const UNKNOWN_EXERCISE: &str = "Unknown";

/// Entry count for one exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseFrequency {
    /// Exercise id as logged
    pub exercise_id: String,
    /// Display name resolved from the catalog, or "Unknown"
    pub name: String,
    /// Number of log entries for this exercise
    pub count: u32,
}

/// Count entries per exercise id, most-logged first.
///
/// Names come from the catalog; ids the catalog does not know get the
/// "Unknown" label but still count separately. The sort is stable, so
/// exercises with equal counts stay in first-encountered order.
pub fn exercise_frequency(
    entries: &[ProgressEntry],
    exercises: &[Exercise],
) -> Vec<ExerciseFrequency> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for entry in entries {
        let count = counts.entry(entry.exercise_id.as_str()).or_insert_with(|| {
            order.push(entry.exercise_id.as_str());
            0
        });
        *count += 1;
    }

    let mut histogram: Vec<ExerciseFrequency> = order
        .into_iter()
        .map(|id| {
            let name = exercises
                .iter()
                .find(|ex| ex.id == id)
                .map(|ex| ex.name.clone())
                .unwrap_or_else(|| UNKNOWN_EXERCISE.to_string());

            ExerciseFrequency {
                exercise_id: id.to_string(),
                name,
                count: counts[id],
            }
        })
        .collect();

    histogram.sort_by(|a, b| b.count.cmp(&a.count));
    histogram
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn entry_for(exercise_id: &str) -> ProgressEntry {
        ProgressEntry {
            id: Uuid::new_v4(),
            exercise_id: exercise_id.to_string(),
            date: Utc::now(),
            completed_sets: None,
            completed_reps: None,
            duration_seconds: None,
            pain_level: None,
            difficulty_level: None,
            notes: None,
        }
    }

    fn exercise(id: &str, name: &str) -> Exercise {
        Exercise {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            sets: None,
            reps: None,
            duration_seconds: None,
            instructions: None,
        }
    }

    #[test]
    fn test_descending_with_first_seen_tie_break() {
        // A:3, B:5, C:3 — A and C tie, A was seen first.
        let mut entries = Vec::new();
        entries.extend((0..3).map(|_| entry_for("a")));
        entries.extend((0..5).map(|_| entry_for("b")));
        entries.extend((0..3).map(|_| entry_for("c")));

        let catalog = vec![
            exercise("a", "Flexion"),
            exercise("b", "Isometric Hold"),
            exercise("c", "Slide"),
        ];

        let histogram = exercise_frequency(&entries, &catalog);
        let order: Vec<_> = histogram
            .iter()
            .map(|f| (f.name.as_str(), f.count))
            .collect();
        assert_eq!(
            order,
            vec![("Isometric Hold", 5), ("Flexion", 3), ("Slide", 3)]
        );
    }

    #[test]
    fn test_unknown_exercise_fallback() {
        let entries = vec![entry_for("ghost")];
        let histogram = exercise_frequency(&entries, &[]);

        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram[0].name, UNKNOWN_EXERCISE);
        assert_eq!(histogram[0].exercise_id, "ghost");
        assert_eq!(histogram[0].count, 1);
    }

    #[test]
    fn test_empty_log() {
        let catalog = vec![exercise("a", "Flexion")];
        assert!(exercise_frequency(&[], &catalog).is_empty());
    }
}
