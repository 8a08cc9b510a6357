//! Rehabilitation plan catalog.
//!
//! The plan is read-only to the tracker: the store never validates entry
//! exercise ids against it, and the analytics engine only uses it for name
//! resolution and completion-rate denominators.

use std::path::Path;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One prescribed exercise with optional targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Catalog identifier referenced by progress entries
    pub id: String,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Target sets
    #[serde(default)]
    pub sets: Option<u32>,
    /// Target reps per set
    #[serde(default)]
    pub reps: Option<u32>,
    /// Target hold/duration
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    /// How to perform the exercise, safety notes
    #[serde(default)]
    pub instructions: Option<String>,
}

impl Exercise {
    /// Create an exercise with a generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: None,
            sets: None,
            reps: None,
            duration_seconds: None,
            instructions: None,
        }
    }

    /// Set target sets and reps.
    pub fn with_sets_reps(mut self, sets: u32, reps: u32) -> Self {
        self.sets = Some(sets);
        self.reps = Some(reps);
        self
    }

    /// Set target duration.
    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }

    /// Set description text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set instruction text.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }
}

/// A rehabilitation plan: a named, dated set of exercises.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RehabPlan {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl RehabPlan {
    /// Look up an exercise by catalog id.
    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|ex| ex.id == id)
    }
}

impl Default for RehabPlan {
    /// The built-in starter plan, used when no plan document exists.
    fn default() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Initial Bicep Recovery Plan".to_string(),
            start_date: Utc::now().date_naive(),
            goal: Some("Improve bicep activation and range of motion.".to_string()),
            exercises: vec![
                Exercise::new("Passive Elbow Flexion")
                    .with_description(
                        "Gently bend elbow with assistance from other arm or therapist.",
                    )
                    .with_sets_reps(3, 10)
                    .with_instructions("Move slowly within pain-free range."),
                Exercise::new("Isometric Bicep Contraction")
                    .with_description(
                        "Attempt to flex bicep against an immovable object without moving the elbow.",
                    )
                    .with_duration(5)
                    .with_instructions(
                        "Hold contraction gently for 5 seconds, relax. Don't push into pain.",
                    ),
                Exercise::new("Assisted Active Elbow Flexion (Gravity Eliminated)")
                    .with_description("Lying on your side, slide forearm towards shoulder.")
                    .with_sets_reps(3, 10)
                    .with_instructions("Focus on feeling the bicep engage, even slightly."),
            ],
        }
    }
}

/// Load the plan from a JSON document, falling back to the built-in starter
/// plan when the file does not exist.
pub fn load_plan(path: impl AsRef<Path>) -> Result<RehabPlan, PlanError> {
    let path = path.as_ref();

    if !path.exists() {
        tracing::info!(path = %path.display(), "No plan document found, using built-in plan");
        return Ok(RehabPlan::default());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| PlanError::IoError(e.to_string()))?;

    serde_json::from_str(&content).map_err(|e| PlanError::ParseError(e.to_string()))
}

/// Plan catalog errors.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
