//! RehabTrack - Rehabilitation Progress Tracking
//!
//! Core of a self-hosted rehabilitation dashboard: an append-only progress
//! log backed by a single JSON document, and a pure analytics engine that
//! derives pain trends, exercise frequency, and completion/streak metrics
//! from it on demand.

pub mod analytics;
pub mod assistant;
pub mod dashboard;
pub mod plan;
pub mod resources;
pub mod storage;

// Re-export commonly used types
pub use analytics::AnalyticsReport;
pub use dashboard::Dashboard;
pub use plan::{Exercise, RehabPlan};
pub use storage::{JsonProgressStore, NewProgressEntry, ProgressEntry, ProgressRepository};
