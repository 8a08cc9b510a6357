//! Dashboard service facade.
//!
//! Ties the progress repository and the plan catalog together behind the
//! handful of operations the presentation layer drives. Derived metrics are
//! never cached: every analytics call recomputes from the current log
//! snapshot.

use crate::analytics::{self, AnalyticsReport};
use crate::assistant;
use crate::plan::RehabPlan;
use crate::resources::Resource;
use crate::storage::{NewProgressEntry, ProgressEntry, ProgressRepository, StoreError};

/// The request/response boundary of the tracker.
pub struct Dashboard {
    store: Box<dyn ProgressRepository>,
    plan: RehabPlan,
    resources: Vec<Resource>,
}

impl Dashboard {
    /// Create a dashboard over the given repository, plan, and resource
    /// library.
    pub fn new(
        store: Box<dyn ProgressRepository>,
        plan: RehabPlan,
        resources: Vec<Resource>,
    ) -> Self {
        Self {
            store,
            plan,
            resources,
        }
    }

    /// The active rehab plan.
    pub fn plan(&self) -> &RehabPlan {
        &self.plan
    }

    /// Reference material available alongside the plan.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Log a progress entry. Returns the materialized entry with its
    /// store-assigned id and timestamp.
    pub fn log_entry(&self, candidate: NewProgressEntry) -> Result<ProgressEntry, StoreError> {
        let entry = self.store.append(candidate)?;
        tracing::info!(entry_id = %entry.id, exercise_id = %entry.exercise_id, "Logged progress entry");
        Ok(entry)
    }

    /// Full progress history in append order.
    pub fn history(&self) -> Result<Vec<ProgressEntry>, StoreError> {
        self.store.read_all()
    }

    /// Recompute all derived metrics from the current log snapshot.
    pub fn analytics(&self) -> Result<AnalyticsReport, StoreError> {
        let entries = self.store.read_all()?;
        Ok(analytics::report(&entries, &self.plan.exercises))
    }

    /// Answer a chat message with a canned response.
    pub fn respond(&self, message: &str) -> &'static str {
        assistant::respond(message)
    }
}
