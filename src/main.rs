//! RehabTrack - Rehabilitation Progress Tracking
//!
//! Main entry point: loads configuration, plan, and the progress log, then
//! logs a dashboard summary. The interactive UI lives elsewhere and drives
//! the same `Dashboard` facade.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rehabtrack::storage::{config, JsonProgressStore};
use rehabtrack::{plan, resources, Dashboard};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RehabTrack v{}", env!("CARGO_PKG_VERSION"));

    let app_config = config::load_config().context("failed to load configuration")?;
    let rehab_plan =
        plan::load_plan(app_config.rehab_plan_path()).context("failed to load rehab plan")?;
    let resource_library = resources::load_resources(app_config.resources_path())
        .context("failed to load resource library")?;
    let store = JsonProgressStore::open(app_config.progress_log_path());

    let dashboard = Dashboard::new(Box::new(store), rehab_plan, resource_library);
    let report = dashboard.analytics().context("failed to compute analytics")?;

    tracing::info!(
        plan = %dashboard.plan().name,
        exercises = dashboard.plan().exercises.len(),
        resources = dashboard.resources().len(),
        "Loaded rehab plan"
    );
    tracing::info!(
        total_entries = report.summary.total_entries,
        completion_rate = report.summary.completion_rate,
        streak_days = report.summary.streak_days,
        latest_pain = ?report.summary.latest_pain_level,
        "Progress summary"
    );

    for point in &report.pain_trend {
        tracing::info!(date = %point.date, avg_pain = point.avg_pain, "Pain trend");
    }

    Ok(())
}
