//! Living Beings - Entry Point
//!
//! Runs the demo scenario and prints what every entity is doing.
//! Diagnostics go to stderr; stdout only carries the narrated lines.

use living_beings::core::config::config;
use living_beings::core::error::{BeingError, Result};
use living_beings::simulation::{run_scenario, Narrator};

fn main() -> Result<()> {
    let config = config();
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| BeingError::Logging(e.to_string()))?;

    tracing::info!("Living Beings starting...");

    let report = run_scenario(Narrator::with_echo(config.echo_to_stdout));

    if tracing::enabled!(tracing::Level::TRACE) {
        let snapshot = report.snapshot()?;
        tracing::trace!(snapshot = %snapshot, "final state");
    }

    tracing::info!(
        lines = report.lines.len(),
        carnivores = report.total_carnivores,
        "Scenario complete"
    );

    Ok(())
}
