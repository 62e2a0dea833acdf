//! Factor command implementation.

use std::time::Duration;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use qfactor_adapter_sim::StatevectorSimulator;
use qfactor_shor::{ShorConfig, ShorPipeline};

use super::common::{load_config, print_report};
use crate::cli::FactorArgs;

/// Execute the factor command.
pub fn execute(args: &FactorArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ShorConfig::default(),
    };
    args.apply(&mut config);
    debug!(?config, "resolved configuration");

    println!(
        "{} Running Shor's Algorithm Circuit for N = {} with {} repetitions...",
        style("→").cyan().bold(),
        style(args.n).green(),
        config.repetitions
    );

    let simulator = StatevectorSimulator::new().with_optional_seed(config.seed);
    let pipeline = ShorPipeline::new(simulator, config);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.set_message("Sampling period-finding circuit...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let report = pipeline.run(args.n);
    spinner.finish_and_clear();

    print_report(&report?);
    Ok(())
}
