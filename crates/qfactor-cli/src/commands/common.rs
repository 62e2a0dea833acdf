//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use qfactor_ir::Circuit;
use qfactor_shor::{ShorConfig, ShorError, ShorReport};

/// Load a [`ShorConfig`] from a YAML file.
pub fn load_config(path: &Path) -> Result<ShorConfig> {
    if !path.exists() {
        anyhow::bail!("Config file not found: {}", path.display());
    }

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config(&source).with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Parse a YAML config document. An empty document yields the defaults.
pub fn parse_config(source: &str) -> Result<ShorConfig> {
    if source.trim().is_empty() {
        return Ok(ShorConfig::default());
    }
    Ok(serde_yaml_ng::from_str(source)?)
}

/// Print register sizes, depth and gate counts of `circuit`.
pub fn print_circuit_stats(circuit: &Circuit) {
    let registers: Vec<String> = circuit
        .registers()
        .iter()
        .map(|r| format!("{}[{}]", r.name(), r.len()))
        .collect();

    println!(
        "  Qubits: {} ({}), depth {}, {} ops",
        circuit.num_qubits(),
        registers.join(", "),
        circuit.depth(),
        circuit.num_ops()
    );

    let counts: Vec<String> = circuit
        .count_ops()
        .into_iter()
        .map(|(name, count)| format!("{name}: {count}"))
        .collect();
    println!("  Gates:  {}", counts.join(", "));
}

/// Print the outcome of a factoring run.
pub fn print_report(report: &ShorReport) {
    println!("\n{}", style("Circuit:").bold());
    println!("{}", report.circuit);

    println!("\n{}", style("Simulation Results (Measurement):").bold());
    println!("{}", report.result);

    if let Some(time_ms) = report.result.execution_time_ms() {
        println!("\n  Execution time: {} ms", style(time_ms).yellow());
    }

    println!(
        "\nExtracted Period from the Quantum Circuit: {}",
        style(report.period).cyan().bold()
    );

    match &report.outcome {
        Ok(pair) => println!(
            "{} Factors of {}: {}",
            style("✓").green().bold(),
            report.n,
            style(pair).green().bold()
        ),
        Err(e) => {
            println!(
                "{} Failed to find factors. Try running the algorithm multiple times.",
                style("✗").red().bold()
            );
            if let ShorError::TrivialFactors { .. } = e {
                println!("  {}", style(e).dim());
            }
        }
    }
}
