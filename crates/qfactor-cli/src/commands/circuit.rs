//! Circuit command implementation.

use anyhow::Result;
use console::style;

use qfactor_shor::CircuitBuilder;

use super::common::print_circuit_stats;

/// Execute the circuit command.
pub fn execute(control_size: u32, target_size: u32) -> Result<()> {
    let circuit = CircuitBuilder::new(control_size, target_size).build()?;

    println!(
        "{} Period-finding circuit ({} control, {} target)",
        style("→").cyan().bold(),
        style(control_size).green(),
        style(target_size).green()
    );
    print_circuit_stats(&circuit);
    println!();
    println!("{circuit}");

    Ok(())
}
