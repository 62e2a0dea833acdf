//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - simulated Shor-style factorization",
        style("qfactor").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qfactor-ir           Circuit intermediate representation");
    println!("  qfactor-hal          Simulator abstraction layer");
    println!("  qfactor-adapter-sim  State-vector simulator");
    println!("  qfactor-shor         Period finding and factor recovery");
    println!("  qfactor-cli          Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/hiq-lab/qfactor").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
