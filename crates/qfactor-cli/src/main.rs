//! qfactor Command-Line Interface
//!
//! The main entry point for the qfactor CLI tool. `qfactor circuit` prints
//! the default period-finding circuit:
//!
//! ```text
//! control[0]: ───H───@───H───@──────────────────────────────────M('control')───
//! control[1]: ───H───┼───@───@^0.5───H─────────────@────────────M──────────────
//! control[2]: ───H───┼───┼───@─────────────────────@^0.25───H───M──────────────
//!  target[0]: ───────X───┼───┼───────M('target')───────────────────────────────
//!  target[1]: ───────────X───┼───────M─────────────────────────────────────────
//!  target[2]: ───────────────X───────M─────────────────────────────────────────
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{circuit, factor, version};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging; RUST_LOG takes precedence over -v
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Factor(args) => factor::execute(&args),

        Commands::Circuit {
            control_size,
            target_size,
        } => circuit::execute(control_size, target_size),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
