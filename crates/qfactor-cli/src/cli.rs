//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use qfactor_shor::{DEFAULT_REGISTER_SIZE, FactorMode, PeriodStrategy, ShorConfig};

/// qfactor - simulated Shor-style integer factorization
#[derive(Parser, Debug)]
#[command(name = "qfactor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Factor N by simulating the period-finding circuit
    Factor(FactorArgs),

    /// Print the period-finding circuit without simulating it
    Circuit {
        /// Qubits in the control register
        #[arg(long, default_value_t = DEFAULT_REGISTER_SIZE)]
        control_size: u32,

        /// Qubits in the target register
        #[arg(long, default_value_t = DEFAULT_REGISTER_SIZE)]
        target_size: u32,
    },

    /// Show version information
    Version,
}

/// Arguments of `qfactor factor`.
///
/// Unset options fall back to the config file, then to built-in defaults.
#[derive(Args, Debug)]
pub struct FactorArgs {
    /// The integer to factor
    pub n: u64,

    /// Number of simulator repetitions [default: 100]
    #[arg(short, long, env = "QFACTOR_REPETITIONS")]
    pub repetitions: Option<u32>,

    /// Qubits in the control register [default: 3]
    #[arg(long)]
    pub control_size: Option<u32>,

    /// Qubits in the target register [default: 3]
    #[arg(long)]
    pub target_size: Option<u32>,

    /// How the period is read from the measurements [default: first-shot]
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Reject trivial factor pairs
    #[arg(long)]
    pub strict: bool,

    /// Simulator RNG seed for reproducible runs
    #[arg(long, env = "QFACTOR_SEED")]
    pub seed: Option<u64>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl FactorArgs {
    /// Overlay the options given on the command line onto `config`.
    pub fn apply(&self, config: &mut ShorConfig) {
        if let Some(repetitions) = self.repetitions {
            config.repetitions = repetitions;
        }
        if let Some(size) = self.control_size {
            config.control_size = size;
        }
        if let Some(size) = self.target_size {
            config.target_size = size;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy.into();
        }
        if self.strict {
            config.factor_mode = FactorMode::Strict;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

/// Period strategy as spelled on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyArg {
    /// Difference of the first repetition
    FirstShot,
    /// Most frequent difference across repetitions
    MostFrequent,
}

impl From<StrategyArg> for PeriodStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::FirstShot => PeriodStrategy::FirstShot,
            StrategyArg::MostFrequent => PeriodStrategy::MostFrequent,
        }
    }
}
