use crate::observability::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Charge contribution form submissions through Braintree
#[derive(Parser, Debug)]
#[command(name = "braintree-processor")]
#[command(about = "Charge contribution form submissions through Braintree", long_about = None)]
pub struct CliArgs {
    /// Settings file with one [processors.<name>] table per processor
    #[arg(
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to the processor settings file (TOML)"
    )]
    pub config: Option<PathBuf>,

    /// Log output format
    #[arg(
        long = "log-format",
        value_name = "FORMAT",
        global = true,
        help = "Log format: 'pretty' or 'json' (default: LOG_FORMAT or pretty)"
    )]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Charge every form submission in a CSV file, writing results to stdout
    Charge {
        /// Name of the configured processor to charge through
        #[arg(long = "processor", value_name = "NAME")]
        processor: String,

        /// Input CSV file of form submissions
        #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
        input_file: PathBuf,
    },

    /// Report missing credentials for a processor
    CheckConfig {
        /// Name of the configured processor to check
        #[arg(long = "processor", value_name = "NAME")]
        processor: String,
    },
}

impl CliArgs {
    /// Log format from the command line, falling back to `LOG_FORMAT`
    pub fn log_format(&self) -> LogFormat {
        self.log_format.unwrap_or_else(LogFormat::from_env)
    }
}
