//! Braintree processor CLI
//!
//! Command-line host for charging contribution form submissions.
//!
//! # Usage
//!
//! ```bash
//! braintree-processor --config processors.toml check-config --processor main
//! braintree-processor --config processors.toml charge --processor main submissions.csv > results.csv
//! ```
//!
//! `charge` reads form submissions from the input CSV (host field names as
//! column headers), charges each one, and writes one result row per
//! submission to stdout. Logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success (individual declined or invalid submissions do not change this)
//! - 1: Error (unknown processor, incomplete credentials, unreadable input, etc.)

use braintree_direct_payment::cli::{self, Command};
use braintree_direct_payment::config::Settings;
use braintree_direct_payment::core::ProcessorRegistry;
use braintree_direct_payment::observability::init_logging;
use braintree_direct_payment::BatchRunner;
use std::process;
use tracing::error;

fn main() {
    let args = cli::parse_args();
    init_logging(args.log_format());

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &cli::CliArgs) -> Result<(), String> {
    let settings = Settings::load(args.config.as_deref()).map_err(|e| e.to_string())?;
    let registry = ProcessorRegistry::new();

    match &args.command {
        Command::CheckConfig { processor } => {
            let credentials = settings.processor(processor).map_err(|e| e.to_string())?;
            let processor = registry
                .get_or_create(processor, credentials)
                .map_err(|e| e.to_string())?;

            let messages = processor.check_config();
            if messages.is_empty() {
                println!("OK");
                Ok(())
            } else {
                for message in &messages {
                    println!("{}", message);
                }
                Err(format!("{} credential(s) missing", messages.len()))
            }
        }
        Command::Charge {
            processor,
            input_file,
        } => {
            let credentials = settings.processor(processor).map_err(|e| e.to_string())?;
            let processor = registry
                .get_or_create(processor, credentials)
                .map_err(|e| e.to_string())?;
            processor.ensure_config().map_err(|e| e.to_string())?;

            let mut output = std::io::stdout();
            BatchRunner::new(&processor).process(input_file, &mut output)?;
            Ok(())
        }
    }
}
