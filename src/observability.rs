//! Logging setup for the command-line host.
//!
//! Logs go to stderr so stdout stays reserved for CSV output. Card data is
//! never logged by the library, so no filtering is needed here.

use std::io;

use clap::ValueEnum;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format for interactive use
    #[default]
    Pretty,
    /// JSON lines for log aggregation
    Json,
}

impl LogFormat {
    /// Determines log format from the `LOG_FORMAT` environment variable
    ///
    /// `json` selects JSON, anything else (or unset) selects pretty output.
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Installs the global tracing subscriber
///
/// Level filtering follows `RUST_LOG` and defaults to `info`. Calling this
/// more than once has no effect beyond the first call.
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry().with(filter);

    // try_init: a second initialization is not an error worth failing over
    let _ = match format {
        LogFormat::Pretty => subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogFormat::Json => subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(io::stderr),
            )
            .try_init(),
    };
}
