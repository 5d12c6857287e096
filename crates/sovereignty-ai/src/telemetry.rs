use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    Filter {
        directives: String,
        source: ParseError,
    },
    Install(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { directives, .. } => {
                write!(f, "log filter directives '{directives}' did not parse")
            }
            TelemetryError::Install(err) => {
                write!(f, "failed to install the tracing subscriber: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Install(err) => Some(&**err),
        }
    }
}

/// Default directives keep the HTTP client internals quiet so advisory
/// call logs stay readable at debug level.
fn default_directives(log_level: &str) -> String {
    format!("{log_level},hyper=warn,reqwest=warn")
}

fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directives = default_directives(&config.log_level);
    EnvFilter::try_new(&directives).map_err(|source| TelemetryError::Filter { directives, source })
}

/// Installs the global compact-format subscriber. `RUST_LOG` wins over
/// the configured log level when set.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config)?)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Install)
}
