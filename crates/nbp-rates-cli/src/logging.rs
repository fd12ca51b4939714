use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Environment variable overriding `--log-level`.
pub const LOG_ENV: &str = "NBP_RATES_LOG";

/// Installs a stderr `fmt` subscriber so stdout carries only the results.
pub fn init_tracing(log_level: &str) -> Result<(), CliError> {
    let filter = std::env::var(LOG_ENV).unwrap_or_else(|_| log_level.to_string());
    let env_filter =
        EnvFilter::try_new(&filter).map_err(|err| CliError::Logging(format!("{filter}: {err}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}
