mod cli;
mod error;
mod logging;
mod output;

use std::process::ExitCode;
use std::sync::Arc;

use nbp_rates_core::{RateCalculator, ReqwestHttpClient, SourceConfig};

use crate::cli::{Cli, ParseFailure, USAGE};
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(ParseFailure::ArgumentCount) => {
            println!("{USAGE}");
            return ExitCode::from(2);
        }
        Err(ParseFailure::Clap(error)) => error.exit(),
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            output::render_error(&error);
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    logging::init_tracing(&cli.log_level)?;

    let config = SourceConfig::default()
        .with_base_url(cli.base_url)
        .with_timeout_ms(cli.timeout_ms);
    let calculator = RateCalculator::new(Arc::new(ReqwestHttpClient::new()), config);

    let summary = calculator
        .calculate_arguments(&cli.currency, &cli.start_date, &cli.end_date)
        .await?;
    output::render(&summary)
}
