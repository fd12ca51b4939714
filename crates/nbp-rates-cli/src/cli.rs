//! CLI argument definitions for nbp-rates.
//!
//! # Arguments
//!
//! | Argument | Description |
//! |----------|-------------|
//! | `CURRENCY` | Three-character currency code, e.g. `EUR` |
//! | `START_DATE` | First day of the range, `yyyy-mm-dd` |
//! | `END_DATE` | Last day of the range, `yyyy-mm-dd` |
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--base-url` | `http://www.nbp.pl/kursy/xml/` | Directory serving index and data files |
//! | `--timeout-ms` | `30000` | Per-request timeout in ms |
//! | `--log-level` | `warn` | Log filter, overridden by `NBP_RATES_LOG` |
//!
//! # Examples
//!
//! ```bash
//! nbp-rates EUR 2013-01-28 2013-01-31
//! nbp-rates usd 2019-06-01 2020-05-31 --log-level info
//! ```

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;

use nbp_rates_core::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};

/// Printed when the positional arguments are missing or too many.
pub const USAGE: &str = "Wrong number of arguments. Enter 3 arguments separated with spaces:\n\
1. three letter currency code\n\
2. start date (yyyy-mm-dd)\n\
3. end date (yyyy-mm-dd)";

/// Mean buying rate and selling rate deviation of a currency, from NBP tables.
///
/// Prints two lines: the mean ask (kurs kupna) and the population standard
/// deviation of the bid (kurs sprzedaży) over the given dates.
#[derive(Debug, Parser)]
#[command(
    name = "nbp-rates",
    author,
    version,
    about = "Exchange rate statistics from NBP historical tables"
)]
pub struct Cli {
    /// Three-character currency code (e.g. EUR, USD, CHF).
    pub currency: String,

    /// Start date of the range (yyyy-mm-dd), not earlier than 2012-01-01.
    pub start_date: String,

    /// End date of the range (yyyy-mm-dd), inclusive.
    pub end_date: String,

    /// Directory URL serving the dir*.txt index and *.xml data files.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout budget in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Log filter directive (e.g. warn, info, nbp_rates_core=debug).
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Why the command line could not be turned into a [`Cli`].
#[derive(Debug)]
pub enum ParseFailure {
    /// Positional arguments missing or in excess; answered with [`USAGE`].
    ArgumentCount,
    /// Anything else clap reports, `--help` and `--version` included.
    Clap(clap::Error),
}

pub fn parse_args<I, T>(args: I) -> Result<Cli, ParseFailure>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|error| {
        if is_argument_count_error(error.kind()) {
            ParseFailure::ArgumentCount
        } else {
            ParseFailure::Clap(error)
        }
    })
}

/// True for clap errors caused by a wrong number of positional arguments.
pub fn is_argument_count_error(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::MissingRequiredArgument
            | ErrorKind::UnknownArgument
            | ErrorKind::TooManyValues
            | ErrorKind::WrongNumberOfValues
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_positionals_with_defaults() {
        let args = ["nbp-rates", "EUR", "2013-01-28", "2013-01-31"];
        let cli = parse_args(args).expect("valid");
        assert_eq!(cli.currency, "EUR");
        assert_eq!(cli.start_date, "2013-01-28");
        assert_eq!(cli.end_date, "2013-01-31");
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert_eq!(cli.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn accepts_overrides() {
        let args = [
            "nbp-rates",
            "usd",
            "2020-01-01",
            "2020-01-31",
            "--base-url",
            "http://mirror.test/xml/",
            "--timeout-ms",
            "500",
            "--log-level",
            "debug",
        ];
        let cli = parse_args(args).expect("valid");
        assert_eq!(cli.base_url, "http://mirror.test/xml/");
        assert_eq!(cli.timeout_ms, 500);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn too_few_arguments_is_a_count_error() {
        let args = ["nbp-rates", "EUR", "2013-01-28"];
        let failure = parse_args(args).expect_err("must fail");
        assert!(matches!(failure, ParseFailure::ArgumentCount));
    }

    #[test]
    fn too_many_arguments_is_a_count_error() {
        let args = ["nbp-rates", "EUR", "2013-01-28", "2013-01-31", "extra"];
        let failure = parse_args(args).expect_err("must fail");
        assert!(matches!(failure, ParseFailure::ArgumentCount));
    }

    #[test]
    fn other_clap_errors_are_left_to_clap() {
        let args = [
            "nbp-rates",
            "EUR",
            "2013-01-28",
            "2013-01-31",
            "--timeout-ms",
            "soon",
        ];
        let failure = parse_args(args).expect_err("must fail");
        let ParseFailure::Clap(error) = failure else {
            panic!("expected a clap error");
        };
        assert_eq!(error.kind(), ErrorKind::ValueValidation);
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn help_is_left_to_clap() {
        let failure = parse_args(["nbp-rates", "--help"]).expect_err("help stops parsing");
        let ParseFailure::Clap(error) = failure else {
            panic!("expected a clap error");
        };
        assert_eq!(error.kind(), ErrorKind::DisplayHelp);
        assert_eq!(error.exit_code(), 0);
    }

    #[test]
    fn usage_lists_all_three_arguments() {
        assert!(USAGE.contains("1. three letter currency code"));
        assert!(USAGE.ends_with("3. end date (yyyy-mm-dd)"));
    }
}
