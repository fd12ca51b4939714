//! # nbp-rates core
//!
//! Retrieval pipeline for the National Bank of Poland's historical exchange
//! rate files, and the statistics computed over them.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`validation`] | Command-line input checks, run before any request |
//! | [`domain`] | Currency code, date range, file names, rate collections |
//! | [`index`] | Which index files cover a range, and which data files they list |
//! | [`extract`] | Ask/bid extraction from data files |
//! | [`stats`] | Mean and population standard deviation |
//! | [`calculator`] | The whole pipeline for one query |
//! | [`http_client`] | HTTP transport abstraction (reqwest or in-memory fixture) |
//! | [`source`] | Base URL and request settings |
//! | [`error`] | Error types |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nbp_rates_core::RateCalculator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let calculator = RateCalculator::default();
//!     let summary = calculator
//!         .calculate_arguments("EUR", "2013-01-28", "2013-01-31")
//!         .await?;
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Validation     │  currency, dates, order, 2012-01-01 floor
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Index Resolver  │────▶│ HTTP Client      │
//! └────────┬────────┘     │ (reqwest/fixture)│
//!          ▼              └──────────────────┘
//! ┌─────────────────┐              ▲
//! │ Data Extractor  │──────────────┘
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐
//! │ Statistics      │
//! └─────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use nbp_rates_core::RateError;
//!
//! fn describe(error: &RateError) -> &'static str {
//!     match error {
//!         RateError::Validation(_) => "fix the arguments",
//!         RateError::RemoteAccess { .. } => "check the connection",
//!         RateError::MalformedData { .. } => "the server sent something unexpected",
//!     }
//! }
//! ```

pub mod calculator;
pub mod domain;
pub mod error;
pub mod extract;
pub mod http_client;
pub mod index;
pub mod source;
pub mod stats;
pub mod validation;

pub use calculator::RateCalculator;

pub use domain::{
    AskBidEntry, CurrencyCode, DataFileName, DateRange, IndexReference, RateSeries, RateSummary,
    MINIMUM_DATE,
};

pub use error::{RateError, ValidationError, REMOTE_ACCESS_MESSAGE};

pub use extract::{decimal_value, extract_entry, tag_value, DataExtractor};

pub use http_client::{
    FixtureHttpClient, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient,
};

pub use index::{index_references, parse_index, IndexResolver};

pub use source::{SourceConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};

pub use stats::{mean, standard_deviation, variance};

pub use validation::{
    validate_arguments, validate_currency, validate_date_order, validate_date_string,
    validate_date_strings, validate_minimum_date, RateQuery,
};
