//! # Domain Models
//!
//! Value types shared by the resolver, the extractor and the calculator.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CurrencyCode`] | Validated 3-character currency code |
//! | [`DateRange`] | Ordered inclusive range, not before [`MINIMUM_DATE`] |
//! | [`IndexReference`] | Remote index for a year or the current year |
//! | [`DataFileName`] | Daily data file name with its embedded date |
//! | [`AskBidEntry`] | Ask/bid pair from one file |
//! | [`RateSeries`] | Collected asks and bids |
//! | [`RateSummary`] | Ask mean and bid standard deviation |
//!
//! Types that carry invariants are only constructible through validation.

mod currency;
mod date_range;
mod entry;
mod file_name;

pub use currency::CurrencyCode;
pub use date_range::{DateRange, MINIMUM_DATE};
pub use entry::{AskBidEntry, RateSeries, RateSummary};
pub use file_name::{DataFileName, IndexReference};
