//! Command-line input validation.
//!
//! Everything here is pure and runs before the first request. The combined
//! entry point [`validate_arguments`] checks the dates first (format, order,
//! minimum), then the currency code.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::domain::{CurrencyCode, DateRange};
use crate::ValidationError;

/// ISO calendar date, `yyyy-mm-dd`.
pub const ARG_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Validated request: which currency over which dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateQuery {
    pub currency: CurrencyCode,
    pub range: DateRange,
}

pub fn validate_currency(code: Option<&str>) -> Result<CurrencyCode, ValidationError> {
    match code {
        Some(code) => CurrencyCode::parse(code),
        None => Err(ValidationError::InvalidCurrency {
            value: String::new(),
        }),
    }
}

pub fn validate_date_string(text: Option<&str>) -> Result<Date, ValidationError> {
    let text = text.unwrap_or_default();
    match Date::parse(text, ARG_DATE_FORMAT) {
        Ok(date) => Ok(date),
        Err(_) => Err(ValidationError::InvalidDate {
            value: text.to_owned(),
        }),
    }
}

pub fn validate_date_order(start: Option<Date>, end: Option<Date>) -> Result<(), ValidationError> {
    let start = start.ok_or(ValidationError::InvalidStartDate)?;
    let end = end.ok_or(ValidationError::InvalidEndDate)?;
    if start > end {
        return Err(ValidationError::DatesInWrongOrder { start, end });
    }
    Ok(())
}

pub fn validate_minimum_date(date: Date, minimum: Date) -> Result<(), ValidationError> {
    if date < minimum {
        return Err(ValidationError::BeforeMinimumDate { date, minimum });
    }
    Ok(())
}

/// Validates both date strings and builds the range they describe.
pub fn validate_date_strings(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<DateRange, ValidationError> {
    let start = validate_date_string(start).map_err(|_| ValidationError::InvalidStartDate)?;
    let end = validate_date_string(end).map_err(|_| ValidationError::InvalidEndDate)?;
    // order, then the minimum floor on the start date
    DateRange::new(start, end)
}

pub fn validate_arguments(
    currency: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<RateQuery, ValidationError> {
    let range = validate_date_strings(start, end)?;
    let currency = validate_currency(currency)?;
    Ok(RateQuery { currency, range })
}
