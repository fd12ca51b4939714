use std::fmt::{Display, Formatter};

use time::macros::date;
use time::Date;

use crate::validation::{validate_date_order, validate_minimum_date};
use crate::ValidationError;

/// Earliest date for which rate files are looked up.
pub const MINIMUM_DATE: Date = date!(2012 - 01 - 01);

/// Inclusive calendar date range, ordered and not earlier than [`MINIMUM_DATE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Result<Self, ValidationError> {
        validate_date_order(Some(start), Some(end))?;
        validate_minimum_date(start, MINIMUM_DATE)?;
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> Date {
        self.start
    }

    pub const fn end(&self) -> Date {
        self.end
    }

    pub fn contains(&self, date: Date) -> bool {
        date >= self.start && date <= self.end
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
