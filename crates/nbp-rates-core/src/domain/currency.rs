use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use regex::Regex;

use crate::ValidationError;

static CURRENCY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = r"^[A-Za-z0-9_]{3}$";
    Regex::new(pattern).expect("currency pattern must compile")
});

/// Three-character currency code as entered by the user.
///
/// Only the shape is checked; whether the code names a real currency is left
/// to the data files. Casing is preserved and ignored when matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if !CURRENCY_PATTERN.is_match(input) {
            return Err(ValidationError::InvalidCurrency {
                value: input.to_owned(),
            });
        }

        Ok(Self(input.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a code read from a data file.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for CurrencyCode {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}
