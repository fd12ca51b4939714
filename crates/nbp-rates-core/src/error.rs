use thiserror::Error;
use time::Date;

/// Input validation errors raised before any network access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("entered currency code is invalid: '{value}'")]
    InvalidCurrency { value: String },

    #[error("entered date is invalid: '{value}'")]
    InvalidDate { value: String },
    #[error("entered start date is invalid")]
    InvalidStartDate,
    #[error("entered end date is invalid")]
    InvalidEndDate,

    #[error("dates are in wrong order: {start} is after {end}")]
    DatesInWrongOrder { start: Date, end: Date },
    #[error("{minimum} is the earliest possible date")]
    BeforeMinimumDate { date: Date, minimum: Date },
}

/// Message shown for every transport failure, whatever the underlying cause.
pub const REMOTE_ACCESS_MESSAGE: &str = "there was a problem with connection to NBP server";

/// Top-level error type for the retrieval pipeline.
#[derive(Debug, Error)]
pub enum RateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// URL construction, transport or status failure. `detail` is kept for logs only.
    #[error("{}", REMOTE_ACCESS_MESSAGE)]
    RemoteAccess { url: String, detail: String },

    #[error("malformed data in {file}: {reason}")]
    MalformedData { file: String, reason: String },
}

impl RateError {
    pub fn remote_access(url: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::RemoteAccess {
            url: url.into(),
            detail: detail.into(),
        }
    }

    pub fn malformed_data(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedData {
            file: file.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_access_hides_underlying_detail() {
        let error = RateError::remote_access("http://host/dir.txt", "dns lookup failed");
        assert_eq!(error.to_string(), REMOTE_ACCESS_MESSAGE);
    }

    #[test]
    fn validation_errors_pass_through_transparently() {
        let error = RateError::from(ValidationError::InvalidStartDate);
        assert_eq!(error.to_string(), "entered start date is invalid");
    }
}
