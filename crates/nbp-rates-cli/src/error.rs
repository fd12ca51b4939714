use nbp_rates_core::{RateError, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Rate(#[from] RateError),

    #[error("invalid log filter: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for CliError {
    fn from(error: ValidationError) -> Self {
        Self::Rate(RateError::Validation(error))
    }
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Rate(RateError::Validation(_)) => 2,
            Self::Rate(RateError::RemoteAccess { .. }) => 3,
            Self::Rate(RateError::MalformedData { .. }) => 4,
            Self::Logging(_) => 1,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_error_category() {
        let validation = CliError::from(ValidationError::InvalidStartDate);
        assert_eq!(validation.exit_code(), 2);

        let remote = RateError::remote_access("http://host/dir.txt", "refused");
        assert_eq!(CliError::from(remote).exit_code(), 3);

        let malformed = RateError::malformed_data("c002z200103", "no ask");
        assert_eq!(CliError::from(malformed).exit_code(), 4);
    }

    #[test]
    fn message_is_the_core_message_only() {
        let error = CliError::from(ValidationError::InvalidEndDate);
        assert_eq!(error.to_string(), "entered end date is invalid");
    }
}
