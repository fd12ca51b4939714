//! Behavior-driven tests for command-line input validation
//!
//! Validation must reject bad input with a message naming the bad field,
//! and must do so before anything touches the network.

use std::sync::Arc;

use nbp_rates_core::{
    validate_arguments, validate_currency, FixtureHttpClient, RateCalculator, RateError,
    SourceConfig, ValidationError,
};

fn arguments(start: &str, end: &str) -> Result<(), ValidationError> {
    validate_arguments(Some("USD"), Some(start), Some(end)).map(|_| ())
}

#[test]
fn user_entering_a_valid_code_and_minimum_date_is_accepted() {
    // Given: The earliest supported date and a well-formed code
    // When: The arguments are validated
    let query = validate_arguments(Some("USD"), Some("2012-01-01"), Some("2012-01-01"));

    // Then: They are accepted
    assert!(query.is_ok(), "{query:?}");
}

#[test]
fn user_entering_a_malformed_currency_code_is_told_so() {
    for raw in [Some("US"), Some("US1!"), None] {
        // When: A bad code is validated
        let error = validate_currency(raw).expect_err("must fail");

        // Then: The message points at the currency code
        assert!(matches!(error, ValidationError::InvalidCurrency { .. }));
        assert!(error.to_string().contains("currency code"), "{error}");
    }
}

#[test]
fn user_entering_a_date_before_2012_is_told_the_earliest_date() {
    let error = arguments("2011-12-31", "2012-01-10").expect_err("must fail");

    assert!(matches!(error, ValidationError::BeforeMinimumDate { .. }));
    assert_eq!(
        error.to_string(),
        "2012-01-01 is the earliest possible date"
    );
}

#[test]
fn user_entering_an_impossible_calendar_date_is_told_which_one() {
    let start = arguments("2020-02-30", "2020-03-01").expect_err("must fail");
    assert_eq!(start.to_string(), "entered start date is invalid");

    let end = arguments("2020-02-01", "2020-02-30").expect_err("must fail");
    assert_eq!(end.to_string(), "entered end date is invalid");
}

#[test]
fn user_entering_dates_in_reverse_is_told_they_are_in_wrong_order() {
    let error = arguments("2020-02-01", "2020-01-01").expect_err("must fail");

    assert!(matches!(error, ValidationError::DatesInWrongOrder { .. }));
    assert!(error.to_string().contains("wrong order"), "{error}");
}

#[tokio::test]
async fn rejected_input_never_reaches_the_network() {
    // Given: A calculator wired to a transport that records every request
    let client = FixtureHttpClient::new();
    let calculator = RateCalculator::new(Arc::new(client.clone()), SourceConfig::default());
    let rejected = [
        ("EURO", "2020-01-01", "2020-01-31"),
        ("EUR", "2020-02-30", "2020-03-01"),
        ("EUR", "2020-02-01", "2020-01-01"),
        ("EUR", "2011-12-31", "2012-01-10"),
    ];

    for (currency, start, end) in rejected {
        // When: The calculation is asked to run on bad input
        let result = calculator.calculate_arguments(currency, start, end).await;

        // Then: It fails validation
        assert!(
            matches!(result, Err(RateError::Validation(_))),
            "{currency} {start} {end}"
        );
    }

    // And: Nothing was requested from the server
    assert!(client.requested().is_empty());

    // And: Well-formed input through the same calculator does reach it
    let result = calculator
        .calculate_arguments("EUR", "2020-01-01", "2020-01-31")
        .await;
    assert!(matches!(result, Err(RateError::RemoteAccess { .. })));
    assert_eq!(client.requested().len(), 1);
}
