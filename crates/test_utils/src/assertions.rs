//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_pricing::{ContributionQuote, QuoteError, QuoteField, ValidationErrors};
use rust_decimal::Decimal;

/// Asserts that two Money values are equal, reporting currency and amount
/// separately on failure
pub fn assert_money_eq(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_eq!(
        actual.amount(),
        expected.amount(),
        "Money amounts differ: actual={}, expected={}",
        actual.amount(),
        expected.amount()
    );
}

/// Asserts that a quote carries the expected monthly and annual amounts
pub fn assert_quote_amounts(quote: &ContributionQuote, monthly: Decimal, annual: Decimal) {
    assert_eq!(
        quote.monthly_contribution.amount(),
        monthly,
        "Monthly contribution mismatch: actual={}, expected={}",
        quote.monthly_contribution.amount(),
        monthly
    );
    assert_eq!(
        quote.annual_contribution.amount(),
        annual,
        "Annual contribution mismatch: actual={}, expected={}",
        quote.annual_contribution.amount(),
        annual
    );
}

/// Asserts that validation errors contain a message for the given field
pub fn assert_field_error(errors: &ValidationErrors, field: QuoteField) {
    assert!(
        errors.get(field).is_some(),
        "Expected an error on field '{}', got: {}",
        field.as_str(),
        errors
    );
}

/// Asserts that validation errors do NOT mention the given field
pub fn assert_field_clean(errors: &ValidationErrors, field: QuoteField) {
    assert!(
        errors.get(field).is_none(),
        "Expected no error on field '{}', got: {:?}",
        field.as_str(),
        errors.get(field)
    );
}

/// Unwraps a quote failure as user-facing validation errors, panicking if
/// the failure was a terms misconfiguration instead
pub fn expect_validation_errors(result: Result<ContributionQuote, QuoteError>) -> ValidationErrors {
    match result {
        Err(QuoteError::Validation(errors)) => errors,
        Err(QuoteError::Terms(err)) => {
            panic!("Expected validation errors, got terms error: {err}")
        }
        Ok(quote) => panic!("Expected validation errors, got a quote: {quote:?}"),
    }
}
