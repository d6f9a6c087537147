//! Contribution quote calculator
//!
//! A single-shot pure computation: terms plus request in, quote or
//! field-keyed errors out. No I/O, no state between calls, safe to invoke
//! concurrently.
//!
//! The rate formula is the marketplace's Takaful pool contribution:
//!
//! ```text
//! monthly = round2(coverage_base * base_rate * age/100 * duration/10 * smoker_factor)
//! annual  = round2(monthly * 12)
//! ```
//!
//! Monthly is rounded before the annual figure is derived; reversing that
//! order changes cent-level results and breaks reproducibility against the
//! marketplace's published quotes.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use core_kernel::Money;

use crate::error::QuoteError;
use crate::quote::{ContributionQuote, QuoteRequest};
use crate::terms::PolicyTerms;
use crate::validation::{validate_request, QuoteField, ValidationErrors, COVERAGE_TOO_LARGE};

/// Rounds half away from zero to 2 decimal places
fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes a contribution quote for a request against policy terms
///
/// Terms are checked for misconfiguration first, then every request rule
/// is evaluated; the arithmetic only runs for a fully valid pair.
///
/// # Errors
///
/// [`QuoteError::Terms`] when the policy itself is unusable,
/// [`QuoteError::Validation`] with every violated field otherwise.
///
/// # Example
///
/// ```rust,ignore
/// let quote = calculator::quote(&terms, &request)?;
/// println!("{} / month", quote.monthly_contribution);
/// ```
pub fn quote(
    terms: &PolicyTerms,
    request: &QuoteRequest,
) -> Result<ContributionQuote, QuoteError> {
    terms.validate()?;
    validate_request(terms, request)?;
    contribution(terms, request).ok_or_else(coverage_too_large)
}

/// The arithmetic stage; only reachable with validated inputs
///
/// Returns `None` when any intermediate product overflows `Decimal`,
/// which an open-ended coverage range or a large configured rate can
/// still permit past validation.
fn contribution(terms: &PolicyTerms, request: &QuoteRequest) -> Option<ContributionQuote> {
    let coverage_base = request
        .coverage_amount
        .checked_mul(terms.coverage_unit.scale())?;
    let age_factor = Decimal::from(request.age) / dec!(100);
    let duration_factor = Decimal::from(request.duration_years) / dec!(10);
    let smoker_factor = request.smoker.loading_factor();

    let monthly = round2(
        coverage_base
            .checked_mul(terms.base_premium_rate.as_decimal())?
            .checked_mul(age_factor)?
            .checked_mul(duration_factor)?
            .checked_mul(smoker_factor)?,
    );
    let annual = round2(monthly.checked_mul(dec!(12))?);

    Some(ContributionQuote {
        monthly_contribution: Money::new(monthly, terms.currency),
        annual_contribution: Money::new(annual, terms.currency),
    })
}

/// The applicant's amount is the only unbounded input, so overflow is
/// reported against it
fn coverage_too_large() -> QuoteError {
    let mut errors = ValidationErrors::new();
    errors.add(QuoteField::CoverageAmount, COVERAGE_TOO_LARGE);
    QuoteError::Validation(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TermsError;
    use crate::quote::{Gender, SmokerStatus};
    use crate::terms::{CoverageRange, CoverageUnit};
    use crate::validation::QuoteField;
    use core_kernel::{Currency, Rate};

    fn terms() -> PolicyTerms {
        PolicyTerms {
            product_code: "TAKAFUL_TERM".to_string(),
            product_name: "Term Takaful Plan".to_string(),
            min_age: 18,
            max_age: 65,
            coverage_range: CoverageRange::new(dec!(100000), dec!(5000000)),
            duration_options: vec![10, 20, 30],
            base_premium_rate: Rate::new(dec!(0.00008)),
            currency: Currency::USD,
            coverage_unit: CoverageUnit::Lakh,
        }
    }

    fn request() -> QuoteRequest {
        QuoteRequest {
            age: 30,
            gender: Gender::Male,
            coverage_amount: dec!(20),
            duration_years: 10,
            smoker: SmokerStatus::NonSmoker,
        }
    }

    #[test]
    fn test_reference_quote_non_smoker() {
        // 2,000,000 * 0.00008 * 0.30 * 1.0 * 1.0 = 48.00
        let quote = quote(&terms(), &request()).unwrap();
        assert_eq!(quote.monthly_contribution.amount(), dec!(48.00));
        assert_eq!(quote.annual_contribution.amount(), dec!(576.00));
    }

    #[test]
    fn test_reference_quote_smoker() {
        let mut r = request();
        r.smoker = SmokerStatus::Smoker;

        let quote = quote(&terms(), &r).unwrap();
        assert_eq!(quote.monthly_contribution.amount(), dec!(67.20));
        assert_eq!(quote.annual_contribution.amount(), dec!(806.40));
    }

    #[test]
    fn test_out_of_range_age_produces_no_quote() {
        let mut r = request();
        r.age = 15;

        match quote(&terms(), &r) {
            Err(QuoteError::Validation(errors)) => {
                assert_eq!(
                    errors.get(QuoteField::Age),
                    Some("Age must be between 18 and 65")
                );
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_misconfigured_terms_distinct_from_user_error() {
        let mut t = terms();
        t.base_premium_rate = Rate::new(dec!(0));

        match quote(&t, &request()) {
            Err(QuoteError::Terms(TermsError::NonPositiveRate(_))) => {}
            other => panic!("expected terms error, got {:?}", other),
        }
    }

    #[test]
    fn test_misconfiguration_wins_over_invalid_input() {
        let mut t = terms();
        t.duration_options.clear();
        let mut r = request();
        r.age = 15;

        assert!(matches!(
            quote(&t, &r),
            Err(QuoteError::Terms(TermsError::NoDurationOptions))
        ));
    }

    #[test]
    fn test_gender_does_not_affect_the_rate() {
        let mut r = request();
        r.gender = Gender::Female;

        let male = quote(&terms(), &request()).unwrap();
        let female = quote(&terms(), &r).unwrap();
        assert_eq!(male, female);
    }

    #[test]
    fn test_monthly_rounded_before_annual() {
        // coverage 1.37 lakh, age 23, 10y: 137,000 * 0.00008 * 0.23 = 2.5208
        // monthly rounds to 2.52; annual must be 30.24, not round2(30.2496)
        let mut t = terms();
        t.coverage_range = CoverageRange::new(dec!(100000), dec!(5000000));
        let r = QuoteRequest {
            age: 23,
            gender: Gender::Male,
            coverage_amount: dec!(1.37),
            duration_years: 10,
            smoker: SmokerStatus::NonSmoker,
        };

        let quote = quote(&t, &r).unwrap();
        assert_eq!(quote.monthly_contribution.amount(), dec!(2.52));
        assert_eq!(quote.annual_contribution.amount(), dec!(30.24));
    }

    #[test]
    fn test_overflowing_arithmetic_reports_coverage_not_panic() {
        // Open-ended range and unit scaling let Decimal::MAX through
        // validation; the rate multiplication must fail soft
        let mut t = terms();
        t.coverage_unit = CoverageUnit::Unit;
        t.coverage_range = CoverageRange::at_least(dec!(1));
        t.base_premium_rate = Rate::new(dec!(2));
        let mut r = request();
        r.coverage_amount = Decimal::MAX;

        match quote(&t, &r) {
            Err(QuoteError::Validation(errors)) => {
                assert_eq!(
                    errors.get(QuoteField::CoverageAmount),
                    Some("Coverage amount is too large")
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_quote_is_idempotent() {
        let a = quote(&terms(), &request()).unwrap();
        let b = quote(&terms(), &request()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unit_scaling_follows_coverage_unit() {
        let mut t = terms();
        t.coverage_unit = CoverageUnit::Unit;
        let mut r = request();
        r.coverage_amount = dec!(2000000);

        let direct = quote(&t, &r).unwrap();
        let lakhs = quote(&terms(), &request()).unwrap();
        assert_eq!(direct, lakhs);
    }
}
