//! Contribution calculator tests
//!
//! Covers the reference quote vectors, rounding order, the error taxonomy,
//! and the calculator's algebraic properties (monotonicity, smoker loading
//! ratio, annual/monthly relationship, purity).

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use core_kernel::{Currency, Rate};
use domain_pricing::{
    calculator, CoverageRange, CoverageUnit, Gender, PolicyTerms, QuoteError, QuoteField,
    QuoteRequest, SmokerStatus, TermsError,
};

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

fn request(age: u32, coverage: Decimal, duration: u32, smoker: SmokerStatus) -> QuoteRequest {
    QuoteRequest {
        age,
        gender: Gender::Male,
        coverage_amount: coverage,
        duration_years: duration,
        smoker,
    }
}

fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

mod reference_vectors {
    use super::*;

    #[test]
    fn test_thirty_year_old_twenty_lakh_ten_years() {
        let quote =
            calculator::quote(&terms(), &request(30, dec!(20), 10, SmokerStatus::NonSmoker))
                .unwrap();

        assert_eq!(quote.monthly_contribution.amount(), dec!(48.00));
        assert_eq!(quote.annual_contribution.amount(), dec!(576.00));
        assert_eq!(quote.monthly_contribution.currency(), Currency::USD);
    }

    #[test]
    fn test_same_inputs_as_smoker() {
        let quote =
            calculator::quote(&terms(), &request(30, dec!(20), 10, SmokerStatus::Smoker))
                .unwrap();

        assert_eq!(quote.monthly_contribution.amount(), dec!(67.20));
        assert_eq!(quote.annual_contribution.amount(), dec!(806.40));
    }

    #[test]
    fn test_longer_duration_scales_contribution() {
        // duration factor 30/10 = 3x the 10-year quote
        let quote =
            calculator::quote(&terms(), &request(30, dec!(20), 30, SmokerStatus::NonSmoker))
                .unwrap();

        assert_eq!(quote.monthly_contribution.amount(), dec!(144.00));
        assert_eq!(quote.annual_contribution.amount(), dec!(1728.00));
    }
}

mod error_taxonomy {
    use super::*;

    #[test]
    fn test_underage_applicant_rejected_on_age() {
        let result =
            calculator::quote(&terms(), &request(15, dec!(20), 10, SmokerStatus::NonSmoker));

        match result {
            Err(QuoteError::Validation(errors)) => {
                assert_eq!(
                    errors.get(QuoteField::Age),
                    Some("Age must be between 18 and 65")
                );
                assert!(errors.get(QuoteField::CoverageAmount).is_none());
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_overage_applicant_rejected_on_age() {
        let result =
            calculator::quote(&terms(), &request(66, dec!(20), 10, SmokerStatus::NonSmoker));
        assert!(matches!(result, Err(QuoteError::Validation(_))));
    }

    #[test]
    fn test_boundary_ages_accepted() {
        for age in [18, 65] {
            let result =
                calculator::quote(&terms(), &request(age, dec!(20), 10, SmokerStatus::NonSmoker));
            assert!(result.is_ok(), "age {} should be insurable", age);
        }
    }

    #[test]
    fn test_unlisted_duration_rejected() {
        let result =
            calculator::quote(&terms(), &request(30, dec!(20), 15, SmokerStatus::NonSmoker));

        match result {
            Err(QuoteError::Validation(errors)) => {
                assert!(errors.get(QuoteField::DurationYears).is_some());
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_coverage_rejected() {
        let result =
            calculator::quote(&terms(), &request(30, dec!(-1), 10, SmokerStatus::NonSmoker));

        match result {
            Err(QuoteError::Validation(errors)) => {
                assert_eq!(
                    errors.get(QuoteField::CoverageAmount),
                    Some("Coverage amount must be greater than 0")
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_rate_is_policy_misconfiguration() {
        let mut t = terms();
        t.base_premium_rate = Rate::new(dec!(-0.00008));

        let result =
            calculator::quote(&t, &request(30, dec!(20), 10, SmokerStatus::NonSmoker));
        assert!(matches!(
            result,
            Err(QuoteError::Terms(TermsError::NonPositiveRate(_)))
        ));
    }

    #[test]
    fn test_empty_duration_options_never_silently_accepts() {
        let mut t = terms();
        t.duration_options.clear();

        let result =
            calculator::quote(&t, &request(30, dec!(20), 10, SmokerStatus::NonSmoker));
        assert!(matches!(
            result,
            Err(QuoteError::Terms(TermsError::NoDurationOptions))
        ));
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn insurable_age() -> impl Strategy<Value = u32> {
        18u32..=65
    }

    fn duration() -> impl Strategy<Value = u32> {
        prop_oneof![Just(10u32), Just(20u32), Just(30u32)]
    }

    fn coverage_lakhs() -> impl Strategy<Value = Decimal> {
        // whole lakhs inside the product's coverage range
        (1i64..=50).prop_map(Decimal::from)
    }

    fn smoker() -> impl Strategy<Value = SmokerStatus> {
        prop_oneof![Just(SmokerStatus::Smoker), Just(SmokerStatus::NonSmoker)]
    }

    proptest! {
        #[test]
        fn annual_is_exactly_round2_of_twelve_monthlies(
            age in insurable_age(),
            coverage in coverage_lakhs(),
            years in duration(),
            status in smoker(),
        ) {
            let quote = calculator::quote(&terms(), &request(age, coverage, years, status)).unwrap();
            prop_assert_eq!(
                quote.annual_contribution.amount(),
                round2(quote.monthly_contribution.amount() * dec!(12))
            );
        }

        #[test]
        fn contribution_strictly_increases_with_coverage(
            age in insurable_age(),
            years in duration(),
            lower in 1i64..=49,
            bump in 1i64..=10,
        ) {
            let higher = (lower + bump).min(50);
            let small = calculator::quote(
                &terms(),
                &request(age, Decimal::from(lower), years, SmokerStatus::NonSmoker),
            ).unwrap();
            let large = calculator::quote(
                &terms(),
                &request(age, Decimal::from(higher), years, SmokerStatus::NonSmoker),
            ).unwrap();

            prop_assert!(
                large.monthly_contribution.amount() > small.monthly_contribution.amount()
            );
        }

        #[test]
        fn smoker_pays_exactly_forty_percent_more_before_rounding(
            age in insurable_age(),
            coverage in coverage_lakhs(),
            years in duration(),
        ) {
            let smoker_quote = calculator::quote(
                &terms(),
                &request(age, coverage, years, SmokerStatus::Smoker),
            ).unwrap();

            // recompute the unrounded non-smoker contribution from the formula
            let unrounded = coverage
                * dec!(100000)
                * dec!(0.00008)
                * (Decimal::from(age) / dec!(100))
                * (Decimal::from(years) / dec!(10));

            prop_assert_eq!(
                smoker_quote.monthly_contribution.amount(),
                round2(unrounded * dec!(1.4))
            );
        }

        #[test]
        fn quoting_twice_yields_identical_results(
            age in insurable_age(),
            coverage in coverage_lakhs(),
            years in duration(),
            status in smoker(),
        ) {
            let r = request(age, coverage, years, status);
            let first = calculator::quote(&terms(), &r).unwrap();
            let second = calculator::quote(&terms(), &r).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn out_of_range_age_always_errors_on_age(age in 66u32..=120) {
            let result = calculator::quote(
                &terms(),
                &request(age, dec!(20), 10, SmokerStatus::NonSmoker),
            );
            match result {
                Err(QuoteError::Validation(errors)) => {
                    prop_assert!(errors.get(QuoteField::Age).is_some());
                }
                other => prop_assert!(false, "expected age error, got {:?}", other),
            }
        }
    }
}
