//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use domain_pricing::{Gender, PolicyTerms, QuoteRequest, SmokerStatus};
use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Strategy for generating either gender
pub fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

/// Strategy for generating either smoker status
pub fn smoker_strategy() -> impl Strategy<Value = SmokerStatus> {
    prop_oneof![Just(SmokerStatus::Smoker), Just(SmokerStatus::NonSmoker)]
}

/// Strategy for ages inside the given terms' entry band
pub fn insurable_age_strategy(terms: &PolicyTerms) -> impl Strategy<Value = u32> {
    terms.min_age..=terms.max_age
}

/// Strategy for ages strictly outside the given terms' entry band
pub fn uninsurable_age_strategy(terms: &PolicyTerms) -> impl Strategy<Value = u32> {
    let min = terms.min_age;
    let max = terms.max_age;
    (0u32..=max + 60).prop_filter("age outside the entry band", move |age| {
        *age < min || *age > max
    })
}

/// Strategy for a duration drawn from the terms' permitted options
pub fn permitted_duration_strategy(terms: &PolicyTerms) -> impl Strategy<Value = u32> {
    proptest::sample::select(terms.duration_options.clone())
}

/// Strategy for coverage amounts, in whole coverage units, whose scaled
/// value lies inside the terms' coverage range
pub fn in_range_coverage_strategy(terms: &PolicyTerms) -> impl Strategy<Value = Decimal> {
    let scale = terms.coverage_unit.scale();
    let min_units = (terms.coverage_range.min / scale).ceil();
    let max_units = terms
        .coverage_range
        .max
        .map(|max| (max / scale).floor())
        .unwrap_or(min_units + Decimal::from(100));
    let lo = min_units.to_u64().unwrap_or(1).max(1);
    let hi = max_units.to_u64().unwrap_or(lo).max(lo);
    (lo..=hi).prop_map(Decimal::from)
}

/// Strategy for requests the given terms will accept
pub fn valid_request_strategy(terms: &PolicyTerms) -> impl Strategy<Value = QuoteRequest> {
    (
        insurable_age_strategy(terms),
        gender_strategy(),
        in_range_coverage_strategy(terms),
        permitted_duration_strategy(terms),
        smoker_strategy(),
    )
        .prop_map(
            |(age, gender, coverage_amount, duration_years, smoker)| QuoteRequest {
                age,
                gender,
                coverage_amount,
                duration_years,
                smoker,
            },
        )
}
