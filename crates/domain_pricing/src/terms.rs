//! Policy terms value objects
//!
//! [`PolicyTerms`] captures the eligibility rules and base rate configured
//! per product in the policy catalog. The calculator treats terms as
//! read-only input; they are validated at load time and again before
//! every quote.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Rate};

use crate::error::TermsError;

/// The unit the applicant's coverage amount is expressed in
///
/// The quote form collects coverage "in lakhs"; the scaling convention is
/// a named part of the product definition rather than a constant buried in
/// the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageUnit {
    /// Coverage entered directly in currency units
    Unit,
    /// Coverage entered in thousands
    Thousand,
    /// Coverage entered in lakhs (100,000s)
    Lakh,
    /// Coverage entered in millions
    Million,
}

impl CoverageUnit {
    /// Returns the multiplier from this unit to currency units
    pub fn scale(&self) -> Decimal {
        match self {
            CoverageUnit::Unit => dec!(1),
            CoverageUnit::Thousand => dec!(1000),
            CoverageUnit::Lakh => dec!(100000),
            CoverageUnit::Million => dec!(1000000),
        }
    }
}

/// Inclusive bounds on the scaled coverage amount, in currency units
///
/// `max` of `None` means the product places no upper bound on coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageRange {
    /// Minimum coverage, inclusive
    pub min: Decimal,
    /// Maximum coverage, inclusive; open-ended when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Decimal>,
}

impl CoverageRange {
    /// Creates a bounded coverage range
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max: Some(max) }
    }

    /// Creates a range with no upper bound
    pub fn at_least(min: Decimal) -> Self {
        Self { min, max: None }
    }

    /// Returns true if the given coverage lies inside the range
    pub fn contains(&self, coverage: Decimal) -> bool {
        coverage >= self.min && self.max.map_or(true, |max| coverage <= max)
    }
}

/// Eligibility rules and rate configuration for one product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyTerms {
    /// Product code identifier
    pub product_code: String,
    /// Product display name
    pub product_name: String,
    /// Minimum entry age, inclusive
    pub min_age: u32,
    /// Maximum entry age, inclusive
    pub max_age: u32,
    /// Bounds on the scaled coverage amount
    pub coverage_range: CoverageRange,
    /// Permitted term durations in years
    pub duration_options: Vec<u32>,
    /// Annual contribution rate per currency unit of coverage
    pub base_premium_rate: Rate,
    /// Currency contributions are quoted in
    pub currency: Currency,
    /// Unit convention for the applicant's coverage input
    pub coverage_unit: CoverageUnit,
}

impl PolicyTerms {
    /// Checks the terms for internal consistency
    ///
    /// Ordering matters only for which error is reported first; every check
    /// is independent and a product must pass all of them to be quotable.
    ///
    /// # Errors
    ///
    /// Returns the first [`TermsError`] found.
    pub fn validate(&self) -> Result<(), TermsError> {
        if !self.base_premium_rate.is_positive() {
            return Err(TermsError::NonPositiveRate(
                self.base_premium_rate.as_decimal(),
            ));
        }
        if self.min_age > self.max_age {
            return Err(TermsError::InvertedAgeRange {
                min: self.min_age,
                max: self.max_age,
            });
        }
        if self.coverage_range.min <= dec!(0) {
            return Err(TermsError::NonPositiveCoverageMinimum(
                self.coverage_range.min,
            ));
        }
        if let Some(max) = self.coverage_range.max {
            if self.coverage_range.min > max {
                return Err(TermsError::InvertedCoverageRange {
                    min: self.coverage_range.min,
                    max,
                });
            }
        }
        if self.duration_options.is_empty() {
            return Err(TermsError::NoDurationOptions);
        }
        Ok(())
    }

    /// Returns true if the age satisfies the entry-age bounds
    pub fn accepts_age(&self, age: u32) -> bool {
        age >= self.min_age && age <= self.max_age
    }

    /// Returns true if the duration is one of the permitted options
    pub fn accepts_duration(&self, years: u32) -> bool {
        self.duration_options.contains(&years)
    }
}
