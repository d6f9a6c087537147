//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant
//! fields while using defaults for everything else.

use core_kernel::{Currency, Rate};
use domain_pricing::{
    CoverageRange, CoverageUnit, Gender, PolicyTerms, QuoteRequest, SmokerStatus,
};
use rust_decimal::Decimal;

use crate::fixtures::{RequestFixtures, TermsFixtures};

/// Builder for constructing policy terms
pub struct PolicyTermsBuilder {
    terms: PolicyTerms,
}

impl Default for PolicyTermsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyTermsBuilder {
    /// Creates a new builder seeded from the standard term product
    pub fn new() -> Self {
        Self {
            terms: TermsFixtures::term_product(),
        }
    }

    /// Sets the product code
    pub fn with_product_code(mut self, code: impl Into<String>) -> Self {
        self.terms.product_code = code.into();
        self
    }

    /// Sets the accepted age band
    pub fn with_age_band(mut self, min: u32, max: u32) -> Self {
        self.terms.min_age = min;
        self.terms.max_age = max;
        self
    }

    /// Sets a bounded coverage range on the scaled amount
    pub fn with_coverage_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.terms.coverage_range = CoverageRange::new(min, max);
        self
    }

    /// Sets an open-ended coverage range
    pub fn with_coverage_at_least(mut self, min: Decimal) -> Self {
        self.terms.coverage_range = CoverageRange::at_least(min);
        self
    }

    /// Sets the permitted durations
    pub fn with_durations(mut self, years: Vec<u32>) -> Self {
        self.terms.duration_options = years;
        self
    }

    /// Sets the base premium rate
    pub fn with_base_rate(mut self, rate: Decimal) -> Self {
        self.terms.base_premium_rate = Rate::new(rate);
        self
    }

    /// Sets the quoting currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.terms.currency = currency;
        self
    }

    /// Sets the coverage unit convention
    pub fn with_coverage_unit(mut self, unit: CoverageUnit) -> Self {
        self.terms.coverage_unit = unit;
        self
    }

    /// Finalizes the terms
    pub fn build(self) -> PolicyTerms {
        self.terms
    }
}

/// Builder for constructing quote requests
pub struct QuoteRequestBuilder {
    request: QuoteRequest,
}

impl Default for QuoteRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRequestBuilder {
    /// Creates a new builder seeded from the standard applicant
    pub fn new() -> Self {
        Self {
            request: RequestFixtures::standard(),
        }
    }

    /// Sets the applicant age
    pub fn with_age(mut self, age: u32) -> Self {
        self.request.age = age;
        self
    }

    /// Sets the applicant gender
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.request.gender = gender;
        self
    }

    /// Sets the requested coverage amount
    pub fn with_coverage(mut self, amount: Decimal) -> Self {
        self.request.coverage_amount = amount;
        self
    }

    /// Sets the requested duration
    pub fn with_duration(mut self, years: u32) -> Self {
        self.request.duration_years = years;
        self
    }

    /// Sets the smoker status
    pub fn with_smoker(mut self, smoker: SmokerStatus) -> Self {
        self.request.smoker = smoker;
        self
    }

    /// Finalizes the request
    pub fn build(self) -> QuoteRequest {
        self.request
    }
}
