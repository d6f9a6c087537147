//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the pricing
//! system. These fixtures are designed to be consistent and predictable
//! for unit tests.

use core_kernel::{Currency, Money, Rate};
use domain_pricing::{
    CoverageRange, CoverageUnit, Gender, PolicyCatalog, PolicyTerms, QuoteRequest, SmokerStatus,
};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

/// A small product catalog shared across integration tests
pub static SHARED_CATALOG: Lazy<PolicyCatalog> = Lazy::new(|| {
    PolicyCatalog::from_json(CatalogFixtures::products_json())
        .unwrap_or_else(|err| panic!("fixture catalog must load: {err}"))
});

/// Fixture for policy terms test data
pub struct TermsFixtures;

impl TermsFixtures {
    /// A standard term product: ages 18-65, coverage 100k-5m USD in lakhs,
    /// durations 10/20/30 years, base rate 0.00008
    pub fn term_product() -> PolicyTerms {
        PolicyTerms {
            product_code: "TAKAFUL_TERM".to_string(),
            product_name: "Takaful Term Life".to_string(),
            min_age: 18,
            max_age: 65,
            coverage_range: CoverageRange::new(dec!(100000), dec!(5000000)),
            duration_options: vec![10, 20, 30],
            base_premium_rate: Rate::new(dec!(0.00008)),
            currency: Currency::USD,
            coverage_unit: CoverageUnit::Lakh,
        }
    }

    /// A product quoting absolute coverage amounts rather than lakhs
    pub fn unit_coverage_product() -> PolicyTerms {
        PolicyTerms {
            coverage_unit: CoverageUnit::Unit,
            ..Self::term_product()
        }
    }

    /// A product with no upper coverage bound
    pub fn open_ended_product() -> PolicyTerms {
        PolicyTerms {
            product_code: "TAKAFUL_WHOLE".to_string(),
            product_name: "Takaful Whole Life".to_string(),
            coverage_range: CoverageRange::at_least(dec!(200000)),
            ..Self::term_product()
        }
    }

    /// Terms with a zero base rate, which must never produce a quote
    pub fn zero_rate_product() -> PolicyTerms {
        PolicyTerms {
            base_premium_rate: Rate::new(dec!(0)),
            ..Self::term_product()
        }
    }

    /// Terms with min_age above max_age
    pub fn inverted_age_product() -> PolicyTerms {
        PolicyTerms {
            min_age: 65,
            max_age: 18,
            ..Self::term_product()
        }
    }

    /// Terms with an empty duration list
    pub fn no_durations_product() -> PolicyTerms {
        PolicyTerms {
            duration_options: Vec::new(),
            ..Self::term_product()
        }
    }
}

/// Fixture for quote request test data
pub struct RequestFixtures;

impl RequestFixtures {
    /// The reference applicant: 30 years old, 20 lakh coverage,
    /// 10 year term, non-smoker
    pub fn standard() -> QuoteRequest {
        QuoteRequest {
            age: 30,
            gender: Gender::Male,
            coverage_amount: dec!(20),
            duration_years: 10,
            smoker: SmokerStatus::NonSmoker,
        }
    }

    /// The reference applicant as a smoker
    pub fn smoker() -> QuoteRequest {
        QuoteRequest {
            smoker: SmokerStatus::Smoker,
            ..Self::standard()
        }
    }

    /// An applicant below the standard product's entry age
    pub fn underage() -> QuoteRequest {
        QuoteRequest {
            age: 15,
            ..Self::standard()
        }
    }

    /// An applicant failing every validation rule at once
    pub fn fully_invalid() -> QuoteRequest {
        QuoteRequest {
            age: 15,
            gender: Gender::Female,
            coverage_amount: dec!(-1),
            duration_years: 7,
            smoker: SmokerStatus::Smoker,
        }
    }
}

/// Fixture for money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The reference monthly contribution for the standard applicant
    pub fn reference_monthly() -> Money {
        Money::new(dec!(48.00), Currency::USD)
    }

    /// The reference annual contribution for the standard applicant
    pub fn reference_annual() -> Money {
        Money::new(dec!(576.00), Currency::USD)
    }
}

/// Fixture for product catalog test data
pub struct CatalogFixtures;

impl CatalogFixtures {
    /// A two-product catalog document in the on-disk format
    pub fn products_json() -> &'static str {
        r#"{
          "products": [
            {
              "product_code": "TAKAFUL_TERM",
              "product_name": "Takaful Term Life",
              "min_age": 18,
              "max_age": 65,
              "coverage_range": { "min": "100000", "max": "5000000" },
              "duration_options": [10, 20, 30],
              "base_premium_rate": "0.00008",
              "currency": "USD",
              "coverage_unit": "lakh"
            },
            {
              "product_code": "TAKAFUL_FAMILY",
              "product_name": "Takaful Family Protection",
              "min_age": 21,
              "max_age": 60,
              "coverage_range": { "min": "200000", "max": "10000000" },
              "duration_options": [10, 20],
              "base_premium_rate": "0.0001",
              "currency": "USD",
              "coverage_unit": "lakh"
            }
          ]
        }"#
    }
}
