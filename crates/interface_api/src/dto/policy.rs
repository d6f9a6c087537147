//! Policy catalog DTOs

use rust_decimal::Decimal;
use serde::Serialize;

use domain_pricing::{CoverageUnit, PolicyTerms};

/// One row in the policy listing
#[derive(Debug, Serialize)]
pub struct PolicySummary {
    pub product_code: String,
    pub product_name: String,
    pub min_age: u32,
    pub max_age: u32,
    pub currency: String,
    pub duration_options: Vec<u32>,
}

impl From<&PolicyTerms> for PolicySummary {
    fn from(terms: &PolicyTerms) -> Self {
        Self {
            product_code: terms.product_code.clone(),
            product_name: terms.product_name.clone(),
            min_age: terms.min_age,
            max_age: terms.max_age,
            currency: terms.currency.code().to_string(),
            duration_options: terms.duration_options.clone(),
        }
    }
}

/// Full terms for one product
#[derive(Debug, Serialize)]
pub struct PolicyDetail {
    pub product_code: String,
    pub product_name: String,
    pub min_age: u32,
    pub max_age: u32,
    pub min_coverage: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_coverage: Option<Decimal>,
    pub duration_options: Vec<u32>,
    pub base_premium_rate: Decimal,
    pub currency: String,
    pub coverage_unit: CoverageUnit,
}

impl From<&PolicyTerms> for PolicyDetail {
    fn from(terms: &PolicyTerms) -> Self {
        Self {
            product_code: terms.product_code.clone(),
            product_name: terms.product_name.clone(),
            min_age: terms.min_age,
            max_age: terms.max_age,
            min_coverage: terms.coverage_range.min,
            max_coverage: terms.coverage_range.max,
            duration_options: terms.duration_options.clone(),
            base_premium_rate: terms.base_premium_rate.as_decimal(),
            currency: terms.currency.code().to_string(),
            coverage_unit: terms.coverage_unit,
        }
    }
}
