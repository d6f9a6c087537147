//! Quote request and result value objects

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

/// Applicant gender
///
/// Collected with the quote form but deliberately unused by the rate
/// formula; the marketplace records it without an actuarial adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Smoker status of the applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokerStatus {
    #[serde(rename = "smoker")]
    Smoker,
    #[serde(rename = "non-smoker")]
    NonSmoker,
}

impl SmokerStatus {
    /// Returns true for smokers
    pub fn is_smoker(&self) -> bool {
        matches!(self, SmokerStatus::Smoker)
    }

    /// Returns the contribution loading factor for this status
    pub fn loading_factor(&self) -> Decimal {
        match self {
            SmokerStatus::Smoker => dec!(1.4),
            SmokerStatus::NonSmoker => dec!(1.0),
        }
    }
}

/// A validated request for a contribution quote
///
/// Constructed either directly or by parsing a raw [`QuoteSubmission`];
/// transient and never persisted.
///
/// [`QuoteSubmission`]: crate::submission::QuoteSubmission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Applicant age in whole years
    pub age: u32,
    /// Recorded but not rated on
    pub gender: Gender,
    /// Requested coverage, in the product's coverage unit
    pub coverage_amount: Decimal,
    /// Requested term in years
    pub duration_years: u32,
    /// Smoker status
    pub smoker: SmokerStatus,
}

/// A computed contribution quote
///
/// Immutable once produced; only ever constructed for a request that
/// passed every validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionQuote {
    /// Contribution per month, rounded to 2 decimal places
    pub monthly_contribution: Money,
    /// Contribution per year, always exactly round2(monthly * 12)
    pub annual_contribution: Money,
}
