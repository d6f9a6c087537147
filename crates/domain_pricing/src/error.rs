//! Pricing domain errors
//!
//! Two failure classes are kept distinct so callers never blame the
//! applicant for a broken product definition: [`TermsError`] for policy
//! misconfiguration and [`ValidationErrors`] for rejected user input.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Policy terms misconfiguration
///
/// A misconfigured product is an operator problem, not an applicant
/// problem. These are checked before any request validation runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TermsError {
    /// Base contribution rate is missing, zero, or negative
    #[error("Base contribution rate must be positive, got {0}")]
    NonPositiveRate(Decimal),

    /// Entry age bounds are inverted
    #[error("Minimum entry age {min} exceeds maximum entry age {max}")]
    InvertedAgeRange { min: u32, max: u32 },

    /// Coverage range bounds are inverted
    #[error("Minimum coverage {min} exceeds maximum coverage {max}")]
    InvertedCoverageRange { min: Decimal, max: Decimal },

    /// Coverage minimum is zero or negative
    #[error("Minimum coverage must be positive, got {0}")]
    NonPositiveCoverageMinimum(Decimal),

    /// No permitted term durations are configured
    #[error("Policy offers no term durations")]
    NoDurationOptions,
}

/// Errors that can occur when quoting a contribution
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The supplied policy terms are unusable
    #[error("Policy misconfigured: {0}")]
    Terms(#[from] TermsError),

    /// The quote request violated one or more eligibility rules
    #[error("Quote request rejected: {0}")]
    Validation(ValidationErrors),
}

impl From<ValidationErrors> for QuoteError {
    fn from(errors: ValidationErrors) -> Self {
        QuoteError::Validation(errors)
    }
}
