//! Raw quote form submissions
//!
//! The quote form arrives as loosely-typed strings. Parsing here turns
//! malformed numeric input into field-keyed validation errors instead of
//! deserialization faults, so "abc" in the age box reads the same to the
//! caller as an age outside the policy bounds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::quote::{Gender, QuoteRequest, SmokerStatus};
use crate::validation::{QuoteField, ValidationErrors};

/// A raw, unvalidated quote form submission
///
/// All fields are optional strings, mirroring what an HTML form posts.
/// `gender` and `smoker` fall back to the form's defaults when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSubmission {
    pub age: Option<String>,
    pub gender: Option<String>,
    pub coverage_amount: Option<String>,
    pub duration_years: Option<String>,
    pub smoker: Option<String>,
}

impl QuoteSubmission {
    /// Parses the submission into a typed [`QuoteRequest`]
    ///
    /// All fields are parsed independently; every malformed field is
    /// reported, not just the first.
    ///
    /// # Errors
    ///
    /// Returns field-keyed messages for missing or malformed inputs.
    pub fn parse(&self) -> Result<QuoteRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let age = match self.age.as_deref().map(str::trim) {
            None | Some("") => {
                errors.add(QuoteField::Age, "Age is required");
                None
            }
            Some(raw) => match raw.parse::<u32>() {
                Ok(age) => Some(age),
                Err(_) => {
                    errors.add(QuoteField::Age, "Age must be a whole number");
                    None
                }
            },
        };

        let coverage_amount = match self.coverage_amount.as_deref().map(str::trim) {
            None | Some("") => {
                errors.add(QuoteField::CoverageAmount, "Coverage amount is required");
                None
            }
            Some(raw) => match Decimal::from_str(raw) {
                Ok(amount) => Some(amount),
                Err(_) => {
                    errors.add(
                        QuoteField::CoverageAmount,
                        "Coverage amount must be a number",
                    );
                    None
                }
            },
        };

        let duration_years = match self.duration_years.as_deref().map(str::trim) {
            None | Some("") => {
                errors.add(QuoteField::DurationYears, "Duration is required");
                None
            }
            Some(raw) => match raw.parse::<u32>() {
                Ok(years) => Some(years),
                Err(_) => {
                    errors.add(
                        QuoteField::DurationYears,
                        "Duration must be a whole number of years",
                    );
                    None
                }
            },
        };

        let gender = match self.gender.as_deref().map(str::trim) {
            // The quote form preselects Male
            None | Some("") => Some(Gender::Male),
            Some(raw) => match parse_gender(raw) {
                Some(gender) => Some(gender),
                None => {
                    errors.add(QuoteField::Gender, "Gender must be male or female");
                    None
                }
            },
        };

        let smoker = match self.smoker.as_deref().map(str::trim) {
            // The quote form preselects Non-Smoker
            None | Some("") => Some(SmokerStatus::NonSmoker),
            Some(raw) => match parse_smoker(raw) {
                Some(status) => Some(status),
                None => {
                    errors.add(
                        QuoteField::Smoker,
                        "Smoker status must be smoker or non-smoker",
                    );
                    None
                }
            },
        };

        // Every field is Some exactly when no error was recorded for it
        if let (Some(age), Some(gender), Some(coverage_amount), Some(duration_years), Some(smoker)) =
            (age, gender, coverage_amount, duration_years, smoker)
        {
            Ok(QuoteRequest {
                age,
                gender,
                coverage_amount,
                duration_years,
                smoker,
            })
        } else {
            Err(errors)
        }
    }
}

fn parse_gender(raw: &str) -> Option<Gender> {
    match raw.to_ascii_lowercase().as_str() {
        "male" => Some(Gender::Male),
        "female" => Some(Gender::Female),
        _ => None,
    }
}

fn parse_smoker(raw: &str) -> Option<SmokerStatus> {
    match raw.to_ascii_lowercase().as_str() {
        "smoker" => Some(SmokerStatus::Smoker),
        "non-smoker" | "nonsmoker" => Some(SmokerStatus::NonSmoker),
        _ => None,
    }
}
