//! Quote request validation
//!
//! Every rule is evaluated independently and every violation is reported,
//! keyed by field, so a form can highlight all invalid inputs at once
//! instead of revealing them one failure at a time.

use rust_decimal_macros::dec;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::quote::QuoteRequest;
use crate::terms::PolicyTerms;

/// Message for coverage amounts whose scaled value cannot be represented
pub(crate) const COVERAGE_TOO_LARGE: &str = "Coverage amount is too large";

/// Fields a validation error can attach to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum QuoteField {
    Age,
    Gender,
    CoverageAmount,
    DurationYears,
    Smoker,
}

impl QuoteField {
    /// Returns the wire name of the field, matching the quote form
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteField::Age => "age",
            QuoteField::Gender => "gender",
            QuoteField::CoverageAmount => "coverageAmount",
            QuoteField::DurationYears => "durationYears",
            QuoteField::Smoker => "smoker",
        }
    }
}

impl fmt::Display for QuoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-empty, field-keyed collection of validation messages
///
/// Ordered by field so error output is deterministic. Serializes as a JSON
/// object mapping field name to message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<QuoteField, String>,
}

impl ValidationErrors {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation for a field, replacing any earlier message
    pub fn add(&mut self, field: QuoteField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Returns the message recorded for a field, if any
    pub fn get(&self, field: QuoteField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Returns true if no violations were recorded
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with violations
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates violations in field order
    pub fn iter(&self) -> impl Iterator<Item = (QuoteField, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Merges another collection into this one
    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Converts into a `Result`, erring when any violation was recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, message) in self.iter() {
            map.serialize_entry(field.as_str(), message)?;
        }
        map.end()
    }
}

/// Validates a quote request against policy terms
///
/// Assumes the terms themselves already passed [`PolicyTerms::validate`];
/// rules are checked independently and never short-circuit.
///
/// # Errors
///
/// Returns every violated rule, keyed by field.
pub fn validate_request(
    terms: &PolicyTerms,
    request: &QuoteRequest,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if !terms.accepts_age(request.age) {
        errors.add(
            QuoteField::Age,
            format!(
                "Age must be between {} and {}",
                terms.min_age, terms.max_age
            ),
        );
    }

    if request.coverage_amount <= dec!(0) {
        errors.add(
            QuoteField::CoverageAmount,
            "Coverage amount must be greater than 0",
        );
    } else {
        // An amount whose scaled value overflows Decimal exceeds any
        // representable coverage range; report it, never panic on it.
        match request
            .coverage_amount
            .checked_mul(terms.coverage_unit.scale())
        {
            None => {
                errors.add(QuoteField::CoverageAmount, COVERAGE_TOO_LARGE);
            }
            Some(scaled) if !terms.coverage_range.contains(scaled) => {
                let message = match terms.coverage_range.max {
                    Some(max) => format!(
                        "Coverage must be between {} and {} {}",
                        terms.coverage_range.min, max, terms.currency
                    ),
                    None => format!(
                        "Coverage must be at least {} {}",
                        terms.coverage_range.min, terms.currency
                    ),
                };
                errors.add(QuoteField::CoverageAmount, message);
            }
            Some(_) => {}
        }
    }

    if !terms.accepts_duration(request.duration_years) {
        let options: Vec<String> = terms
            .duration_options
            .iter()
            .map(u32::to_string)
            .collect();
        errors.add(
            QuoteField::DurationYears,
            format!("Duration must be one of {} years", options.join(", ")),
        );
    }

    errors.into_result()
}
