//! Quote DTOs
//!
//! The request body is the raw form submission from the quote page; the
//! domain owns its shape so malformed numerics become field errors rather
//! than deserialization failures.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::QuoteId;
use domain_pricing::{ContributionQuote, PolicyTerms};

/// A priced contribution quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote_id: QuoteId,
    pub product_code: String,
    pub currency: String,
    pub monthly_contribution: Decimal,
    pub annual_contribution: Decimal,
    pub quoted_at: DateTime<Utc>,
}

impl QuoteResponse {
    /// Builds the response for a freshly priced quote
    pub fn new(terms: &PolicyTerms, quote: &ContributionQuote) -> Self {
        Self {
            quote_id: QuoteId::new_v7(),
            product_code: terms.product_code.clone(),
            currency: terms.currency.code().to_string(),
            monthly_contribution: quote.monthly_contribution.amount(),
            annual_contribution: quote.annual_contribution.amount(),
            quoted_at: Utc::now(),
        }
    }
}
