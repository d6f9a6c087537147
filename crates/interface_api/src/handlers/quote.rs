//! Quote handlers

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use domain_pricing::{calculator, QuoteSubmission};

use crate::dto::quote::QuoteResponse;
use crate::{error::ApiError, AppState};

/// Prices a contribution quote for one product
///
/// Accepts the raw quote form submission; responds with the priced quote
/// or a field-keyed validation error body.
pub async fn create_quote(
    State(state): State<AppState>,
    Path(product_code): Path<String>,
    Json(submission): Json<QuoteSubmission>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let terms = state
        .catalog
        .get(&product_code)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown product: {}", product_code)))?;

    let request = submission.parse()?;
    let quote = calculator::quote(&terms, &request)?;

    debug!(
        product_code = %terms.product_code,
        monthly = %quote.monthly_contribution,
        "Priced contribution quote"
    );

    Ok(Json(QuoteResponse::new(&terms, &quote)))
}
