//! Policy catalog handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::dto::policy::{PolicyDetail, PolicySummary};
use crate::{error::ApiError, AppState};

/// Lists the quotable products
pub async fn list_policies(State(state): State<AppState>) -> Json<Vec<PolicySummary>> {
    let summaries = state
        .catalog
        .list()
        .iter()
        .map(|terms| PolicySummary::from(terms.as_ref()))
        .collect();
    Json(summaries)
}

/// Gets the full terms for one product
pub async fn get_policy(
    State(state): State<AppState>,
    Path(product_code): Path<String>,
) -> Result<Json<PolicyDetail>, ApiError> {
    let terms = state
        .catalog
        .get(&product_code)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown product: {}", product_code)))?;

    Ok(Json(PolicyDetail::from(terms.as_ref())))
}
