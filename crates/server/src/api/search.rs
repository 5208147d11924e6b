//! Search API handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use bytesize_core::{SearchItem, ServiceError};

use super::ErrorResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQueryParams {
    /// Field to match: "title" or "author".
    pub option: String,
    pub query: String,
    #[serde(default)]
    pub max_results: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub items: Vec<SearchItem>,
}

/// GET /api/v1/search
///
/// Search the catalog, falling back to the remote feed when local results
/// leave the budget unfilled.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQueryParams>,
) -> Result<Json<SearchResponse>, impl IntoResponse> {
    match state
        .service()
        .search(&params.option, &params.query, params.max_results)
        .await
    {
        Ok(items) => Ok(Json(SearchResponse { items })),
        Err(ServiceError::InvalidArgument(msg)) => {
            Err((StatusCode::BAD_REQUEST, Json(ErrorResponse { error: msg })))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}
