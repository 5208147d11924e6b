//! Paper listing API handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use bytesize_core::{Paper, ServiceError};

use super::ErrorResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PapersQueryParams {
    /// Partition to list: "recent" or "cited".
    pub option: String,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct PapersResponse {
    pub items: Vec<Paper>,
    pub total_count: u64,
}

/// GET /api/v1/papers
///
/// List one page of a catalog partition.
pub async fn get_papers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PapersQueryParams>,
) -> Result<Json<PapersResponse>, impl IntoResponse> {
    match state
        .service()
        .get_papers(&params.option, params.page, params.page_size)
    {
        Ok(page) => Ok(Json(PapersResponse {
            items: page.items,
            total_count: page.total_count,
        })),
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
