//! Router and the analyze handler.

use crate::report::{LocationQuery, ProspectReport, QueryError, ReportError};
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

pub const ANALYZE_PATH: &str = "/api/analyze";

/// `{ "error": "..." }` sent with every non-200 response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error("invalid request body")]
    Body(#[source] serde_json::Error),
    #[error("server error")]
    Internal(#[from] ReportError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Query(_) | ApiError::Body(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(e) => error!(error = %e, "analyze failed"),
            ApiError::Body(e) => debug!(error = %e, "rejected request body"),
            ApiError::Query(e) => debug!(error = %e, "rejected query"),
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// CORS is open to any origin so a static front end on another host can call in.
pub fn router() -> Router {
    Router::new()
        .route(ANALYZE_PATH, post(analyze))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Empty bodies count as `{}`; the content type is not checked.
fn parse_query(body: &[u8]) -> Result<LocationQuery, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(LocationQuery::default());
    }
    serde_json::from_slice(body).map_err(ApiError::Body)
}

async fn analyze(body: Bytes) -> Result<Json<ProspectReport>, ApiError> {
    let query = parse_query(&body)?;
    let location = query.validated_location()?;
    if let Some(ts) = query.client_time() {
        debug!(client_time = %ts, "client timestamp");
    }
    let report = ProspectReport::now(location)?;
    info!(
        location = %report.location,
        verdict = %report.score.verdict,
        depth_m = report.score.estimated_depth,
        "analyzed location"
    );
    Ok(Json(report))
}
