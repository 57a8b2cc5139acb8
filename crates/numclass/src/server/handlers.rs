use axum::{
    extract::{rejection::QueryRejection, Query, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use numclass_core::classify::{classify, parse_number_values, Classification, ClassifyError};

use super::AppState;

/// Rejected input, rendered as `400 Bad Request` with the JSON error payload
#[derive(Debug)]
pub struct ApiError(ClassifyError);

impl From<ClassifyError> for ApiError {
    fn from(err: ClassifyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::debug!("Rejected classification request: {}", self.0);
        (StatusCode::BAD_REQUEST, Json(self.0.payload())).into_response()
    }
}

/// `GET /api/classify-number?number=<token>`
pub async fn classify_number(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Classification>, ApiError> {
    let Query(pairs) = query.map_err(|rejection| {
        log::debug!("Unreadable query string: {rejection}");
        ClassifyError::NotNumeric(raw_query.unwrap_or_default())
    })?;

    let values: Vec<&str> = pairs
        .iter()
        .filter(|(key, _)| key == "number")
        .map(|(_, value)| value.as_str())
        .collect();

    let n = parse_number_values(&values)?;
    let fun_fact = state.facts.fetch_or_fallback(n).await;

    log::info!("Classified {n}");
    Ok(Json(classify(n, fun_fact)))
}

/// `GET /health`
pub async fn health() -> &'static str {
    "OK"
}
