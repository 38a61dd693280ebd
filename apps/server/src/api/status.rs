use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use marketlens_core::status::ApiStatus;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

async fn get_status(State(state): State<Arc<AppState>>) -> ApiResult<Json<ApiStatus>> {
    let status = state
        .status_service
        .check()
        .await
        .map_err(|e| ApiError::context("Error checking API status", e))?;
    Ok(Json(status))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(get_status))
}
