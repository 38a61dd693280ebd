use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use marketlens_core::watchlist::{NewWatchlistEntry, WatchlistEntry};

use crate::{error::ApiResult, main_lib::AppState};

async fn get_watchlist(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<WatchlistEntry>>> {
    let entries = state.watchlist_service.get_entries()?;
    Ok(Json(entries))
}

async fn add_to_watchlist(
    State(state): State<Arc<AppState>>,
    Json(entry): Json<NewWatchlistEntry>,
) -> ApiResult<(StatusCode, Json<WatchlistEntry>)> {
    let created = state.watchlist_service.add_symbol(&entry.symbol).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn remove_from_watchlist(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.watchlist_service.remove_symbol(&symbol).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_watchlist).post(add_to_watchlist))
        .route("/{symbol}", delete(remove_from_watchlist))
}
