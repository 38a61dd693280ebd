use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use marketlens_core::indices::MarketOverview;

use crate::main_lib::AppState;

async fn get_market_indices(State(state): State<Arc<AppState>>) -> Json<MarketOverview> {
    Json(state.index_service.market_overview())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/indices", get(get_market_indices))
}
