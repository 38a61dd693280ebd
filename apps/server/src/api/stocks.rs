use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use marketlens_core::quotes::Recommendation;
use marketlens_market_data::QuoteRecord;

use crate::main_lib::AppState;

/// Always answers with a quote; upstream failures are served from sample data.
async fn get_quote(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<QuoteRecord> {
    Json(state.quote_service.get_quote(&symbol).await)
}

async fn get_trending(State(state): State<Arc<AppState>>) -> Json<Vec<QuoteRecord>> {
    Json(state.quote_service.get_trending().await)
}

async fn get_recommendations(State(state): State<Arc<AppState>>) -> Json<Vec<Recommendation>> {
    Json(state.quote_service.get_recommendations())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quote/{symbol}", get(get_quote))
        .route("/trending", get(get_trending))
        .route("/recommendations", get(get_recommendations))
}
