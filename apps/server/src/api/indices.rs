use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use marketlens_core::indices::{IndexListing, IndexStocksQuery};
use marketlens_market_data::{IndexConstituent, SortField, SortOrder};
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// Raw query string values, parsed by hand so that bad values answer 422
/// with the usual error body.
#[derive(Debug, Default, Deserialize)]
struct IndexStocksParams {
    limit: Option<String>,
    sort_by: Option<String>,
    sort_order: Option<String>,
}

impl IndexStocksParams {
    fn into_query(self) -> ApiResult<IndexStocksQuery> {
        let mut query = IndexStocksQuery::default();
        if let Some(limit) = self.limit {
            query.limit = limit.trim().parse::<i64>().map_err(|_| {
                ApiError::Validation(format!("limit must be an integer, got {}", limit))
            })?;
        }
        if let Some(sort_by) = self.sort_by {
            query.sort_by = sort_by.parse::<SortField>()?;
        }
        if let Some(sort_order) = self.sort_order {
            query.sort_order = sort_order.parse::<SortOrder>()?;
        }
        Ok(query)
    }
}

async fn get_index_stocks(
    Path(index_symbol): Path<String>,
    Query(params): Query<IndexStocksParams>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<IndexConstituent>>> {
    let query = params.into_query()?;
    // Sample sets are read and written on disk.
    let service = state.index_service.clone();
    let task = tokio::task::spawn_blocking(move || service.get_components(&index_symbol, query));
    let stocks = task.await.map_err(|e| ApiError::Anyhow(e.into()))??;
    Ok(Json(stocks))
}

async fn list_indices(State(state): State<Arc<AppState>>) -> Json<Vec<IndexListing>> {
    Json(state.index_service.list_indices())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/indices", get(list_indices))
        .route("/{index_symbol}/stocks", get(get_index_stocks))
}
