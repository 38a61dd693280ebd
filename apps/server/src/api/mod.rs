use std::{path::Path, sync::Arc};

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, main_lib::AppState};

mod indices;
mod markets;
mod status;
mod stocks;
mod watchlist;

async fn healthz() -> &'static str {
    "ok"
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let allow_origin: AllowOrigin = if config.cors_allow.iter().any(|o| o == "*") {
        Any.into()
    } else {
        AllowOrigin::list(
            config
                .cors_allow
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/healthz", get(healthz))
        .nest("/stocks", stocks::router())
        .nest("/markets", markets::router())
        .nest("/status", status::router())
        .nest("/indices", indices::router())
        .nest("/watchlist", watchlist::router())
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}

/// Serves the frontend from `static_dir`. Unknown paths get `index.html`.
pub fn static_files(static_dir: impl AsRef<Path>) -> ServeDir<ServeFile> {
    let static_dir = static_dir.as_ref();
    ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")))
}
