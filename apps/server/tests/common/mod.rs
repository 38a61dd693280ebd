#![allow(dead_code)]

use std::{net::SocketAddr, path::Path, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::get,
    Json, Router,
};
use marketlens_core::quotes::TrendingMode;
use marketlens_server::{api::app_router, build_state, config::Config};
use serde_json::Value;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

pub const TEST_API_KEY: &str = "ABCDE12345FGHIJ";

/// Serves `body` for every request on an ephemeral port and returns the query URL.
pub async fn spawn_upstream(body: Value) -> String {
    let app = Router::new().route(
        "/query",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/query", addr)
}

/// A URL on which nothing is listening.
pub async fn closed_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/query", addr)
}

pub fn test_config(dir: &Path, api_base_url: String) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        api_key: TEST_API_KEY.to_string(),
        api_base_url,
        db_path: dir.join("test.db").to_string_lossy().into_owned(),
        sample_data_dir: dir.join("sample_data").to_string_lossy().into_owned(),
        upstream_timeout: Duration::from_secs(2),
        request_timeout: Duration::from_secs(10),
        trending_mode: TrendingMode::Sample,
        cors_allow: vec!["*".to_string()],
        static_dir: dir.join("static").to_string_lossy().into_owned(),
        log_format: "text".to_string(),
    }
}

pub async fn build_app_with(config: Config) -> Router {
    let state = build_state(&config).await.unwrap();
    app_router(state, &config)
}

/// App backed by a fake upstream answering `upstream_body`. Keep the returned
/// directory alive for the duration of the test.
pub async fn build_app(upstream_body: Value) -> (Router, TempDir) {
    let tmp = tempdir().unwrap();
    let base_url = spawn_upstream(upstream_body).await;
    let app = build_app_with(test_config(tmp.path(), base_url)).await;
    (app, tmp)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}
