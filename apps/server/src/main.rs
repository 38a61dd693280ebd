use marketlens_server::{
    api::{app_router, static_files},
    build_state,
    config::Config,
    init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log_format);
    let state = build_state(&config).await?;

    let assets = static_files(&config.static_dir);
    let router = app_router(state, &config).fallback_service(assets);
    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
