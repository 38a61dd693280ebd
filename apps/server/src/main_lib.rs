use std::sync::Arc;

use marketlens_core::{
    indices::{IndexService, IndexServiceTrait},
    quotes::{QuoteService, QuoteServiceTrait},
    status::{StatusService, StatusServiceTrait},
    watchlist::{WatchlistService, WatchlistServiceTrait},
};
use marketlens_market_data::{
    AlphaVantageClient, IndexComponentGenerator, QuoteProvider, SampleStore,
};
use marketlens_storage_sqlite::{db, watchlist::WatchlistRepository};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait + Send + Sync>,
    pub status_service: Arc<dyn StatusServiceTrait + Send + Sync>,
    pub index_service: Arc<dyn IndexServiceTrait + Send + Sync>,
    pub watchlist_service: Arc<dyn WatchlistServiceTrait + Send + Sync>,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let provider: Arc<dyn QuoteProvider> = Arc::new(AlphaVantageClient::new(
        config.api_base_url.clone(),
        config.api_key.clone(),
        config.upstream_timeout,
    )?);

    let quote_service = Arc::new(QuoteService::new(provider.clone(), config.trending_mode));
    let status_service = Arc::new(StatusService::new(provider, &config.api_key));

    let sample_store = SampleStore::new(&config.sample_data_dir);
    tracing::info!(
        "Index sample data directory: {}",
        sample_store.dir().display()
    );
    let index_service = Arc::new(IndexService::new(IndexComponentGenerator::new(
        sample_store,
    )));

    let watchlist_repository = Arc::new(WatchlistRepository::new(pool, writer));
    let watchlist_service = Arc::new(WatchlistService::new(watchlist_repository));

    tracing::info!(
        "Upstream {} (timeout {:?}), trending mode {}",
        config.api_base_url,
        config.upstream_timeout,
        config.trending_mode
    );

    Ok(Arc::new(AppState {
        quote_service,
        status_service,
        index_service,
        watchlist_service,
    }))
}
