use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use motphim_backend::controllers::{
    catalog::CatalogController, discover::DiscoverController, views::ViewsController,
};
use motphim_backend::domain::catalog::CatalogService;
use motphim_backend::domain::discover::{DiscoverCache, DiscoverService, SystemClock};
use motphim_backend::domain::views::ViewsService;
use motphim_backend::infrastructure::config::{Config, LogFormat};
use motphim_backend::infrastructure::http::{build_router, start_http_server};
use motphim_backend::infrastructure::repositories::FileViewRepository;
use motphim_backend::infrastructure::upstream::OphimClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Arc::new(Config::from_env()?);

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting MotPhim Backend on {}:{}",
        config.host,
        config.port
    );
    tracing::info!("Proxying upstream catalog at {}", config.upstream_base_url);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Upstream catalog client
    let catalog_source = Arc::new(OphimClient::new(config.upstream_base_url.clone())?);

    // 2. View counters (file-backed, flushed periodically and on shutdown)
    let view_repository = Arc::new(FileViewRepository::load(config.views_file.clone()));
    let _flush_task = view_repository.spawn_flush_task(config.views_flush_interval);

    // 3. Services
    let catalog_service = Arc::new(CatalogService::new(catalog_source.clone()));
    let discover_cache = DiscoverCache::new(config.discover_cache_ttl, Arc::new(SystemClock));
    let discover_service = Arc::new(DiscoverService::new(catalog_source, discover_cache));
    let views_service = Arc::new(ViewsService::new(view_repository.clone()));

    // 4. Controllers
    let catalog_controller = Arc::new(CatalogController::new(catalog_service));
    let discover_controller = Arc::new(DiscoverController::new(discover_service));
    let views_controller = Arc::new(ViewsController::new(views_service.clone()));

    // Start HTTP server with all routes
    let app = build_router(
        config.clone(),
        catalog_controller,
        discover_controller,
        views_controller,
        views_service,
    );
    start_http_server(config, app).await?;

    // Persist whatever the last flush interval missed
    if let Err(err) = view_repository.flush().await {
        tracing::warn!(error = %err, "final views flush failed");
    } else {
        tracing::info!("View counters flushed");
    }

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "motphim_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "motphim_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
