use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::controllers::{
    catalog::CatalogController, discover::DiscoverController, health, views::ViewsController,
};
use crate::domain::views::ViewsService;
use crate::infrastructure::config::Config;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Assemble the application router. Split out from server startup so
/// API tests can drive it in-process.
pub fn build_router(
    config: Arc<Config>,
    catalog_controller: Arc<CatalogController>,
    discover_controller: Arc<DiscoverController>,
    views_controller: Arc<ViewsController>,
    views_service: Arc<ViewsService>,
) -> Router {
    let catalog_routes = Router::new()
        .route("/api/movies", get(CatalogController::latest))
        .route("/api/movies/:slug", get(CatalogController::detail))
        .route("/api/search", get(CatalogController::search))
        .route("/api/categories", get(CatalogController::categories))
        .route("/api/countries", get(CatalogController::countries))
        .route("/api/the-loai/:slug", get(CatalogController::by_category))
        .route("/api/quoc-gia/:slug", get(CatalogController::by_country))
        .route("/api/nam-phat-hanh/:year", get(CatalogController::by_year))
        .with_state(catalog_controller);

    let discover_routes = Router::new()
        .route("/api/discover", get(DiscoverController::discover))
        .with_state(discover_controller);

    let views_routes = Router::new()
        .route("/api/views", get(ViewsController::top_views))
        .route(
            "/api/views/:slug",
            get(ViewsController::get_views).post(ViewsController::record_view),
        )
        .with_state(views_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state((config, views_service))
        .merge(catalog_routes)
        .merge(discover_routes)
        .merge(views_routes)
        .layer(middleware::from_fn(request_id_middleware))
        // The site frontend is served from a different origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server and run until shutdown is signalled.
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}

/// Middleware attaching a request ID to every request/response pair.
/// An ID supplied by the caller is kept; otherwise one is generated.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(X_REQUEST_ID, header_value);
    }

    response
}

/// Request ID wrapper type for extension
#[derive(Debug, Clone)]
pub struct RequestId(pub String);
