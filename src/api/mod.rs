//! HTTP API server

use std::future::Future;

use axum::{http::HeaderValue, routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use handlers::ApiError;
pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/realtime-buses", get(handlers::realtime_buses))
        .route("/ping", get(handlers::ping))
        .route("/tileserver-url", get(handlers::tileserver_url))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

/// CORS policy for the browser client: listed origins only, with credentials.
///
/// Credentialed requests cannot use wildcards, so methods and headers are mirrored
/// from the request instead.
pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Serve the router until `shutdown` resolves, then drain in-flight requests.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
