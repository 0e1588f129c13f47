//! credible_server
//!
//! HTTP front end for `credible_supervisor`: one JSON endpoint, CORS for the
//! browser extension, env-driven configuration.

use std::future::Future;
use std::io;
use std::sync::Arc;

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use credible_core::{CredibilityRequest, VerdictRecord};
use credible_supervisor::CredibilitySupervisor;

pub mod config;
pub mod cors;

pub use config::{ConfigError, ServiceConfig};

pub const CHECK_PATH: &str = "/api/check-credibility";
/// The extension posts to the trailing-slash form.
pub const CHECK_PATH_SLASH: &str = "/api/check-credibility/";
pub const HEALTH_PATH: &str = "/healthz";

/// Malformed bodies (bad JSON, missing `links`) are rejected by the `Json`
/// extractor before the supervisor is reached.
async fn check_credibility(
    State(supervisor): State<Arc<CredibilitySupervisor>>,
    Json(request): Json<CredibilityRequest>,
) -> Json<Vec<VerdictRecord>> {
    Json(supervisor.check(&request).await)
}

async fn healthz() -> &'static str {
    "ok"
}

pub fn router(supervisor: Arc<CredibilitySupervisor>, allowed_origins: &[String]) -> Router {
    Router::new()
        .route(CHECK_PATH, post(check_credibility))
        .route(CHECK_PATH_SLASH, post(check_credibility))
        .route(HEALTH_PATH, get(healthz))
        .with_state(supervisor)
        .layer(cors::layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until `shutdown` resolves. In-flight requests are allowed to finish.
pub async fn run_server<F>(
    config: &ServiceConfig,
    supervisor: Arc<CredibilitySupervisor>,
    shutdown: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(supervisor, &config.allowed_origins);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, "credible listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
