//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the method-dispatched provider route
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Bind server to listener and serve until shutdown
//! - Hand settings to handlers via shared application state

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::atlas::AtlasClient;
use crate::config::Settings;
use crate::http::error::ApiError;
use crate::http::handlers;

/// Maximum accepted request body size in bytes.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Header carrying the per-request correlation id.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Build a fresh Atlas client for a single call.
    pub fn atlas_client(&self) -> Result<AtlasClient, ApiError> {
        let timeout = Duration::from_secs(self.settings.timeouts.upstream_secs);
        AtlasClient::new(&self.settings.atlas, timeout).map_err(|e| {
            tracing::error!(error = %e, "Atlas client construction failed");
            ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "client_setup",
                e.to_string(),
            )
        })
    }
}

/// Request ID maker (UUID v4).
#[derive(Clone, Copy, Default)]
struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// HTTP server for the provider function.
pub struct HttpServer {
    router: Router,
    settings: Arc<Settings>,
}

impl HttpServer {
    /// Create a new HTTP server with the given settings.
    pub fn new(settings: Settings) -> Self {
        let settings = Arc::new(settings);
        let state = AppState {
            settings: settings.clone(),
        };

        let router = Self::build_router(&settings, state);
        Self { router, settings }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Dispatch is by method on the single route `/`; anything other than
    /// GET/POST/PUT/DELETE gets a 405 with an Allow header.
    fn build_router(settings: &Settings, state: AppState) -> Router {
        let dispatch = get(handlers::get_project)
            .post(handlers::create_project)
            .put(handlers::create_project)
            .delete(handlers::delete_project);

        Router::new()
            .route("/", dispatch)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                settings.timeouts.request_secs,
            )))
            .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
