//! # Bookboard API
//!
//! The API crate exposes the reservation board over HTTP for the rendering
//! collaborators: the location table, the booked-only table, the header
//! counter and the add-location form.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into store operations
//! - **Middleware**: Map board errors to HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! Requests are served one store operation at a time: the store sits behind
//! a single mutex, so each mutation and its write finish before the next
//! request touches the board. Mutations run on the blocking pool because the
//! storage adapters do synchronous I/O.

/// Configuration module for API settings
pub mod config;
/// Request handlers that call into the reservation store
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{http::HeaderValue, Router};
use bookboard_core::{persistence::KeyValueStore, store::ReservationStore};
use eyre::{Result, WrapErr};
use tokio::{net::TcpListener, sync::Mutex};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// The store as the server holds it: any storage adapter behind a box.
pub type BoardStore = ReservationStore<Box<dyn KeyValueStore + Send>>;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// The reservation board; locked for the duration of each operation
    pub store: Mutex<BoardStore>,
}

impl ApiState {
    pub fn new(store: BoardStore) -> Arc<Self> {
        Arc::new(Self {
            store: Mutex::new(store),
        })
    }
}

/// Builds the application router with all routes and layers applied.
pub fn build_router(state: Arc<ApiState>, config: &config::ApiConfig) -> Result<Router> {
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Board endpoints
        .merge(routes::board::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .wrap_err_with(|| format!("Invalid CORS origin: {origin}"))
            })
            .collect::<Result<Vec<_>>>()?;

        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    // Request timeout and tracing
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    Ok(app)
}

/// Installs the global tracing subscriber at `level`.
///
/// Call once, before the store is initialized, so load diagnostics are kept.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Starts the API server with the provided configuration and store
pub async fn start_server(config: config::ApiConfig, store: BoardStore) -> Result<()> {
    let summary = store.summary();
    info!(destinations = summary.destinations, "Reservation board ready");

    let app = build_router(ApiState::new(store), &config)?;

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
