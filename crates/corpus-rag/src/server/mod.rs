//! HTTP server for the query service

pub mod routes;
pub mod state;

use axum::Router;
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Settings;
use crate::error::Result;
use state::AppState;

/// Query service HTTP server
pub struct QueryServer {
    settings: Settings,
    state: AppState,
}

impl QueryServer {
    /// Create a new server with the real backend clients
    pub fn new(settings: Settings) -> Result<Self> {
        let state = AppState::new(settings.clone())?;
        Ok(Self { settings, state })
    }

    /// Start the server
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.settings.server.host, self.settings.server.port)
            .parse()
            .map_err(|e| crate::error::Error::config(format!("Invalid address: {e}")))?;

        let enable_cors = self.settings.server.enable_cors;
        let router = build_router(self.state, enable_cors);

        tracing::info!("Starting query server on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| crate::error::Error::config(format!("Failed to bind: {e}")))?;

        axum::serve(listener, router)
            .await
            .map_err(|e| crate::error::Error::Internal(format!("Server error: {e}")))?;

        Ok(())
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.settings.server.host, self.settings.server.port)
    }
}

/// Build the router with all routes and middleware
pub fn build_router(state: AppState, enable_cors: bool) -> Router {
    let mut router = routes::api_routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router = router.layer(cors);
    }

    router
}
