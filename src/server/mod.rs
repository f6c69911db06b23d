//! HTTP server for slot checks
//!
//! # Endpoints
//!
//! ```text
//! GET  /                       - HTML form
//! GET  /status                 - liveness payload
//! GET  /check?url=&weekdays=   - run a slot check, returns the summary
//! GET  /tools                  - tool descriptors
//! POST /tools/check_camp_slot  - tool-style slot check
//! ```
//!
//! Each request runs its own check with its own browser; nothing is pooled.

pub mod api;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{Config, ServerConfig};
use crate::crawler::SlotChecker;
use crate::error::{Error, Result};

pub use api::{create_router, parse_weekdays, CHECK_TOOL};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<SlotChecker>,
}

/// Slot checking HTTP server
pub struct SlotServer {
    config: ServerConfig,
    state: AppState,
}

impl SlotServer {
    /// Create a server backed by Chrome
    pub fn new(config: &Config) -> Result<Self> {
        config
            .validate()
            .map_err(|e| Error::config(format!("{e:#}")))?;

        Ok(Self::with_checker(
            config.server.clone(),
            SlotChecker::with_chrome(config),
        ))
    }

    /// Create a server around an existing checker
    pub fn with_checker(config: ServerConfig, checker: SlotChecker) -> Self {
        Self {
            config,
            state: AppState {
                checker: Arc::new(checker),
            },
        }
    }

    /// Build the router with all routes and configured layers
    pub fn build_router(&self) -> Router {
        let mut router = create_router(self.state.clone());

        if self.config.enable_cors {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        if self.config.enable_request_logging {
            router = router.layer(TraceLayer::new_for_http());
        }

        router
    }

    /// Serve until `shutdown_signal` resolves
    pub async fn start_with_shutdown(
        &self,
        shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        let addr = self.config.bind_address()?;
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::with_source(format!("Failed to bind to {addr}"), e))?;

        tracing::info!(%addr, "Camp Slot Watcher listening");

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Get server info
    pub fn info(&self) -> ServerInfo {
        ServerInfo {
            bind_address: self.config.bind_address().ok(),
            max_attempts: self.state.checker.policy().max_attempts,
            retry_delay_secs: self.state.checker.policy().delay.as_secs(),
            cors_enabled: self.config.enable_cors,
            request_logging_enabled: self.config.enable_request_logging,
        }
    }
}

/// Server information
#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub bind_address: Option<SocketAddr>,
    pub max_attempts: u32,
    pub retry_delay_secs: u64,
    pub cors_enabled: bool,
    pub request_logging_enabled: bool,
}

impl ServerInfo {
    /// Format as display string
    pub fn display(&self) -> String {
        format!(
            "Camp Slot Watcher\n\
             {:-<40}\n\
             Bind Address: {}\n\
             Attempts per check: {}\n\
             Retry delay: {}s\n\
             CORS: {}\n\
             Request Logging: {}",
            "",
            self.bind_address
                .map(|a| a.to_string())
                .unwrap_or_else(|| "invalid".to_string()),
            self.max_attempts,
            self.retry_delay_secs,
            if self.cors_enabled { "enabled" } else { "disabled" },
            if self.request_logging_enabled { "enabled" } else { "disabled" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = SlotServer::new(&Config::default());
        assert!(server.is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.retry.retries = 0;
        assert!(matches!(SlotServer::new(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_server_info() {
        let server = SlotServer::new(&Config::default()).unwrap();
        let info = server.info();

        assert_eq!(info.max_attempts, 3);
        assert_eq!(info.retry_delay_secs, 5);
        assert!(info.cors_enabled);
        assert_eq!(info.bind_address.unwrap().port(), 8080);
        assert!(info.display().contains("Attempts per check: 3"));
    }
}
