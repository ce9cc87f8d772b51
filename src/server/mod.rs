//! Server module for the HTTP tool surface.
//!
//! This module provides:
//! - The axum router for listing and calling the tool
//! - Tool definitions and the response envelope
//! - Shared application state management

mod handlers;
mod tools;

pub use handlers::*;
pub use tools::*;

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::config::Config;
use crate::error::AppResult;
use crate::thinking::{sink_from_config, ErrorReport, Summary, ThoughtLog};

/// Application state shared across handlers.
///
/// The thought log sits behind a single lock so concurrent requests append
/// in one total order.
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// The process-wide thought log.
    pub log: Mutex<ThoughtLog>,
}

impl AppState {
    /// Create new application state with a log wired to the configured display
    pub fn new(config: Config) -> Self {
        let log = ThoughtLog::with_sink(sink_from_config(&config.display));
        Self::with_log(config, log)
    }

    /// Create application state around an existing log
    pub fn with_log(config: Config, log: ThoughtLog) -> Self {
        info!(
            display_enabled = config.display.enabled,
            display_color = config.display.color,
            "AppState initializing"
        );

        Self {
            config,
            log: Mutex::new(log),
        }
    }

    /// Run a raw payload through the log under the lock
    pub async fn process_thought(&self, payload: &Value) -> Result<Summary, ErrorReport> {
        self.log.lock().await.process(payload)
    }
}

/// Shared application state handle
pub type SharedState = Arc<AppState>;

/// Bind the configured address and serve requests until `shutdown` resolves
pub async fn run<F>(config: Config, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        error!(address = %address, error = %e, "Failed to bind listener");
        e
    })?;
    info!(address = %address, "Listener bound");

    let state = Arc::new(AppState::new(config));

    info!("Server ready, waiting for requests...");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
