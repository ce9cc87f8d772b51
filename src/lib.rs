//! # Sequential Thinking Server
//!
//! An HTTP tool server that records a sequence of free-form reasoning steps,
//! tracks revisions and branches, and echoes back bookkeeping metadata.
//!
//! ## Features
//!
//! - **Thought Log**: Append-only history of validated thought records
//! - **Branch Tracking**: Named alternate continuations in first-seen order
//! - **Normalization**: `total_thoughts` never understates the current step
//! - **Display**: Boxed, optionally colored rendering of each recorded thought
//!
//! ## Architecture
//!
//! ```text
//! Orchestrator → HTTP (axum) → ThoughtLog (in memory)
//!                                   ↓
//!                             stdout display
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use sequential_thinking_server::{server, AppState, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let listener = tokio::net::TcpListener::bind(config.server.bind_address()).await?;
//!     let state = Arc::new(AppState::new(config));
//!     axum::serve(listener, server::router(state)).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Configuration management for the server.
pub mod config;
/// Error types and result aliases for the application.
pub mod error;
/// HTTP routing, tool definitions and shared state.
pub mod server;
/// Thought records, the thought log and its rendering.
pub mod thinking;

pub use config::Config;
pub use error::{AppError, AppResult, ThoughtError, ThoughtResult};
pub use server::{AppState, SharedState};
pub use thinking::{ErrorReport, Summary, ThoughtLog, ThoughtRecord};
