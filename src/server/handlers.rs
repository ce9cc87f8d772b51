use axum::{
    body::Bytes,
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tracing::{info, warn};

use super::tools::{all_tools, ToolCallResult, ToolList, TOOL_NAME};
use super::SharedState;
use crate::error::ThoughtError;
use crate::thinking::ErrorReport;

/// Build the HTTP router for the tool endpoints
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/tools", get(list_tools))
        .route(&format!("/tools/{}", TOOL_NAME), post(call_sequential_thinking))
        .with_state(state)
}

/// Handle `GET /tools`
async fn list_tools() -> Json<ToolList> {
    info!("Handling tools list request");
    Json(ToolList { tools: all_tools() })
}

/// Handle `POST /tools/sequentialthinking`.
///
/// Always answers 200; failures travel inside the envelope.
async fn call_sequential_thinking(
    State(state): State<SharedState>,
    body: Bytes,
) -> Json<ToolCallResult> {
    info!(tool = %TOOL_NAME, "Handling tool call");

    let outcome = match serde_json::from_slice::<Value>(&body) {
        Ok(payload) => state.process_thought(&payload).await,
        Err(e) => {
            warn!(error = %e, "Tool call body is not valid JSON");
            Err(ErrorReport::from(ThoughtError::MalformedBody {
                message: e.to_string(),
            }))
        }
    };

    Json(ToolCallResult::from_outcome(&outcome))
}

/// Handle `GET /health`
async fn health(State(state): State<SharedState>) -> Json<Value> {
    let history_length = state.log.lock().await.len();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "thought_history_length": history_length,
    }))
}
