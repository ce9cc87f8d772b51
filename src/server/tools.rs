//! Tool descriptor and response envelope.
//!
//! The envelope wraps a pretty-printed JSON document inside the `text` field
//! of a single content item; callers parse the outer body and then parse
//! `text` again.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::error::ThoughtError;
use crate::thinking::{ErrorReport, Summary};

/// Name under which the tool is published and routed
pub const TOOL_NAME: &str = "sequentialthinking";

const TOOL_DESCRIPTION: &str = r#"A detailed tool for dynamic and reflective problem-solving through thoughts.
This tool helps analyze problems through a flexible thinking process that can adapt and evolve.
Each thought can build on, question, or revise previous insights as understanding deepens.

When to use this tool:
- Breaking down complex problems into steps
- Planning and design with room for revision
- Analysis that might need course correction
- Problems where the full scope might not be clear initially
- Problems that require a multi-step solution
- Tasks that need to maintain context over multiple steps
- Situations where irrelevant information needs to be filtered out

Key features:
- You can adjust total_thoughts up or down as you progress
- You can question or revise previous thoughts
- You can add more thoughts even after reaching what seemed like the end
- You can express uncertainty and explore alternative approaches
- Not every thought needs to build linearly - you can branch or backtrack
- Generates a solution hypothesis
- Verifies the hypothesis based on the Chain of Thought steps
- Repeats the process until satisfied
- Provides a correct answer

Parameters explained:
- thought: Your current thinking step, which can include:
* Regular analytical steps
* Revisions of previous thoughts
* Questions about previous decisions
* Realizations about needing more analysis
* Changes in approach
* Hypothesis generation
* Hypothesis verification
- next_thought_needed: True if you need more thinking, even if at what seemed like the end
- thought_number: Current number in sequence (can go beyond initial total if needed)
- total_thoughts: Current estimate of thoughts needed (can be adjusted up/down)
- is_revision: A boolean indicating if this thought revises previous thinking
- revises_thought: If is_revision is true, which thought number is being reconsidered
- branch_from_thought: If branching, which thought number is the branching point
- branch_id: Identifier for the current branch (if any)
- needs_more_thoughts: If reaching end but realizing more thoughts needed

You should:
1. Start with an initial estimate of needed thoughts, but be ready to adjust
2. Feel free to question or revise previous thoughts
3. Don't hesitate to add more thoughts if needed, even at the "end"
4. Express uncertainty when present
5. Mark thoughts that revise previous thinking or branch into new paths
6. Ignore information that is irrelevant to the current step
7. Generate a solution hypothesis when appropriate
8. Verify the hypothesis based on the Chain of Thought steps
9. Repeat the process until satisfied with the solution
10. Provide a single, ideally correct answer as the final output
11. Only set next_thought_needed to false when truly done and a satisfactory answer is reached"#;

/// Tool definition with JSON Schema.
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    /// Unique tool name (used in the call route).
    pub name: String,
    /// Human-readable description of the tool.
    pub description: String,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: Value,
}

/// Body of `GET /tools`.
#[derive(Debug, Serialize)]
pub struct ToolList {
    /// Every published tool.
    pub tools: Vec<Tool>,
}

/// Content item within a tool result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResultContent {
    /// The content type (always "text").
    #[serde(rename = "type")]
    pub content_type: String,
    /// The JSON-encoded payload.
    pub text: String,
}

/// Result of a tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallResult {
    /// The result content items.
    pub content: Vec<ToolResultContent>,
    /// Present and true only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl ToolResultContent {
    fn text(text: String) -> Self {
        Self {
            content_type: "text".to_string(),
            text,
        }
    }
}

impl ToolCallResult {
    /// Wrap a successful summary
    pub fn success(summary: &Summary) -> Self {
        match serde_json::to_string_pretty(summary) {
            Ok(text) => Self {
                content: vec![ToolResultContent::text(text)],
                is_error: None,
            },
            Err(e) => {
                error!(error = %e, "Failed to serialize summary");
                Self::failure(&ErrorReport::from(ThoughtError::from(e)))
            }
        }
    }

    /// Wrap a failure report
    pub fn failure(report: &ErrorReport) -> Self {
        let text = serde_json::to_string_pretty(report).unwrap_or_else(|e| {
            error!(error = %e, "Failed to serialize error report");
            fallback_report_text(&format!("Serialization failed: {}", e))
        });

        Self {
            content: vec![ToolResultContent::text(text)],
            is_error: Some(true),
        }
    }

    /// Wrap either outcome of processing a thought
    pub fn from_outcome(outcome: &Result<Summary, ErrorReport>) -> Self {
        match outcome {
            Ok(summary) => Self::success(summary),
            Err(report) => Self::failure(report),
        }
    }
}

fn fallback_report_text(message: &str) -> String {
    let report = serde_json::json!({
        "error": message,
        "status": "failed"
    });
    // `{:#}` pretty-prints a `Value` and cannot fail.
    format!("{:#}", report)
}

/// Get the sequential thinking tool definition
pub fn sequential_thinking_tool() -> Tool {
    Tool {
        name: TOOL_NAME.to_string(),
        description: TOOL_DESCRIPTION.to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "thought": {
                    "type": "string",
                    "description": "Your current thinking step"
                },
                "next_thought_needed": {
                    "type": "boolean",
                    "description": "Whether another thought step is needed"
                },
                "thought_number": {
                    "type": "integer",
                    "description": "Current thought number",
                    "minimum": 1
                },
                "total_thoughts": {
                    "type": "integer",
                    "description": "Estimated total thoughts needed",
                    "minimum": 1
                },
                "is_revision": {
                    "type": "boolean",
                    "description": "Whether this revises previous thinking"
                },
                "revises_thought": {
                    "type": "integer",
                    "description": "Which thought is being reconsidered",
                    "minimum": 1
                },
                "branch_from_thought": {
                    "type": "integer",
                    "description": "Branching point thought number",
                    "minimum": 1
                },
                "branch_id": {
                    "type": "string",
                    "description": "Branch identifier"
                },
                "needs_more_thoughts": {
                    "type": "boolean",
                    "description": "If more thoughts are needed"
                }
            },
            "required": ["thought", "next_thought_needed", "thought_number", "total_thoughts"]
        }),
    }
}

/// Every tool this server publishes
pub fn all_tools() -> Vec<Tool> {
    vec![sequential_thinking_tool()]
}
