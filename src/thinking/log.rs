use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::record::{check_minimums, normalize, validate, ThoughtRecord};
use super::sink::{NullSink, ThoughtSink};
use crate::error::{ThoughtError, ThoughtResult};

/// Bookkeeping returned after a thought is recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of the step just recorded
    pub thought_number: u64,
    /// Total after normalization
    pub total_thoughts: u64,
    /// Echo of the caller's flag
    pub next_thought_needed: bool,
    /// Every known branch identifier, in first-creation order
    #[serde(rename = "branches")]
    pub branch_ids: Vec<String>,
    /// Size of the history after this append
    pub thought_history_length: usize,
}

/// Status marker carried by every [`ErrorReport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// The call was rejected and changed nothing
    Failed,
}

/// Failure returned in place of a [`Summary`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Human-readable description of the problem
    pub error: String,
    /// Always [`ReportStatus::Failed`]
    pub status: ReportStatus,
}

impl ErrorReport {
    /// Build a failed report with the given message
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            status: ReportStatus::Failed,
        }
    }
}

impl From<ThoughtError> for ErrorReport {
    fn from(err: ThoughtError) -> Self {
        ErrorReport::failed(err.to_string())
    }
}

/// Append-only log of thoughts plus the branch index.
///
/// Every accepted record lands in `history` once; records carrying both
/// `branch_from_thought` and `branch_id` are also appended to their branch
/// bucket. Nothing is ever removed.
pub struct ThoughtLog {
    history: Vec<ThoughtRecord>,
    branches: HashMap<String, Vec<ThoughtRecord>>,
    branch_order: Vec<String>,
    sink: Box<dyn ThoughtSink>,
}

impl ThoughtLog {
    /// Create an empty log that displays nothing
    pub fn new() -> Self {
        Self::with_sink(Box::new(NullSink))
    }

    /// Create an empty log that emits every recorded thought to `sink`
    pub fn with_sink(sink: Box<dyn ThoughtSink>) -> Self {
        Self {
            history: Vec::new(),
            branches: HashMap::new(),
            branch_order: Vec::new(),
            sink,
        }
    }

    /// Validate, normalize and record a raw payload.
    ///
    /// Rejected payloads leave the log untouched and emit nothing.
    pub fn process(&mut self, raw: &Value) -> Result<Summary, ErrorReport> {
        debug!(payload = %raw, "Processing thought payload");

        validate(raw)
            .and_then(|record| self.record(record))
            .map_err(|e| {
                warn!(error = %e, "Rejected thought payload");
                e.into()
            })
    }

    /// Normalize and append a typed record, returning the bookkeeping summary.
    ///
    /// Records built by hand get the same minimum checks as decoded
    /// payloads; a rejected record changes nothing.
    pub fn record(&mut self, record: ThoughtRecord) -> ThoughtResult<Summary> {
        check_minimums(&record)?;
        Ok(self.append(normalize(record)))
    }

    fn append(&mut self, record: ThoughtRecord) -> Summary {
        if let Some(branch_id) = record.branch_key() {
            if !self.branches.contains_key(branch_id) {
                debug!(branch_id = %branch_id, "Creating branch");
                self.branch_order.push(branch_id.to_string());
            }
            self.branches
                .entry(branch_id.to_string())
                .or_default()
                .push(record.clone());
        }

        self.sink.emit(&record);

        let summary = Summary {
            thought_number: record.thought_number,
            total_thoughts: record.total_thoughts,
            next_thought_needed: record.next_thought_needed,
            branch_ids: self.branch_order.clone(),
            thought_history_length: self.history.len() + 1,
        };

        info!(
            thought_number = record.thought_number,
            total_thoughts = record.total_thoughts,
            kind = record.kind().label(),
            history_length = summary.thought_history_length,
            "Thought recorded"
        );

        self.history.push(record);
        summary
    }

    /// All recorded thoughts in submission order
    pub fn history(&self) -> &[ThoughtRecord] {
        &self.history
    }

    /// Records appended to a branch, in submission order
    pub fn branch(&self, branch_id: &str) -> Option<&[ThoughtRecord]> {
        self.branches.get(branch_id).map(Vec::as_slice)
    }

    /// Known branch identifiers in first-creation order
    pub fn branch_ids(&self) -> &[String] {
        &self.branch_order
    }

    /// Number of recorded thoughts
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl Default for ThoughtLog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ThoughtLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThoughtLog")
            .field("history", &self.history.len())
            .field("branches", &self.branch_order)
            .finish()
    }
}
