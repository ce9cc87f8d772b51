use serde_json::{Map, Value};

use crate::error::{ThoughtError, ThoughtResult};

/// Smallest accepted value for every numbered field.
pub const MIN_THOUGHT_NUMBER: u64 = 1;

/// One submitted reasoning step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThoughtRecord {
    /// The free-form content of this step
    pub thought: String,
    /// Position of this step in the sequence (1-based)
    pub thought_number: u64,
    /// Current estimate of how many steps are needed
    pub total_thoughts: u64,
    /// Whether the caller intends to submit another step
    pub next_thought_needed: bool,
    /// Whether this step reconsiders an earlier one
    pub is_revision: bool,
    /// Which step is being reconsidered
    pub revises_thought: Option<u64>,
    /// Which step this one branches away from
    pub branch_from_thought: Option<u64>,
    /// Identifier shared by every step on the same branch
    pub branch_id: Option<String>,
    /// Informational flag; never alters control flow
    pub needs_more_thoughts: Option<bool>,
}

/// How a record is classified for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThoughtKind {
    /// A plain sequential step
    Thought,
    /// A step that revises an earlier one
    Revision,
    /// A step on an alternate branch
    Branch,
}

impl ThoughtKind {
    /// Display label for this kind
    pub fn label(&self) -> &'static str {
        match self {
            ThoughtKind::Thought => "Thought",
            ThoughtKind::Revision => "Revision",
            ThoughtKind::Branch => "Branch",
        }
    }
}

impl ThoughtRecord {
    /// Create a plain step with no revision or branch metadata
    pub fn new(
        thought: impl Into<String>,
        thought_number: u64,
        total_thoughts: u64,
        next_thought_needed: bool,
    ) -> Self {
        Self {
            thought: thought.into(),
            thought_number,
            total_thoughts,
            next_thought_needed,
            is_revision: false,
            revises_thought: None,
            branch_from_thought: None,
            branch_id: None,
            needs_more_thoughts: None,
        }
    }

    /// Mark this step as a revision of `thought_number`
    pub fn revising(mut self, thought_number: u64) -> Self {
        self.is_revision = true;
        self.revises_thought = Some(thought_number);
        self
    }

    /// Place this step on branch `branch_id`, diverging at `thought_number`
    pub fn branching(mut self, thought_number: u64, branch_id: impl Into<String>) -> Self {
        self.branch_from_thought = Some(thought_number);
        self.branch_id = Some(branch_id.into());
        self
    }

    /// Set the informational needs-more-thoughts flag
    pub fn with_needs_more_thoughts(mut self, needs_more: bool) -> Self {
        self.needs_more_thoughts = Some(needs_more);
        self
    }

    /// Classify the record. Revision wins over branch; a half-specified
    /// branch still counts as long as the origin pointer is set.
    pub fn kind(&self) -> ThoughtKind {
        if self.is_revision {
            ThoughtKind::Revision
        } else if self.branch_from_thought.is_some() {
            ThoughtKind::Branch
        } else {
            ThoughtKind::Thought
        }
    }

    /// Branch bucket this record belongs in, if it carries both pointers
    pub fn branch_key(&self) -> Option<&str> {
        match (self.branch_from_thought, self.branch_id.as_deref()) {
            (Some(_), Some(id)) => Some(id),
            _ => None,
        }
    }
}

/// Decode an untyped payload into a [`ThoughtRecord`].
///
/// Fields are checked in declaration order and the first violation is
/// reported. Unknown fields are ignored; `null` on an optional field means
/// "not set".
pub fn validate(raw: &Value) -> ThoughtResult<ThoughtRecord> {
    let fields = raw.as_object().ok_or(ThoughtError::NotAnObject {
        found: json_type_name(raw),
    })?;

    let thought = required(fields, "thought", as_string)?;
    let thought_number = required(fields, "thought_number", as_positive_integer)?;
    let total_thoughts = required(fields, "total_thoughts", as_positive_integer)?;
    let next_thought_needed = required(fields, "next_thought_needed", as_bool)?;

    let is_revision = optional(fields, "is_revision", as_bool)?.unwrap_or(false);
    let revises_thought = optional(fields, "revises_thought", as_positive_integer)?;
    let branch_from_thought = optional(fields, "branch_from_thought", as_positive_integer)?;
    let branch_id = optional(fields, "branch_id", as_string)?;
    let needs_more_thoughts = optional(fields, "needs_more_thoughts", as_bool)?;

    Ok(ThoughtRecord {
        thought,
        thought_number,
        total_thoughts,
        next_thought_needed,
        is_revision,
        revises_thought,
        branch_from_thought,
        branch_id,
        needs_more_thoughts,
    })
}

/// Reject a typed record whose numbered fields fall below
/// [`MIN_THOUGHT_NUMBER`], checking them in declaration order.
pub fn check_minimums(record: &ThoughtRecord) -> ThoughtResult<()> {
    let numbered = [
        ("thought_number", Some(record.thought_number)),
        ("total_thoughts", Some(record.total_thoughts)),
        ("revises_thought", record.revises_thought),
        ("branch_from_thought", record.branch_from_thought),
    ];

    for (field, value) in numbered {
        if let Some(n) = value.filter(|n| *n < MIN_THOUGHT_NUMBER) {
            return Err(ThoughtError::BelowMinimum {
                field,
                minimum: MIN_THOUGHT_NUMBER,
                actual: n as i64,
            });
        }
    }
    Ok(())
}

/// Raise `total_thoughts` so it never understates `thought_number`.
pub fn normalize(mut record: ThoughtRecord) -> ThoughtRecord {
    if record.thought_number > record.total_thoughts {
        record.total_thoughts = record.thought_number;
    }
    record
}

type Extractor<T> = fn(&'static str, &Value) -> ThoughtResult<T>;

fn required<T>(
    fields: &Map<String, Value>,
    field: &'static str,
    extract: Extractor<T>,
) -> ThoughtResult<T> {
    match fields.get(field) {
        None | Some(Value::Null) => Err(ThoughtError::MissingField { field }),
        Some(value) => extract(field, value),
    }
}

fn optional<T>(
    fields: &Map<String, Value>,
    field: &'static str,
    extract: Extractor<T>,
) -> ThoughtResult<Option<T>> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => extract(field, value).map(Some),
    }
}

fn as_string(field: &'static str, value: &Value) -> ThoughtResult<String> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| type_error(field, "a string", value))
}

fn as_bool(field: &'static str, value: &Value) -> ThoughtResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| type_error(field, "a boolean", value))
}

fn as_positive_integer(field: &'static str, value: &Value) -> ThoughtResult<u64> {
    if let Some(n) = value.as_u64() {
        if n < MIN_THOUGHT_NUMBER {
            return Err(ThoughtError::BelowMinimum {
                field,
                minimum: MIN_THOUGHT_NUMBER,
                actual: 0,
            });
        }
        return Ok(n);
    }

    match value.as_i64() {
        Some(n) => Err(ThoughtError::BelowMinimum {
            field,
            minimum: MIN_THOUGHT_NUMBER,
            actual: n,
        }),
        None => Err(type_error(field, "an integer", value)),
    }
}

fn type_error(field: &'static str, expected: &'static str, value: &Value) -> ThoughtError {
    ThoughtError::InvalidType {
        field,
        expected,
        found: json_type_name(value),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
