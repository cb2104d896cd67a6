//! # Patch Engine
//!
//! A closed-world JSON Patch interpreter over the two mutable fields of a
//! point of interest. Paths address `/name` and `/description` only (matched
//! case-insensitively); anything else is a structural failure.
//!
//! Operations are applied left to right to a private copy of the snapshot. The
//! caller's snapshot is never touched, and the result is not validated here:
//! the [`Catalog`](crate::catalog::Catalog) re-runs the validation policy on it.
//!
//! A missing `value` is read as JSON `null`, which stands for the field's empty
//! value (an empty name, an absent description).

use crate::model::PointOfInterestDraft;
use crate::validation::{Field, Violation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The six RFC 6902 operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

/// One entry of a JSON Patch document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOp {
    pub op: OpKind,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default)]
    pub value: Value,
}

impl PatchOp {
    pub fn add(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_value(OpKind::Add, path, value)
    }

    pub fn replace(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_value(OpKind::Replace, path, value)
    }

    pub fn test(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_value(OpKind::Test, path, value)
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self::with_value(OpKind::Remove, path, Value::Null)
    }

    pub fn copy(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_from(OpKind::Copy, from, path)
    }

    pub fn move_to(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_from(OpKind::Move, from, path)
    }

    fn with_value(op: OpKind, path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            op,
            path: path.into(),
            from: None,
            value: value.into(),
        }
    }

    fn with_from(op: OpKind, from: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            op,
            path: path.into(),
            from: Some(from.into()),
            value: Value::Null,
        }
    }
}

/// Why a patch document could not be applied.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PatchError {
    #[error("The target location specified by path segment '{0}' was not found.")]
    UnknownPath(String),

    #[error("The '{0:?}' operation requires a 'from' location.")]
    MissingFrom(OpKind),

    #[error("The value '{value}' is invalid for target location '{path}'.")]
    InvalidValue { path: String, value: Value },

    #[error("The current value at '{path}' is not equal to the test value.")]
    TestFailed { path: String },
}

impl PatchError {
    /// Expresses the failure as a violation, the way the catalog reports it.
    pub fn into_violation(self) -> Violation {
        Violation::new("Patch", self.to_string())
    }
}

/// Applies `ops` in order to a copy of `snapshot`.
///
/// Returns the patched copy, or the first failure. No partial result escapes.
pub fn apply_patch(
    snapshot: &PointOfInterestDraft,
    ops: &[PatchOp],
) -> Result<PointOfInterestDraft, PatchError> {
    let mut doc = snapshot.clone();
    for op in ops {
        apply_op(&mut doc, op)?;
    }
    Ok(doc)
}

fn apply_op(doc: &mut PointOfInterestDraft, op: &PatchOp) -> Result<(), PatchError> {
    let target = resolve(&op.path)?;
    match op.op {
        OpKind::Add | OpKind::Replace => {
            let value = as_text(&op.path, &op.value)?;
            write(doc, target, value);
        }
        OpKind::Remove => write(doc, target, None),
        OpKind::Test => {
            // Empty and absent compare equal, the same way `read` reports them.
            let expected = as_text(&op.path, &op.value)?.filter(|v| !v.is_empty());
            if read(doc, target) != expected {
                return Err(PatchError::TestFailed {
                    path: op.path.clone(),
                });
            }
        }
        OpKind::Copy | OpKind::Move => {
            let from = op.from.as_deref().ok_or(PatchError::MissingFrom(op.op))?;
            let source = resolve(from)?;
            let value = read(doc, source);
            if op.op == OpKind::Move && source != target {
                write(doc, source, None);
            }
            write(doc, target, value);
        }
    }
    Ok(())
}

fn resolve(path: &str) -> Result<Field, PatchError> {
    let segment = path
        .strip_prefix('/')
        .ok_or_else(|| PatchError::UnknownPath(path.to_string()))?;
    if segment.eq_ignore_ascii_case("name") {
        Ok(Field::Name)
    } else if segment.eq_ignore_ascii_case("description") {
        Ok(Field::Description)
    } else {
        Err(PatchError::UnknownPath(segment.to_string()))
    }
}

fn as_text(path: &str, value: &Value) -> Result<Option<String>, PatchError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(PatchError::InvalidValue {
            path: path.to_string(),
            value: other.clone(),
        }),
    }
}

/// Reads a field, mapping empty to `None` so that both fields compare alike.
fn read(doc: &PointOfInterestDraft, field: Field) -> Option<String> {
    let value = match field {
        Field::Name => Some(doc.name.as_str()),
        Field::Description => doc.description.as_deref(),
    };
    value.filter(|v| !v.is_empty()).map(str::to_owned)
}

fn write(doc: &mut PointOfInterestDraft, field: Field, value: Option<String>) {
    match field {
        Field::Name => doc.name = value.unwrap_or_default(),
        Field::Description => doc.description = value,
    }
}
