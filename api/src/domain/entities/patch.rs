//! Patch documents for partial point-of-interest updates
//!
//! A closed subset of JSON Patch: `add`, `replace`, `remove` and `test`
//! against the `/name` and `/description` fields. Everything else is a
//! validation error.

use serde::Deserialize;
use serde_json::Value;

use super::PointOfInterestForUpdate;
use crate::error::DomainError;

/// A single `{op, path, value}` instruction as sent on the wire
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatchOperation {
    #[serde(alias = "operation")]
    pub op: String,
    pub path: String,
    #[serde(default)]
    pub value: Value,
}

#[cfg(test)]
impl PatchOperation {
    pub fn replace(path: &str, value: impl Into<Value>) -> Self {
        Self {
            op: "replace".to_string(),
            path: path.to_string(),
            value: value.into(),
        }
    }
}

/// Ordered list of patch operations
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PatchDocument(pub Vec<PatchOperation>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatchOp {
    Add,
    Remove,
    Replace,
    Test,
}

impl std::str::FromStr for PatchOp {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(PatchOp::Add),
            "remove" => Ok(PatchOp::Remove),
            "replace" => Ok(PatchOp::Replace),
            "test" => Ok(PatchOp::Test),
            _ => Err(DomainError::Validation(format!(
                "The operation '{}' is not supported.",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatchField {
    Name,
    Description,
}

impl std::str::FromStr for PatchField {
    type Err = DomainError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let segment = path.strip_prefix('/').unwrap_or(path);
        match segment.to_lowercase().as_str() {
            "name" => Ok(PatchField::Name),
            "description" => Ok(PatchField::Description),
            _ => Err(DomainError::Validation(format!(
                "The target location specified by path segment '{}' was not found.",
                segment
            ))),
        }
    }
}

impl PatchDocument {
    #[cfg(test)]
    pub fn new(operations: Vec<PatchOperation>) -> Self {
        Self(operations)
    }

    /// Apply every operation in order. On any failure `target` is left as it was.
    pub fn apply_to(&self, target: &mut PointOfInterestForUpdate) -> Result<(), DomainError> {
        let mut staged = target.clone();
        for operation in &self.0 {
            apply_operation(operation, &mut staged)?;
        }
        *target = staged;
        Ok(())
    }
}

fn apply_operation(
    operation: &PatchOperation,
    staged: &mut PointOfInterestForUpdate,
) -> Result<(), DomainError> {
    let op: PatchOp = operation.op.parse()?;
    let field: PatchField = operation.path.parse()?;

    match (op, field) {
        (PatchOp::Add | PatchOp::Replace, PatchField::Name) => {
            staged.name = string_value(&operation.value, &operation.path)?.unwrap_or_default();
        }
        (PatchOp::Add | PatchOp::Replace, PatchField::Description) => {
            staged.description = string_value(&operation.value, &operation.path)?;
        }
        (PatchOp::Remove, PatchField::Name) => staged.name.clear(),
        (PatchOp::Remove, PatchField::Description) => staged.description = None,
        (PatchOp::Test, field) => {
            let expected = string_value(&operation.value, &operation.path)?;
            let current = match field {
                PatchField::Name => Some(staged.name.clone()),
                PatchField::Description => staged.description.clone(),
            };
            if current != expected {
                return Err(DomainError::Validation(format!(
                    "The current value at '{}' does not match the test value.",
                    operation.path
                )));
            }
        }
    }

    Ok(())
}

fn string_value(value: &Value, path: &str) -> Result<Option<String>, DomainError> {
    match value {
        Value::String(s) => Ok(Some(s.clone())),
        Value::Null => Ok(None),
        other => Err(DomainError::Validation(format!(
            "The value '{}' is invalid for target location '{}'.",
            other, path
        ))),
    }
}
