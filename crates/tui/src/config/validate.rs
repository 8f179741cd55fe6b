use serde_json::{Map, Number, Value};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use super::schema::{FieldKind, FieldRule, SESSION_CONFIG_RULES};

const HYPHENATED_UUID_LEN: usize = 36;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dotted field path, e.g. `dimensions.height` or `sessionContext.cookies[0]`.
    /// Empty for the root object.
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    fn type_mismatch(path: &str, expected: &str, received: &Value) -> Self {
        Self::new(
            path,
            format!("Expected {expected}, received {}", value_kind(received)),
        )
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Rejection produced by [`validate_session_config`]. Always holds at least one issue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_issues(.issues))]
pub struct ValidationError {
    issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// True when any issue sits at `field` or below it.
    #[cfg(test)]
    pub fn mentions(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| {
            issue.path == field
                || issue
                    .path
                    .strip_prefix(field)
                    .is_some_and(|rest| rest.starts_with('.') || rest.starts_with('['))
        })
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Checks `input` against the session config shape and returns only the recognized
/// fields, unchanged and in declaration order. Unknown fields are dropped.
pub fn validate_session_config(input: &Value) -> Result<Map<String, Value>, ValidationError> {
    let mut issues = Vec::new();
    let normalized = check_object(input, SESSION_CONFIG_RULES, "", &mut issues);
    match normalized {
        Some(map) if issues.is_empty() => Ok(map),
        _ => Err(ValidationError { issues }),
    }
}

fn check_object(
    value: &Value,
    rules: &[FieldRule],
    path: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<Map<String, Value>> {
    let Some(fields) = value.as_object() else {
        issues.push(ValidationIssue::type_mismatch(path, "object", value));
        return None;
    };
    let mut out = Map::new();
    for rule in rules {
        let field_path = child_path(path, rule.name);
        match fields.get(rule.name) {
            None if rule.required => issues.push(ValidationIssue::new(field_path, "Required")),
            None => {}
            Some(field) => {
                if let Some(checked) = check_field(field, rule.kind, &field_path, issues) {
                    out.insert(rule.name.to_string(), checked);
                }
            }
        }
    }
    Some(out)
}

fn check_field(
    value: &Value,
    kind: FieldKind,
    path: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<Value> {
    let accepted = match (kind, value) {
        (FieldKind::String, Value::String(_)) | (FieldKind::Boolean, Value::Bool(_)) => true,
        (FieldKind::Uuid, Value::String(text)) => {
            if !is_hyphenated_uuid(text) {
                issues.push(ValidationIssue::new(path, "Invalid uuid"));
                return None;
            }
            true
        }
        (FieldKind::Integer, Value::Number(number)) => {
            if !is_integral(number) {
                issues.push(ValidationIssue::new(
                    path,
                    "Expected integer, received float",
                ));
                return None;
            }
            true
        }
        (FieldKind::Records, Value::Array(items)) => {
            let before = issues.len();
            for (index, item) in items.iter().enumerate() {
                if !item.is_object() {
                    issues.push(ValidationIssue::type_mismatch(
                        &format!("{path}[{index}]"),
                        "object",
                        item,
                    ));
                }
            }
            issues.len() == before
        }
        (FieldKind::Object(rules), Value::Object(_)) => {
            return check_object(value, rules, path, issues).map(Value::Object);
        }
        _ => {
            issues.push(ValidationIssue::type_mismatch(path, kind.expected(), value));
            return None;
        }
    };
    accepted.then(|| value.clone())
}

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

fn is_hyphenated_uuid(text: &str) -> bool {
    // Uuid::try_parse also takes simple, braced and urn forms; only the 36-char form is hyphenated.
    text.len() == HYPHENATED_UUID_LEN && Uuid::try_parse(text).is_ok()
}

fn is_integral(number: &Number) -> bool {
    if number.is_i64() || number.is_u64() {
        return true;
    }
    number
        .as_f64()
        .is_some_and(|value| value.is_finite() && value.fract() == 0.0)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
