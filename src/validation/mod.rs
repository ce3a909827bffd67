//! Structural request validation. Each resource declares per-operation rule
//! tables (see [`schemas`]); the engine here walks a JSON body against them
//! before anything reaches the database.
//!
//! Presence semantics are per field:
//! - `Truthy`: absent, null, `false`, `0` and `""` all count as missing.
//! - `Present`: only absent or null count as missing.
//! - `Optional`: type-checked only when present.

pub mod schemas;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Optional,
    Present,
    Truthy,
}

#[derive(Debug)]
pub enum FieldKind {
    String,
    Number,
    Email,
    /// A string that parses as a calendar date (RFC 3339 or YYYY-MM-DD).
    Date,
    Array(&'static FieldKind),
    Object(&'static [FieldRule]),
}

#[derive(Debug)]
pub struct FieldRule {
    pub name: &'static str,
    pub requirement: Requirement,
    pub kind: FieldKind,
}

#[derive(Debug)]
pub struct ValidationFailure {
    pub message: String,
    pub details: Vec<String>,
}

impl ValidationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Vec::new(),
        }
    }
}

/// Validate a create/full-replace body: every rule must pass.
pub fn validate_required(
    rules: &'static [FieldRule],
    body: &Value,
    message: &str,
) -> Result<(), ValidationFailure> {
    let mut details = Vec::new();
    if body.is_object() {
        check_rules(rules, body, "", &mut details);
    } else {
        details.push("body: expected object".to_string());
    }

    if details.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure {
            message: message.to_string(),
            details,
        })
    }
}

/// Validate a partial-merge body: at least one recognized field must be
/// provided (per its own presence semantics), and every provided field must
/// match its declared kind.
pub fn validate_partial(
    rules: &'static [FieldRule],
    body: &Value,
    none_message: &str,
) -> Result<(), ValidationFailure> {
    let mut provided = 0;
    let mut details = Vec::new();

    if let Some(object) = body.as_object() {
        for rule in rules {
            let value = object.get(rule.name);
            if is_provided(rule.requirement, value) {
                provided += 1;
                if let Some(v) = value {
                    check_kind(&rule.kind, v, rule.name, &mut details);
                }
            }
        }
    }

    if !details.is_empty() {
        return Err(ValidationFailure {
            message: "Invalid field format".to_string(),
            details,
        });
    }
    if provided == 0 {
        return Err(ValidationFailure::new(none_message));
    }
    Ok(())
}

/// Parse a date string the way the API accepts them: RFC 3339 or a bare
/// YYYY-MM-DD (interpreted as midnight UTC).
pub fn parse_date(candidate: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(candidate) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(candidate, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn is_provided(requirement: Requirement, value: Option<&Value>) -> bool {
    match requirement {
        Requirement::Optional | Requirement::Present => {
            matches!(value, Some(v) if !v.is_null())
        }
        Requirement::Truthy => value.is_some_and(truthy),
    }
}

/// JavaScript-style truthiness: arrays and objects always count, scalars
/// must be non-empty/non-zero/true.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn check_rules(rules: &[FieldRule], value: &Value, prefix: &str, details: &mut Vec<String>) {
    for rule in rules {
        let path = if prefix.is_empty() {
            rule.name.to_string()
        } else {
            format!("{}.{}", prefix, rule.name)
        };
        let field = value.get(rule.name);

        match rule.requirement {
            Requirement::Optional => {
                if let Some(v) = field {
                    if !v.is_null() {
                        check_kind(&rule.kind, v, &path, details);
                    }
                }
            }
            Requirement::Present | Requirement::Truthy => match field {
                Some(v) if is_provided(rule.requirement, field) => {
                    check_kind(&rule.kind, v, &path, details);
                }
                _ => details.push(format!("{}: required", path)),
            },
        }
    }
}

fn check_kind(kind: &FieldKind, value: &Value, path: &str, details: &mut Vec<String>) {
    match kind {
        FieldKind::String => {
            if !value.is_string() {
                details.push(format!("{}: expected string", path));
            }
        }
        FieldKind::Number => {
            if !value.is_number() {
                details.push(format!("{}: expected number", path));
            }
        }
        FieldKind::Email => match value.as_str() {
            Some(s) if looks_like_email(s) => {}
            _ => details.push(format!("{}: expected email address", path)),
        },
        FieldKind::Date => match value.as_str() {
            Some(s) if parse_date(s).is_some() => {}
            _ => details.push(format!("{}: expected date", path)),
        },
        FieldKind::Array(inner) => match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    check_kind(inner, item, &format!("{}[{}]", path, i), details);
                }
            }
            None => details.push(format!("{}: expected array", path)),
        },
        FieldKind::Object(rules) => {
            if value.is_object() {
                check_rules(rules, value, path, details);
            } else {
                details.push(format!("{}: expected object", path));
            }
        }
    }
}

fn looks_like_email(candidate: &str) -> bool {
    match candidate.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !candidate.contains(char::is_whitespace)
        }
        None => false,
    }
}
