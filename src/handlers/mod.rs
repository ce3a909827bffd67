pub mod activities;
pub mod auth;
pub mod clients;
pub mod reservations;
pub mod restaurants;

use mongodb::bson::DateTime;
use serde_json::Value;

use crate::error::ApiError;
use crate::validation::parse_date;

/// Convert a validated date string into a bson timestamp.
pub(crate) fn to_bson_date(candidate: &str) -> Result<DateTime, ApiError> {
    parse_date(candidate)
        .map(|dt| DateTime::from_millis(dt.timestamp_millis()))
        .ok_or_else(|| ApiError::bad_request("Invalid date format"))
}

/// A body string field that has already passed validation.
pub(crate) fn body_str(body: &Value, key: &str) -> String {
    body.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// A string field, counted only when non-empty (truthy semantics).
pub(crate) fn truthy_str<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
