//! Identifier codec: path and body values arrive as opaque strings and must
//! parse as MongoDB ObjectIds (24 hex chars) before any database call.

use mongodb::bson::oid::ObjectId;

use crate::error::ApiError;

/// Parse a path id for the named resource. The label appears verbatim in the
/// error message, e.g. `parse_id("activity", ..)` yields
/// "Invalid activity ID format".
pub fn parse_id(label: &str, candidate: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(candidate)
        .map_err(|_| ApiError::bad_request(format!("Invalid {} ID format", label)))
}

/// Parse a `clientId` reference supplied in a reservation body.
pub fn parse_client_ref(candidate: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(candidate).map_err(|_| ApiError::bad_request("Invalid clientId format"))
}
