use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mongodb::bson::Document;
use serde_json::{json, Value};

use crate::database::repository::{DeleteOutcome, Repository, UpdateOutcome};
use crate::error::ApiError;
use crate::identifier::parse_id;
use crate::middleware::auth::AuthSession;
use crate::models::Activity;
use crate::state::AppState;
use crate::validation::schemas;

const COLLECTION: &str = "activities";

fn repository(state: &AppState) -> Repository<Activity> {
    Repository::new(&state.db, COLLECTION)
}

/// GET /activities
pub async fn list(State(state): State<AppState>) -> Result<Response, ApiError> {
    let activities = repository(&state).find_all(Document::new(), None).await?;
    Ok(Json(activities).into_response())
}

/// GET /activities/:id
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id("activity", &id)?;

    match repository(&state).find_by_id(id).await? {
        Some(activity) => Ok(Json(activity).into_response()),
        None => Err(ApiError::not_found("Activity not found")),
    }
}

/// POST /activities (auth)
pub async fn create(
    _session: AuthSession,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    schemas::activity_create(&body)?;

    let activity: Activity = serde_json::from_value(body)
        .map_err(|_| ApiError::bad_request("Invalid request body"))?;
    let id = repository(&state).insert(&activity).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Activity added successfully",
            "activityId": id.to_hex()
        })),
    )
        .into_response())
}

/// PUT /activities/:id (auth) - full replace
pub async fn update(
    _session: AuthSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    let id = parse_id("activity", &id)?;
    schemas::activity_update(&body)?;

    let activity: Activity = serde_json::from_value(body)
        .map_err(|_| ApiError::bad_request("Invalid request body"))?;

    match repository(&state).replace(id, &activity).await? {
        UpdateOutcome::Updated => Ok((
            StatusCode::OK,
            Json(json!({ "message": "Activity updated successfully" })),
        )
            .into_response()),
        UpdateOutcome::NotFound => Err(ApiError::not_found("Activity not found")),
    }
}

/// DELETE /activities/:id (auth)
pub async fn delete(
    _session: AuthSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id("activity", &id)?;

    match repository(&state).delete_by_id(id).await? {
        DeleteOutcome::Deleted => Ok(StatusCode::NO_CONTENT.into_response()),
        DeleteOutcome::NotFound => Err(ApiError::not_found("Activity not found")),
    }
}
