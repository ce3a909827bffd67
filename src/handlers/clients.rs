use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mongodb::bson::{doc, Document};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::repository::{DeleteOutcome, Repository, UpdateOutcome};
use crate::error::ApiError;
use crate::identifier::parse_id;
use crate::middleware::auth::AuthSession;
use crate::models::Client;
use crate::state::AppState;
use crate::validation::schemas;

const COLLECTION: &str = "clients";

fn repository(state: &AppState) -> Repository<Client> {
    Repository::new(&state.db, COLLECTION)
}

#[derive(Debug, Deserialize)]
pub struct ClientListQuery {
    pub limit: Option<i64>,
    pub name: Option<String>,
}

/// GET /clients
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ClientListQuery>,
) -> Result<Response, ApiError> {
    let mut filter = Document::new();
    if let Some(name) = query.name.filter(|n| !n.is_empty()) {
        filter.insert("name", doc! { "$regex": name, "$options": "i" });
    }

    let clients = repository(&state).find_all(filter, query.limit).await?;
    Ok(Json(clients).into_response())
}

/// GET /clients/:id
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id("client", &id)?;

    match repository(&state).find_by_id(id).await? {
        Some(client) => Ok(Json(client).into_response()),
        None => Err(ApiError::not_found("Client not found")),
    }
}

/// POST /clients (auth)
pub async fn create(
    _session: AuthSession,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    schemas::client_create(&body)?;

    let client: Client = serde_json::from_value(body)
        .map_err(|_| ApiError::bad_request("Invalid request body"))?;
    let id = repository(&state).insert(&client).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Client added successfully",
            "clientId": id.to_hex()
        })),
    )
        .into_response())
}

/// PUT /clients/:id (auth) - full replace
pub async fn update(
    _session: AuthSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    let id = parse_id("client", &id)?;
    schemas::client_update(&body)?;

    let client: Client = serde_json::from_value(body)
        .map_err(|_| ApiError::bad_request("Invalid request body"))?;

    match repository(&state).replace(id, &client).await? {
        UpdateOutcome::Updated => Ok((
            StatusCode::OK,
            Json(json!({ "message": "Client updated successfully" })),
        )
            .into_response()),
        UpdateOutcome::NotFound => Err(ApiError::not_found("Client not found")),
    }
}

/// DELETE /clients/:id (auth)
pub async fn delete(
    _session: AuthSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id("client", &id)?;

    match repository(&state).delete_by_id(id).await? {
        DeleteOutcome::Deleted => Ok(StatusCode::NO_CONTENT.into_response()),
        DeleteOutcome::NotFound => Err(ApiError::not_found("Client not found")),
    }
}
