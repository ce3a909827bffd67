use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mongodb::bson::{Bson, Document};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::repository::{DeleteOutcome, Repository, UpdateOutcome};
use crate::error::ApiError;
use crate::identifier::{parse_client_ref, parse_id};
use crate::middleware::auth::AuthSession;
use crate::models::Reservation;
use crate::state::AppState;
use crate::validation::schemas;

use super::{body_str, to_bson_date, truthy_str};

const COLLECTION: &str = "reservations";
const DEFAULT_LIMIT: i64 = 10;

fn repository(state: &AppState) -> Repository<Reservation> {
    Repository::new(&state.db, COLLECTION)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationListQuery {
    pub limit: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// GET /reservations?limit=&startDate=&endDate=
/// Date bounds apply inclusively to checkInDate.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ReservationListQuery>,
) -> Result<Response, ApiError> {
    let mut filter = Document::new();
    let mut range = Document::new();
    if let Some(start) = query.start_date.as_deref().filter(|s| !s.is_empty()) {
        range.insert("$gte", to_bson_date(start)?);
    }
    if let Some(end) = query.end_date.as_deref().filter(|s| !s.is_empty()) {
        range.insert("$lte", to_bson_date(end)?);
    }
    if !range.is_empty() {
        filter.insert("checkInDate", range);
    }

    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let reservations = repository(&state).find_all(filter, Some(limit)).await?;
    Ok(Json(reservations).into_response())
}

/// GET /reservations/:id
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id("reservation", &id)?;

    match repository(&state).find_by_id(id).await? {
        Some(reservation) => Ok(Json(reservation).into_response()),
        None => Err(ApiError::not_found("Reservation not found")),
    }
}

/// GET /reservations/client/:clientId - all reservations for one client
pub async fn by_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<Response, ApiError> {
    let client_id = parse_id("client", &client_id)?;

    let reservations = repository(&state)
        .find_by_field("clientId", Bson::ObjectId(client_id))
        .await?;
    Ok(Json(reservations).into_response())
}

/// POST /reservations (auth)
pub async fn create(
    _session: AuthSession,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    schemas::reservation_create(&body)?;

    let client_id = parse_client_ref(body["clientId"].as_str().unwrap_or_default())?;
    let reservation = Reservation {
        id: None,
        client_id,
        room_type: body_str(&body, "roomType"),
        check_in_date: to_bson_date(body["checkInDate"].as_str().unwrap_or_default())?,
        check_out_date: to_bson_date(body["checkOutDate"].as_str().unwrap_or_default())?,
        status: body_str(&body, "status"),
        total_price: body["totalPrice"].as_f64().unwrap_or_default(),
        payment_status: body_str(&body, "paymentStatus"),
        created_at: None,
        updated_at: None,
    };

    let id = repository(&state).insert(&reservation).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Reservation added successfully",
            "reservationId": id.to_hex()
        })),
    )
        .into_response())
}

/// PUT /reservations/:id (auth) - partial merge of supplied fields
pub async fn update(
    _session: AuthSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    let id = parse_id("reservation", &id)?;
    schemas::reservation_update(&body)?;

    let mut changes = Document::new();
    if let Some(client_id) = truthy_str(&body, "clientId") {
        changes.insert("clientId", parse_client_ref(client_id)?);
    }
    if let Some(room_type) = truthy_str(&body, "roomType") {
        changes.insert("roomType", room_type);
    }
    if let Some(check_in) = truthy_str(&body, "checkInDate") {
        changes.insert("checkInDate", to_bson_date(check_in)?);
    }
    if let Some(check_out) = truthy_str(&body, "checkOutDate") {
        changes.insert("checkOutDate", to_bson_date(check_out)?);
    }
    if let Some(status) = truthy_str(&body, "status") {
        changes.insert("status", status);
    }
    if let Some(total_price) = body.get("totalPrice").and_then(Value::as_f64) {
        changes.insert("totalPrice", total_price);
    }
    if let Some(payment_status) = truthy_str(&body, "paymentStatus") {
        changes.insert("paymentStatus", payment_status);
    }

    match repository(&state).merge_update(id, changes).await? {
        UpdateOutcome::Updated => Ok((
            StatusCode::OK,
            Json(json!({ "message": "Reservation updated successfully" })),
        )
            .into_response()),
        UpdateOutcome::NotFound => Err(ApiError::not_found("Reservation not found")),
    }
}

/// DELETE /reservations/:id (auth)
pub async fn delete(
    _session: AuthSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id("reservation", &id)?;

    match repository(&state).delete_by_id(id).await? {
        DeleteOutcome::Deleted => Ok(StatusCode::NO_CONTENT.into_response()),
        DeleteOutcome::NotFound => Err(ApiError::not_found("Reservation not found")),
    }
}
