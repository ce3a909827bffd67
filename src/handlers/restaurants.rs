use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mongodb::bson::{to_bson, Document};
use serde_json::{json, Value};

use crate::database::repository::{DeleteOutcome, Repository, UpdateOutcome};
use crate::error::ApiError;
use crate::identifier::parse_id;
use crate::middleware::auth::AuthSession;
use crate::models::{MenuItem, Restaurant, TableReservation};
use crate::state::AppState;
use crate::validation::schemas;

use super::{body_str, to_bson_date, truthy_str};

const COLLECTION: &str = "restaurants";

fn repository(state: &AppState) -> Repository<Restaurant> {
    Repository::new(&state.db, COLLECTION)
}

/// GET /restaurants
pub async fn list(State(state): State<AppState>) -> Result<Response, ApiError> {
    let restaurants = repository(&state).find_all(Document::new(), None).await?;
    Ok(Json(restaurants).into_response())
}

/// GET /restaurants/:id
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id("restaurant", &id)?;

    match repository(&state).find_by_id(id).await? {
        Some(restaurant) => Ok(Json(restaurant).into_response()),
        None => Err(ApiError::not_found("Restaurant not found")),
    }
}

/// POST /restaurants (auth)
pub async fn create(
    _session: AuthSession,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    schemas::restaurant_create(&body)?;

    let restaurant = Restaurant {
        id: None,
        restaurant_name: body_str(&body, "restaurantName"),
        cuisine_type: body_str(&body, "cuisineType"),
        menu: menu_items(&body["menu"]),
        reservations: table_reservations(&body["reservations"])?,
        location: body_str(&body, "location"),
        created_at: None,
        updated_at: None,
    };

    let id = repository(&state).insert(&restaurant).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Restaurant added successfully",
            "restaurantId": id.to_hex()
        })),
    )
        .into_response())
}

/// PUT /restaurants/:id (auth) - partial merge of supplied fields
pub async fn update(
    _session: AuthSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    let id = parse_id("restaurant", &id)?;
    schemas::restaurant_update(&body)?;

    let mut changes = Document::new();
    if let Some(name) = truthy_str(&body, "restaurantName") {
        changes.insert("restaurantName", name);
    }
    if let Some(cuisine) = truthy_str(&body, "cuisineType") {
        changes.insert("cuisineType", cuisine);
    }
    if body["menu"].is_array() {
        let menu = menu_items(&body["menu"]);
        changes.insert("menu", to_bson(&menu).map_err(crate::database::DbError::from)?);
    }
    if body["reservations"].is_array() {
        let reservations = table_reservations(&body["reservations"])?;
        changes.insert(
            "reservations",
            to_bson(&reservations).map_err(crate::database::DbError::from)?,
        );
    }
    if let Some(location) = truthy_str(&body, "location") {
        changes.insert("location", location);
    }

    match repository(&state).merge_update(id, changes).await? {
        UpdateOutcome::Updated => Ok((
            StatusCode::OK,
            Json(json!({ "message": "Restaurant updated successfully" })),
        )
            .into_response()),
        UpdateOutcome::NotFound => Err(ApiError::not_found("Restaurant not found")),
    }
}

/// DELETE /restaurants/:id (auth)
pub async fn delete(
    _session: AuthSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id("restaurant", &id)?;

    match repository(&state).delete_by_id(id).await? {
        DeleteOutcome::Deleted => Ok(StatusCode::NO_CONTENT.into_response()),
        DeleteOutcome::NotFound => Err(ApiError::not_found("Restaurant not found")),
    }
}

fn menu_items(value: &Value) -> Vec<MenuItem> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|item| MenuItem {
                    item_name: body_str(item, "itemName"),
                    price: item["price"].as_f64().unwrap_or_default(),
                    dietary_info: item["dietaryInfo"]
                        .as_array()
                        .map(|entries| {
                            entries
                                .iter()
                                .filter_map(|e| e.as_str().map(str::to_string))
                                .collect()
                        })
                        .unwrap_or_default(),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn table_reservations(value: &Value) -> Result<Vec<TableReservation>, ApiError> {
    let Some(items) = value.as_array() else {
        return Ok(Vec::new());
    };
    items
        .iter()
        .map(|item| {
            Ok(TableReservation {
                reservation_date: to_bson_date(item["reservationDate"].as_str().unwrap_or_default())?,
                num_of_guests: item["numOfGuests"].as_f64().unwrap_or_default(),
                status: body_str(item, "status"),
            })
        })
        .collect()
}
