use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{extract::State, Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{activities, auth, clients, reservations, restaurants};
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(auth::root))
        .route("/health", get(health))
        // Identity provider routes
        .route("/login", get(auth::login))
        .route("/logout", get(auth::logout))
        .route("/auth/github", get(auth::login))
        .route("/auth/github/callback", get(auth::callback))
        // Resource routes; mutating handlers carry the access gate
        .merge(client_routes())
        .merge(activity_routes())
        .merge(reservation_routes())
        .merge(restaurant_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(clients::list).post(clients::create))
        .route(
            "/clients/:id",
            get(clients::get_one)
                .put(clients::update)
                .delete(clients::delete),
        )
}

fn activity_routes() -> Router<AppState> {
    Router::new()
        .route("/activities", get(activities::list).post(activities::create))
        .route(
            "/activities/:id",
            get(activities::get_one)
                .put(activities::update)
                .delete(activities::delete),
        )
}

fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reservations",
            get(reservations::list).post(reservations::create),
        )
        .route(
            "/reservations/:id",
            get(reservations::get_one)
                .put(reservations::update)
                .delete(reservations::delete),
        )
        .route("/reservations/client/:clientId", get(reservations::by_client))
}

fn restaurant_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/restaurants",
            get(restaurants::list).post(restaurants::create),
        )
        .route(
            "/restaurants/:id",
            get(restaurants::get_one)
                .put(restaurants::update)
                .delete(restaurants::delete),
        )
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.db.ping().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
