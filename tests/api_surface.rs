//! In-process HTTP surface tests. The router is driven with `oneshot` so no
//! port is bound, and every request here is rejected by the access gate, id
//! codec, or body validation before any database operation runs, so no
//! mongod instance is needed.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use resort_api::auth::github::GitHubProvider;
use resort_api::auth::session::{LoginStates, SessionStore};
use resort_api::auth::Identity;
use resort_api::config::{DatabaseConfig, GitHubConfig};
use resort_api::database::connection::DbHandle;
use resort_api::routes;
use resort_api::state::AppState;

async fn test_state() -> AppState {
    let db_config = DatabaseConfig {
        uri: "mongodb://localhost:27017".to_string(),
        database: "resort_test".to_string(),
        server_selection_timeout_secs: 1,
        connect_timeout_secs: 1,
    };
    // The driver connects lazily; configuring a handle never touches the
    // network.
    let db = DbHandle::connect(&db_config)
        .await
        .expect("client options should parse");

    let github = GitHubConfig {
        client_id: "test-client".to_string(),
        client_secret: "test-secret".to_string(),
        callback_url: "http://localhost:3000/auth/github/callback".to_string(),
    };

    AppState {
        db,
        sessions: SessionStore::new(),
        login_states: LoginStates::new(),
        identity: Arc::new(GitHubProvider::new(&github)),
    }
}

async fn test_app() -> Router {
    routes::app(test_state().await)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, "Bearer test-token")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_reports_logged_out_without_a_session() {
    let response = test_app().await.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Logged Out");
}

#[tokio::test]
async fn root_reports_identity_with_a_session_cookie() {
    let state = test_state().await;
    let sid = state
        .sessions
        .create(Identity {
            id: "42".into(),
            display_name: "Octocat".into(),
        })
        .await;
    let app = routes::app(state);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header(header::COOKIE, format!("sid={}", sid))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Logged in as Octocat");
}

#[tokio::test]
async fn login_redirects_to_the_identity_provider() {
    let response = test_app().await.oneshot(get("/login")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert!(location.starts_with("https://github.com/login/oauth/authorize"));
    assert!(location.contains("client_id=test-client"));
}

#[tokio::test]
async fn callback_without_code_is_a_bad_request() {
    let response = test_app()
        .await
        .oneshot(get("/auth/github/callback"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Missing authorization code");
}

#[tokio::test]
async fn callback_rejects_a_state_that_was_never_issued() {
    let response = test_app()
        .await
        .oneshot(get("/auth/github/callback?code=abc&state=never-issued"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Invalid state parameter");
}

#[tokio::test]
async fn login_redirect_carries_an_issued_state() {
    let state = test_state().await;
    let app = routes::app(state.clone());

    let response = app.oneshot(get("/login")).await.unwrap();
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    let issued = location
        .split("state=")
        .nth(1)
        .and_then(|rest| rest.split('&').next())
        .expect("redirect should carry a state parameter");

    assert!(state.login_states.consume(issued).await);
}

#[tokio::test]
async fn malformed_resource_id_is_rejected_before_lookup() {
    let response = test_app()
        .await
        .oneshot(get("/activities/not-a-valid-id"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Invalid activity ID format");
}

#[tokio::test]
async fn each_resource_reports_its_own_id_label() {
    let app = test_app().await;

    for (uri, message) in [
        ("/clients/xyz", "Invalid client ID format"),
        ("/reservations/xyz", "Invalid reservation ID format"),
        ("/restaurants/xyz", "Invalid restaurant ID format"),
        ("/reservations/client/xyz", "Invalid client ID format"),
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body = response_json(response).await;
        assert_eq!(body["message"], message, "{}", uri);
    }
}

#[tokio::test]
async fn writes_without_credentials_are_denied() {
    let app = test_app().await;

    let cases = [
        (Method::POST, "/clients"),
        (Method::PUT, "/clients/5f8d0d55b54764421b7156c1"),
        (Method::DELETE, "/activities/5f8d0d55b54764421b7156c1"),
        (Method::POST, "/reservations"),
        (Method::DELETE, "/restaurants/5f8d0d55b54764421b7156c1"),
    ];
    for (method, uri) in cases {
        let request = Request::builder()
            .method(method.clone())
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{} {}", method, uri);
        let body = response_json(response).await;
        assert_eq!(body["message"], "You do not have access.");
    }
}

#[tokio::test]
async fn blank_bearer_token_is_denied() {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/activities/5f8d0d55b54764421b7156c1")
        .header(header::AUTHORIZATION, "Bearer ")
        .body(Body::empty())
        .unwrap();
    let response = test_app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn session_cookie_passes_the_access_gate() {
    let state = test_state().await;
    let sid = state
        .sessions
        .create(Identity {
            id: "42".into(),
            display_name: "Octocat".into(),
        })
        .await;
    let app = routes::app(state);

    // A bad id keeps the handler away from the database while proving the
    // gate accepted the cookie: the failure is 400, not 401.
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/activities/not-a-valid-id")
        .header(header::COOKIE, format!("sid={}", sid))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Invalid activity ID format");
}

#[tokio::test]
async fn client_create_requires_all_fields() {
    let request = json_request(
        Method::POST,
        "/clients",
        json!({ "name": "Ada", "email": "ada@example.com" }),
    );
    let response = test_app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Missing required fields");
}

#[tokio::test]
async fn reservation_create_requires_all_fields() {
    let request = json_request(Method::POST, "/reservations", json!({ "status": "pending" }));
    let response = test_app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "All fields are required");
}

#[tokio::test]
async fn reservation_create_rejects_inverted_date_range() {
    let request = json_request(
        Method::POST,
        "/reservations",
        json!({
            "clientId": "5f8d0d55b54764421b7156c1",
            "checkInDate": "2026-09-10",
            "checkOutDate": "2026-09-05",
            "roomType": "suite",
            "numOfGuests": 2,
            "totalPrice": 450,
            "status": "confirmed"
        }),
    );
    let response = test_app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Check-out date must be after check-in date");
}

#[tokio::test]
async fn reservation_update_requires_at_least_one_field() {
    let request = json_request(
        Method::PUT,
        "/reservations/5f8d0d55b54764421b7156c1",
        json!({}),
    );
    let response = test_app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "At least one field must be provided for update");
}

#[tokio::test]
async fn restaurant_update_requires_at_least_one_field() {
    let request = json_request(
        Method::PUT,
        "/restaurants/5f8d0d55b54764421b7156c1",
        json!({}),
    );
    let response = test_app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "At least one field must be provided for update");
}

#[tokio::test]
async fn reservation_list_rejects_malformed_date_filter() {
    let request = get("/reservations?startDate=not-a-date");
    let response = test_app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Invalid date format");
}

#[tokio::test]
async fn unknown_route_is_a_plain_404() {
    let response = test_app().await.oneshot(get("/unknown")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
