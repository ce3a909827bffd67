use axum::extract::{Query, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::auth::{session_cookie, AuthSession, SESSION_COOKIE};
use crate::state::AppState;

/// GET / - reports login state
pub async fn root(session: Option<AuthSession>) -> Json<Value> {
    let message = match session {
        Some(AuthSession::Session(identity)) => {
            format!("Logged in as {}", identity.display_name)
        }
        _ => "Logged Out".to_string(),
    };
    Json(json!({ "message": message }))
}

/// GET /login and GET /auth/github - redirect to the identity provider
pub async fn login(State(state): State<AppState>) -> Redirect {
    let csrf_state = state.login_states.issue().await;
    Redirect::temporary(&state.identity.authorize_url(&csrf_state))
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
}

/// GET /auth/github/callback - verify the echoed state, exchange the code,
/// establish a session
pub async fn callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Result<Response, ApiError> {
    let code = query
        .code
        .ok_or_else(|| ApiError::bad_request("Missing authorization code"))?;

    let echoed = query.state.unwrap_or_default();
    if !state.login_states.consume(&echoed).await {
        return Err(ApiError::bad_request("Invalid state parameter"));
    }

    let identity = state.identity.exchange_code(&code).await?;
    tracing::info!("authenticated {} via identity provider", identity.display_name);

    let sid = state.sessions.create(identity).await;
    let cookie = format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, sid);
    Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response())
}

/// GET /logout - drop the session and clear the cookie
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(sid) = session_cookie(&headers) {
        state.sessions.remove(&sid).await;
    }
    let clear = format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE);
    ([(header::SET_COOKIE, clear)], Redirect::to("/")).into_response()
}
