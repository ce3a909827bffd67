use std::sync::Arc;

use resort_api::auth::github::GitHubProvider;
use resort_api::auth::session::{LoginStates, SessionStore};
use resort_api::config::AppConfig;
use resort_api::database::connection::DbHandle;
use resort_api::routes;
use resort_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up MONGODB_URI etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    tracing::info!("Starting resort API on port {}", config.port);

    // Database reachability is fatal at startup; requests must never see an
    // uninitialized handle.
    let db = match DbHandle::connect(&config.database).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("failed to configure database client: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = db.ping().await {
        tracing::error!("database unreachable at startup: {}", e);
        std::process::exit(1);
    }
    tracing::info!("Connected to database {}", db.database_name());

    let state = AppState {
        db: db.clone(),
        sessions: SessionStore::new(),
        login_states: LoginStates::new(),
        identity: Arc::new(GitHubProvider::new(&config.github)),
    };

    let app = routes::app(state);

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", bind_addr, e))?;

    tracing::info!("listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    db.shutdown().await;
    Ok(())
}
