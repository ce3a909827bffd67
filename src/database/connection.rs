use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::database::DbError;

/// Process-wide MongoDB handle. Built once at startup and injected into the
/// router state; every repository borrows it at construction time.
#[derive(Clone)]
pub struct DbHandle {
    client: Client,
    database: Database,
}

impl DbHandle {
    /// Parse the connection string and build the client. The driver connects
    /// lazily, so startup must follow up with [`DbHandle::ping`] before
    /// serving traffic.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbError> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        options.server_selection_timeout =
            Some(Duration::from_secs(config.server_selection_timeout_secs));
        options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));

        let client = Client::with_options(options)?;
        let database = client.database(&config.database);

        Ok(Self { client, database })
    }

    /// Round-trip to the server; used at startup (fatal on failure) and by
    /// the health endpoint.
    pub async fn ping(&self) -> Result<(), DbError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    /// Close all connections. Safe to call with clones still alive; they
    /// share the same underlying client.
    pub async fn shutdown(self) {
        let name = self.database.name().to_string();
        self.client.shutdown().await;
        info!("Closed database connection: {}", name);
    }
}
