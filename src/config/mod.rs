use std::env;

/// Application configuration, resolved once at startup from the environment
/// and injected where needed. Defaults are suitable for local development.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database: DatabaseConfig,
    pub github: GitHubConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
    pub server_selection_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        // Allow tests or deployments to override port via env
        let port = env::var("RESORT_API_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(3000);

        let database = DatabaseConfig {
            uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: env::var("MONGODB_DATABASE").unwrap_or_else(|_| "resort".to_string()),
            server_selection_timeout_secs: parse_env("MONGODB_SERVER_SELECTION_TIMEOUT_SECS", 60),
            connect_timeout_secs: parse_env("MONGODB_CONNECT_TIMEOUT_SECS", 60),
        };

        let github = GitHubConfig {
            client_id: env::var("GITHUB_CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("GITHUB_CLIENT_SECRET").unwrap_or_default(),
            callback_url: env::var("CALLBACK_URL")
                .unwrap_or_else(|_| "http://localhost:3000/auth/github/callback".to_string()),
        };

        Self {
            port,
            database,
            github,
        }
    }
}

fn parse_env(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
