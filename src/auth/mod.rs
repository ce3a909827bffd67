pub mod github;
pub mod session;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// An authenticated user as reported by the identity provider.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub id: String,
    pub display_name: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Identity provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Identity provider rejected the authorization code")]
    ExchangeRejected,
}

/// External identity provider capability. The access gate and the auth
/// handlers depend only on this interface, never on a concrete provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// URL the browser is redirected to for login.
    fn authorize_url(&self, state: &str) -> String;

    /// Exchange an authorization code for the user's identity.
    async fn exchange_code(&self, code: &str) -> Result<Identity, AuthError>;
}
