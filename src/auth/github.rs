use async_trait::async_trait;
use reqwest::header;
use serde::Deserialize;
use url::Url;

use crate::auth::{AuthError, Identity, IdentityProvider};
use crate::config::GitHubConfig;

const AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
const TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const USER_URL: &str = "https://api.github.com/user";

/// GitHub OAuth adapter implementing [`IdentityProvider`].
pub struct GitHubProvider {
    client_id: String,
    client_secret: String,
    callback_url: String,
    http: reqwest::Client,
}

impl GitHubProvider {
    pub fn new(config: &GitHubConfig) -> Self {
        Self {
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            callback_url: config.callback_url.clone(),
            http: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Profile {
    id: u64,
    login: String,
    name: Option<String>,
}

#[async_trait]
impl IdentityProvider for GitHubProvider {
    fn authorize_url(&self, state: &str) -> String {
        // AUTHORIZE_URL is a valid base; parsing cannot fail
        let mut url = Url::parse(AUTHORIZE_URL).expect("static url");
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.callback_url)
            .append_pair("scope", "user:email")
            .append_pair("state", state);
        url.into()
    }

    async fn exchange_code(&self, code: &str) -> Result<Identity, AuthError> {
        let token: TokenResponse = self
            .http
            .post(TOKEN_URL)
            .header(header::ACCEPT, "application/json")
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let access_token = token.access_token.ok_or(AuthError::ExchangeRejected)?;

        let profile: Profile = self
            .http
            .get(USER_URL)
            .bearer_auth(&access_token)
            .header(header::USER_AGENT, "resort-api")
            .header(header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(Identity {
            id: profile.id.to_string(),
            display_name: profile.name.unwrap_or(profile.login),
        })
    }
}
