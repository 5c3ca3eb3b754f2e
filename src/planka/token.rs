use crate::model::{Config, Error, ItemResponse, Result};
use crate::planka::PlankaClient;
use serde::Serialize;
use std::fmt;
use tracing::error;

/// Bearer credential for one batch of Planka calls. Never cached.
#[derive(Clone, Eq, PartialEq)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl ToString) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email_or_username: String,
    pub password: String,
}

impl From<&Config> for Credentials {
    fn from(config: &Config) -> Self {
        Self {
            email_or_username: config.username.clone(),
            password: config.password.clone(),
        }
    }
}

pub trait TokenProvider {
    async fn acquire_token(&self) -> Result<Token>;
}

impl TokenProvider for PlankaClient {
    async fn acquire_token(&self) -> Result<Token> {
        let credentials = Credentials::from(self.config());
        match self.request_token(&credentials).await {
            Ok(token) => Ok(token),
            Err(e) => {
                error!("Error when receiving a token: {}", e);
                Err(Error::Auth {
                    message: e.to_string(),
                })
            }
        }
    }
}

impl PlankaClient {
    async fn request_token(&self, credentials: &Credentials) -> reqwest::Result<Token> {
        let response: ItemResponse<String> = self
            .http()
            .post(self.url("/access-tokens"))
            .json(credentials)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(Token(response.item))
    }
}
