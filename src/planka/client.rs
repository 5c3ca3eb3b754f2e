use crate::model::{Config, Error, Result};
use crate::planka::Token;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

const USER_AGENT: &str = concat!("planka-due-bot/", env!("CARGO_PKG_VERSION"));

/// Planka REST client. Requests carry no timeout of their own.
#[derive(Debug, Clone)]
pub struct PlankaClient {
    http: Client,
    config: Arc<Config>,
}

impl PlankaClient {
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::request("client", e))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.planka_url.trim_end_matches('/'), path)
    }

    /// Authenticated GET, decoded as `T`. Any body that doesn't fit `T` is a
    /// malformed response.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, token: &Token, path: &str) -> Result<T> {
        debug!("GET {}", path);
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(token.as_str())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| Error::request(path, e))?;
        let body = response.text().await.map_err(|e| Error::request(path, e))?;
        serde_json::from_str(&body).map_err(|e| Error::malformed(path, e))
    }
}
