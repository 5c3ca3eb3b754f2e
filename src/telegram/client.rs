use crate::model::{Error, Result};
use crate::telegram::{ApiResponse, GetUpdates, Message, SendMessage, Update};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Seconds Telegram may hold a `getUpdates` call open.
pub const LONG_POLL_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: Client,
    base_url: String,
}

impl TelegramClient {
    pub fn new(api_url: &str, token: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(LONG_POLL_SECS + 30))
            .build()
            .map_err(|e| Error::request("telegram client", e))?;
        Ok(Self {
            http,
            base_url: format!("{}/bot{}", api_url.trim_end_matches('/'), token),
        })
    }

    pub async fn get_updates(&self, offset: i64, timeout: u64) -> Result<Vec<Update>> {
        let request = GetUpdates {
            offset,
            timeout,
            allowed_updates: vec!["message"],
        };
        self.call("getUpdates", &request).await
    }

    pub async fn send_message(&self, message: &SendMessage) -> Result<Message> {
        self.call("sendMessage", message).await
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        // The URL embeds the bot token, keep it out of errors.
        let response = self
            .http
            .post(format!("{}/{}", self.base_url, method))
            .json(body)
            .send()
            .await
            .map_err(|e| Error::request(method, e.without_url()))?;
        let response: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| Error::malformed(method, e.without_url()))?;

        match (response.ok, response.result) {
            (true, Some(result)) => Ok(result),
            _ => Err(Error::Telegram {
                method: method.to_string(),
                description: response
                    .description
                    .unwrap_or_else(|| "No result".to_string()),
            }),
        }
    }
}
