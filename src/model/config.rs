use crate::model::{Error, Result};
use chrono::FixedOffset;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Process-wide settings, loaded once at start and never mutated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub planka_url: String,
    pub username: String,
    pub password: String,
    pub telegram_token: String,
    #[serde(default = "default_telegram_api_url")]
    pub telegram_api_url: String,
    pub allowed_users: Vec<i64>,
    pub board_ids: Vec<String>,
    #[serde(deserialize_with = "deserialize_offset")]
    pub timezone: FixedOffset,
}

// Create
impl Config {
    pub fn from_config(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json_str = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&json_str).map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })
    }
}

// Parser
impl Config {
    fn parse(json_str: &str) -> std::result::Result<Self, String> {
        let config: Self = serde_json::from_str(json_str).map_err(|e| e.to_string())?;
        if config.planka_url.trim().is_empty() {
            return Err("Empty 'plankaUrl' field".to_string());
        }
        Ok(config)
    }

    pub fn is_user_allowed(&self, user_id: i64) -> bool {
        self.allowed_users.contains(&user_id)
    }

    pub fn is_board_allowed(&self, board_id: &str) -> bool {
        self.board_ids.iter().any(|id| id == board_id)
    }
}

fn default_telegram_api_url() -> String {
    DEFAULT_TELEGRAM_API_URL.to_string()
}

fn deserialize_offset<'de, D>(deserializer: D) -> std::result::Result<FixedOffset, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse::<FixedOffset>()
        .map_err(|_| serde::de::Error::custom(format!("Not a valid UTC offset: {}", raw)))
}
