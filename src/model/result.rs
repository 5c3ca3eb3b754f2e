use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to acquire Planka token: {message}")]
    Auth { message: String },

    #[error("Failed to fetch comments of card {card_id}: {message}")]
    CommentFetch { card_id: String, message: String },

    #[error("Malformed response from `{endpoint}`: {message}")]
    MalformedResponse { endpoint: String, message: String },

    #[error("Request to `{endpoint}` failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Not a valid DD-MM-YYYY date: {input}")]
    DateParse { input: String },

    #[error("Invalid config `{path}`: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Telegram `{method}` failed: {description}")]
    Telegram { method: String, description: String },
}

impl Error {
    pub fn malformed(endpoint: impl ToString, message: impl ToString) -> Self {
        Self::MalformedResponse {
            endpoint: endpoint.to_string(),
            message: message.to_string(),
        }
    }

    pub fn request(endpoint: impl ToString, source: reqwest::Error) -> Self {
        Self::Request {
            endpoint: endpoint.to_string(),
            source,
        }
    }
}
