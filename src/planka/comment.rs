use crate::model::{CardAction, Comment, Error, ItemsResponse, Result};
use crate::planka::{PlankaClient, Token};
use chrono::DateTime;
use itertools::Itertools;
use tracing::warn;

const COMMENT_LIMIT: usize = 50;

pub trait CommentFetcher {
    /// Text of the newest comment on the card, or an empty string when there
    /// is none or it could not be fetched.
    async fn latest_comment(&self, token: &Token, card_id: &str) -> String;
}

impl CommentFetcher for PlankaClient {
    async fn latest_comment(&self, token: &Token, card_id: &str) -> String {
        match self.fetch_comments(token, card_id).await {
            Ok(comments) => latest(&comments)
                .map(|comment| truncate(&comment.text, COMMENT_LIMIT))
                .unwrap_or_default(),
            Err(e) => {
                warn!("{}", e);
                String::new()
            }
        }
    }
}

impl PlankaClient {
    async fn fetch_comments(&self, token: &Token, card_id: &str) -> Result<Vec<Comment>> {
        let fetch_error = |message: String| Error::CommentFetch {
            card_id: card_id.to_string(),
            message,
        };
        let path = format!("/cards/{}/actions", card_id);
        let actions: ItemsResponse<CardAction> = self
            .get_json(token, &path)
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        actions
            .items
            .iter()
            .filter(|action| action.is_comment())
            .map(|action| parse_comment(action).map_err(fetch_error))
            .collect()
    }
}

fn parse_comment(action: &CardAction) -> std::result::Result<Comment, String> {
    let Some(text) = action.data["text"].as_str() else {
        return Err("Not found 'data.text' field".to_string());
    };
    let Ok(created_at) = DateTime::parse_from_rfc3339(&action.created_at) else {
        return Err(format!("Not a valid date time: {}", action.created_at));
    };
    Ok(Comment {
        text: normalize(text),
        created_at,
    })
}

/// Newest comment. On equal timestamps the one listed first wins.
pub fn latest(comments: &[Comment]) -> Option<&Comment> {
    comments.iter().fold(None, |newest: Option<&Comment>, comment| match newest {
        Some(newest) if comment.created_at <= newest.created_at => Some(newest),
        _ => Some(comment),
    })
}

/// Collapses every whitespace run into one space and trims the ends.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().join(" ")
}

pub fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
