use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::Value;

const CARD_NAME_LIMIT: usize = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct ItemResponse<T> {
    pub item: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncludedResponse<T> {
    pub included: T,
}

#[derive(Debug, Clone, Eq, Hash, PartialEq, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectIncluded {
    pub boards: Vec<Board>,
}

#[derive(Debug, Clone, Eq, Hash, PartialEq, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardIncluded {
    pub lists: Vec<BoardList>,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Eq, Hash, PartialEq, Deserialize)]
pub struct BoardList {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub due_date: Option<String>,
    /// Planka sends `null` for cards that never had a due date.
    #[serde(default)]
    pub is_due_date_completed: Option<bool>,
    #[serde(default)]
    pub list_id: Option<String>,
}

impl Card {
    /// Name cut to 30 characters, with an ellipsis when something was cut.
    pub fn short_name(&self) -> String {
        if self.name.chars().count() > CARD_NAME_LIMIT {
            let short: String = self.name.chars().take(CARD_NAME_LIMIT).collect();
            format!("{short}...")
        } else {
            self.name.clone()
        }
    }

    /// Due date of an open card, shifted into `timezone`.
    ///
    /// `Ok(None)` for cards without a due date or with a completed one.
    pub fn open_due_date(
        &self,
        timezone: &FixedOffset,
    ) -> Result<Option<DateTime<FixedOffset>>, chrono::ParseError> {
        let Some(due_date) = &self.due_date else {
            return Ok(None);
        };
        if self.is_due_date_completed.unwrap_or(false) {
            return Ok(None);
        }
        let due_date = DateTime::parse_from_rfc3339(due_date)?;
        Ok(Some(due_date.with_timezone(timezone)))
    }
}

/// Entry of a card's action log (`GET /cards/{id}/actions`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
    pub created_at: String,
}

impl CardAction {
    pub const COMMENT_KIND: &'static str = "commentCard";

    pub fn is_comment(&self) -> bool {
        self.kind == Self::COMMENT_KIND
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub text: String,
    pub created_at: DateTime<FixedOffset>,
}
