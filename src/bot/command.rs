use crate::telegram::ReplyKeyboardMarkup;
use regex::Regex;
use std::sync::LazyLock;

pub const TODAY_BUTTON: &str = "🗓 Tasks for today";
pub const TOMORROW_BUTTON: &str = "🗓 Tomorrow's tasks";
pub const WEEK_BUTTON: &str = "🗓 Tasks for the week";
pub const DATE_BUTTON: &str = "🗓 Date tasks";

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2}-\d{2}-\d{4}").unwrap());

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    Start,
    Today,
    Tomorrow,
    Week,
    AskDate,
    /// Free text that looks like a DD-MM-YYYY date; parsed later.
    OnDate(String),
}

impl Command {
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        match text {
            TODAY_BUTTON => return Some(Self::Today),
            TOMORROW_BUTTON => return Some(Self::Tomorrow),
            WEEK_BUTTON => return Some(Self::Week),
            DATE_BUTTON => return Some(Self::AskDate),
            _ => {}
        }

        let first_word = text.split_whitespace().next().unwrap_or_default();
        if first_word == "/start" || first_word.starts_with("/start@") {
            return Some(Self::Start);
        }
        if DATE_PATTERN.is_match(text) {
            return Some(Self::OnDate(text.to_string()));
        }
        None
    }

    pub fn keyboard() -> ReplyKeyboardMarkup {
        ReplyKeyboardMarkup::column([TODAY_BUTTON, TOMORROW_BUTTON, WEEK_BUTTON, DATE_BUTTON])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_buttons() {
        assert_eq!(Command::parse(TODAY_BUTTON), Some(Command::Today));
        assert_eq!(Command::parse(TOMORROW_BUTTON), Some(Command::Tomorrow));
        assert_eq!(Command::parse(WEEK_BUTTON), Some(Command::Week));
        assert_eq!(Command::parse(DATE_BUTTON), Some(Command::AskDate));
    }

    #[test]
    fn parses_start_variants() {
        assert_eq!(Command::parse("/start"), Some(Command::Start));
        assert_eq!(Command::parse("/start@due_bot"), Some(Command::Start));
        assert_eq!(Command::parse("/start now"), Some(Command::Start));
        assert_eq!(Command::parse("/started"), None);
    }

    #[test]
    fn date_like_text_is_a_date_query() {
        assert_eq!(
            Command::parse("10-06-2025"),
            Some(Command::OnDate("10-06-2025".to_string()))
        );
        assert_eq!(
            Command::parse("31-02-2025"),
            Some(Command::OnDate("31-02-2025".to_string()))
        );
        assert_eq!(Command::parse("10.06.2025"), None);
        assert_eq!(Command::parse("hello"), None);
    }

    #[test]
    fn keyboard_has_one_button_per_row() {
        let keyboard = Command::keyboard();
        assert!(keyboard.resize_keyboard);
        assert_eq!(keyboard.keyboard.len(), 4);
        assert_eq!(keyboard.keyboard[3][0].text, DATE_BUTTON);
    }
}
