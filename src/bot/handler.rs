use crate::bot::Command;
use crate::model::{Config, DueWindow, Result};
use crate::planka::{DueCardAggregator, PlankaClient, TokenProvider};
use crate::report::HtmlReport;
use crate::telegram::{Message, SendMessage, TelegramClient};
use crate::utils::LogFile;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub const NOT_ALLOWED: &str = "You're not allowed access to the bot";
pub const GREETING: &str =
    "Hi. Choose an action by clicking on the button below to get information from your Planka";
pub const ASK_DATE: &str = "Enter the date in DD-MM-YYYY format (e.g. 10-06-2025)";
pub const BAD_DATE: &str =
    "Incorrect date format. Use DD-MM-YYYY (be sure to use the '-' character)";
pub const NOTHING_DUE: &str = "Congratulations! There are no tasks for the selected period!";
pub const FAILED: &str = "Failed to get data from Planka. Please try again later.";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Reply {
    pub text: String,
    pub html: bool,
    pub keyboard: bool,
}

impl Reply {
    fn plain(text: impl ToString) -> Self {
        Self {
            text: text.to_string(),
            html: false,
            keyboard: false,
        }
    }

    fn with_keyboard(mut self) -> Self {
        self.keyboard = true;
        self
    }
}

pub struct Bot {
    config: Arc<Config>,
    planka: PlankaClient,
    telegram: TelegramClient,
    log_file: Option<LogFile>,
}

// Create
impl Bot {
    pub fn new(config: Arc<Config>, log_file: Option<LogFile>) -> Result<Self> {
        let planka = PlankaClient::new(config.clone())?;
        let telegram = TelegramClient::new(&config.telegram_api_url, &config.telegram_token)?;
        Ok(Self {
            config,
            planka,
            telegram,
            log_file,
        })
    }

    pub fn telegram(&self) -> &TelegramClient {
        &self.telegram
    }
}

impl Bot {
    /// Answers one incoming message, if it calls for an answer.
    pub async fn handle(&self, message: &Message) -> Result<()> {
        let Some(text) = &message.text else {
            return Ok(());
        };
        let Some(user) = &message.from else {
            return Ok(());
        };
        let Some(reply) = self.respond(user.id, text).await else {
            debug!("Ignoring message from {}", user.id);
            return Ok(());
        };

        let outgoing = SendMessage {
            chat_id: message.chat.id,
            text: reply.text,
            parse_mode: reply.html.then_some("HTML"),
            reply_to_message_id: Some(message.message_id),
            reply_markup: reply.keyboard.then(Command::keyboard),
        };
        self.telegram.send_message(&outgoing).await?;
        Ok(())
    }

    pub async fn respond(&self, user_id: i64, text: &str) -> Option<Reply> {
        if !self.config.is_user_allowed(user_id) {
            warn!("Refused access to user {}", user_id);
            return Some(Reply::plain(NOT_ALLOWED));
        }

        let today = self.today();
        let window = match Command::parse(text)? {
            Command::Start => return Some(Reply::plain(GREETING).with_keyboard()),
            Command::AskDate => return Some(Reply::plain(ASK_DATE)),
            Command::Today => DueWindow::until_today(today),
            Command::Tomorrow => DueWindow::tomorrow(today),
            Command::Week => DueWindow::week(today),
            Command::OnDate(input) => match DueWindow::parse_date(&input) {
                Ok(window) => window,
                Err(e) => {
                    info!("{}", e);
                    return Some(Reply::plain(BAD_DATE));
                }
            },
        };

        info!(
            "User {} asked for cards due {} .. {}",
            user_id, window.start, window.end
        );
        Some(self.due_report(&window).await)
    }

    async fn due_report(&self, window: &DueWindow) -> Reply {
        match self.fetch_report(window).await {
            Ok(Some(text)) => Reply {
                text,
                html: true,
                keyboard: true,
            },
            Ok(None) => Reply::plain(NOTHING_DUE),
            Err(e) => {
                error!("Failed to collect due cards: {}", e);
                Reply::plain(FAILED)
            }
        }
    }

    async fn fetch_report(&self, window: &DueWindow) -> Result<Option<String>> {
        if let Some(log_file) = &self.log_file {
            match log_file.truncate_if_stale(Utc::now()) {
                Ok(true) => info!("Log file {} truncated", log_file.path().display()),
                Ok(false) => {}
                Err(e) => warn!("Failed to check log file age: {}", e),
            }
        }

        let token = self.planka.acquire_token().await?;
        let report = self.planka.due_cards(&token, window).await?;
        Ok(report.render_html())
    }

    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.config.timezone).date_naive()
    }
}
