pub mod client;
pub mod model;

pub use client::{TelegramClient, LONG_POLL_SECS};
pub use model::{
    ApiResponse, Chat, GetUpdates, KeyboardButton, Message, ReplyKeyboardMarkup, SendMessage,
    Update, User,
};
