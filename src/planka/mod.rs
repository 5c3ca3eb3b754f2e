pub mod client;
pub mod comment;
pub mod due_cards;
pub mod token;

pub use client::PlankaClient;
pub use comment::CommentFetcher;
pub use due_cards::DueCardAggregator;
pub use token::{Credentials, Token, TokenProvider};
