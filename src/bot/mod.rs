pub mod command;
pub mod handler;
pub mod runner;

pub use command::Command;
pub use handler::{Bot, Reply};
pub use runner::run_polling;
