use anyhow::{Context, Result};
use clap::Parser;
use planka_due_bot::bot::{run_polling, Bot};
use planka_due_bot::model::Config;
use planka_due_bot::utils::LogFile;
use std::sync::{Arc, Mutex};
use tracing::info;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
struct Args {
    #[arg(long = "config", default_value = "config.json")]
    config_path: String,
    #[arg(long = "log-file", default_value = "bot.log")]
    log_path: String,
    /// Log at DEBUG level unless RUST_LOG says otherwise
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = LogFile::new(&args.log_path);
    init_logging(&log_file, args.debug)?;

    let config = Config::from_config(&args.config_path)?;
    info!(
        "Starting bot for {} boards, {} allowed users",
        config.board_ids.len(),
        config.allowed_users.len()
    );

    let bot = Bot::new(Arc::new(config), Some(log_file))?;
    run_polling(Arc::new(bot)).await;
    Ok(())
}

fn init_logging(log_file: &LogFile, debug: bool) -> Result<()> {
    let file = log_file
        .open_append()
        .with_context(|| format!("Failed to open log file {}", log_file.path().display()))?;
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr.and(Mutex::new(file)))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}
