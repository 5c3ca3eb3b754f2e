use crate::bot::Bot;
use crate::telegram::LONG_POLL_SECS;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Long-polls Telegram forever. Each message is answered on its own task;
/// a failed poll is retried after a fixed delay.
pub async fn run_polling(bot: Arc<Bot>) {
    info!("Polling for updates");
    let mut offset = 0;
    loop {
        let updates = match bot.telegram().get_updates(offset, LONG_POLL_SECS).await {
            Ok(updates) => updates,
            Err(e) => {
                error!("Bot error: {}", e);
                tokio::time::sleep(RECONNECT_DELAY).await;
                continue;
            }
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);
            let Some(message) = update.message else {
                continue;
            };
            let bot = bot.clone();
            tokio::spawn(async move {
                if let Err(e) = bot.handle(&message).await {
                    error!("Failed to answer message {}: {}", message.message_id, e);
                }
            });
        }
    }
}
