//! teloxide client construction.

use teloxide::Bot;
use tracing::{error, info};

/// Creates the teloxide client, pointing it at `api_url` when one is given and valid.
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> Bot {
    let bot = Bot::new(token);
    match api_url {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => {
                info!(url = %url_str, "Using custom Telegram API URL");
                bot.set_api_url(url)
            }
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}
