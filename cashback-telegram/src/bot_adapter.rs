//! [`cashback_core::Bot`] over the Telegram Bot API.

use std::path::Path;

use async_trait::async_trait;
use cashback_core::{Bot as CoreBot, BotError, Chat, Message, Result};
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{ButtonRequest, ChatId, FileId, KeyboardButton, KeyboardMarkup, WebAppInfo};
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};

/// Sends replies, the web-app keyboard and file downloads through teloxide.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn transport_error(e: impl std::fmt::Display) -> BotError {
    BotError::Bot(e.to_string())
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(transport_error)?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn send_web_app_button(
        &self,
        chat: &Chat,
        text: &str,
        button_text: &str,
        url: &str,
    ) -> Result<()> {
        let url = reqwest::Url::parse(url)
            .map_err(|e| BotError::Config(format!("invalid web app URL {}: {}", url, e)))?;
        let button = KeyboardButton::new(button_text).request(ButtonRequest::WebApp(WebAppInfo { url }));
        let keyboard = KeyboardMarkup::new(vec![vec![button]]).resize_keyboard();

        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(keyboard)
            .await
            .map_err(transport_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn download_file(&self, file_id: &str, destination: &Path) -> Result<()> {
        let file = self
            .bot
            .get_file(FileId(file_id.to_string()))
            .await
            .map_err(transport_error)?;

        let mut dst = tokio::fs::File::create(destination).await?;
        self.bot
            .download_file(&file.path, &mut dst)
            .await
            .map_err(transport_error)?;
        dst.flush().await?;

        debug!(path = %destination.display(), size = file.size, "File downloaded");
        Ok(())
    }
}
