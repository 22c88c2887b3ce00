//! `/start` and `/help`: greeting, plus the web-app button when one is configured.

use std::sync::Arc;

use async_trait::async_trait;
use cashback_core::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};

use crate::command::Command;
use crate::render::{help_text, welcome_text, WEB_APP_BUTTON_TEXT};
use crate::reply::reply;

pub struct StartHandler {
    bot: Arc<dyn Bot>,
    web_app_url: Option<String>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>, web_app_url: Option<String>) -> Self {
        Self { bot, web_app_url }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_text() {
            return Ok(HandlerResponse::Continue);
        }

        match Command::parse(&message.content) {
            Some(Command::Start) => {
                info!(user_id = message.user.id, "step: StartHandler greeting user");
                let text = welcome_text(self.web_app_url.is_some());
                match &self.web_app_url {
                    Some(url) => {
                        self.bot
                            .send_web_app_button(&message.chat, &text, WEB_APP_BUTTON_TEXT, url)
                            .await?;
                        Ok(HandlerResponse::Reply(text))
                    }
                    None => reply(self.bot.as_ref(), message, text).await,
                }
            }
            Some(Command::Help) => reply(self.bot.as_ref(), message, help_text()).await,
            _ => Ok(HandlerResponse::Continue),
        }
    }
}
