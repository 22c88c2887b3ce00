//! `/reset`: deletes every cashback of the user. No confirmation step.

use std::sync::Arc;

use async_trait::async_trait;
use cashback_core::{Bot, Handler, HandlerResponse, Message, Result};
use cashback_storage::CashbackStore;
use tracing::{error, info, instrument};

use crate::command::Command;
use crate::render::{reset_text, MSG_GENERIC_FAILURE};
use crate::reply::reply;

pub struct ResetHandler {
    bot: Arc<dyn Bot>,
    store: Arc<dyn CashbackStore>,
}

impl ResetHandler {
    pub fn new(bot: Arc<dyn Bot>, store: Arc<dyn CashbackStore>) -> Self {
        Self { bot, store }
    }
}

#[async_trait]
impl Handler for ResetHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_text() || Command::parse(&message.content) != Some(Command::Reset) {
            return Ok(HandlerResponse::Continue);
        }

        let text = match self.store.clear(message.user.id).await {
            Ok(deleted) => {
                info!(user_id = message.user.id, deleted, "step: ResetHandler cleared cashbacks");
                reset_text(deleted)
            }
            Err(e) => {
                error!(user_id = message.user.id, error = %e, "Failed to clear cashbacks");
                MSG_GENERIC_FAILURE.to_string()
            }
        };
        reply(self.bot.as_ref(), message, text).await
    }
}
