//! `/list`: every cashback of the user, grouped by bank.

use std::sync::Arc;

use async_trait::async_trait;
use cashback_core::{Bot, Handler, HandlerResponse, Message, Result};
use cashback_storage::CashbackStore;
use tracing::{error, info, instrument};

use crate::command::Command;
use crate::render::{list_text, MSG_GENERIC_FAILURE};
use crate::reply::reply;

pub struct ListHandler {
    bot: Arc<dyn Bot>,
    store: Arc<dyn CashbackStore>,
}

impl ListHandler {
    pub fn new(bot: Arc<dyn Bot>, store: Arc<dyn CashbackStore>) -> Self {
        Self { bot, store }
    }
}

#[async_trait]
impl Handler for ListHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_text() || Command::parse(&message.content) != Some(Command::List) {
            return Ok(HandlerResponse::Continue);
        }

        let text = match self.store.list_all(message.user.id).await {
            Ok(rows) => {
                info!(user_id = message.user.id, count = rows.len(), "step: ListHandler listed");
                list_text(&rows)
            }
            Err(e) => {
                error!(user_id = message.user.id, error = %e, "Failed to list cashbacks");
                MSG_GENERIC_FAILURE.to_string()
            }
        };
        reply(self.bot.as_ref(), message, text).await
    }
}
