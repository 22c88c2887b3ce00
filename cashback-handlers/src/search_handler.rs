//! Free-text search: any text that is not a command is a category query.
//!
//! Unknown commands end here too and get the help text; they never reach the store.

use std::sync::Arc;

use async_trait::async_trait;
use cashback_core::{Bot, Handler, HandlerResponse, Message, Result};
use cashback_storage::{CashbackStore, StorageError};
use tracing::{error, info, instrument};

use crate::command::Command;
use crate::render::{
    nothing_found_text, search_text, unknown_command_text, MSG_GENERIC_FAILURE, MSG_NO_RECORDS,
};
use crate::reply::reply;

pub struct SearchHandler {
    bot: Arc<dyn Bot>,
    store: Arc<dyn CashbackStore>,
}

impl SearchHandler {
    pub fn new(bot: Arc<dyn Bot>, store: Arc<dyn CashbackStore>) -> Self {
        Self { bot, store }
    }

    async fn search(&self, user_id: i64, query: &str) -> std::result::Result<String, StorageError> {
        let rows = self.store.find_best(user_id, query).await?;
        if !rows.is_empty() {
            return Ok(search_text(query, &rows));
        }
        // Tell "no match" apart from "nothing stored yet".
        if self.store.count(user_id).await? == 0 {
            Ok(MSG_NO_RECORDS.to_string())
        } else {
            Ok(nothing_found_text(query))
        }
    }
}

#[async_trait]
impl Handler for SearchHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_text() {
            return Ok(HandlerResponse::Continue);
        }

        match Command::parse(&message.content) {
            None => {}
            Some(Command::Unknown(name)) => {
                return reply(self.bot.as_ref(), message, unknown_command_text(&name)).await;
            }
            Some(_) => return Ok(HandlerResponse::Continue),
        }

        let query = message.content.trim();
        info!(user_id = message.user.id, query = %query, "step: SearchHandler searching");

        let text = match self.search(message.user.id, query).await {
            Ok(text) => text,
            Err(e) => {
                error!(user_id = message.user.id, error = %e, "Failed to search cashbacks");
                MSG_GENERIC_FAILURE.to_string()
            }
        };
        reply(self.bot.as_ref(), message, text).await
    }
}
