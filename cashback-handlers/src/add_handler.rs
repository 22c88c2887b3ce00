//! Inserts cashbacks submitted from the web app or with `/add`.
//!
//! Missing bank/category is rejected with a message naming the field; an unparseable percent
//! follows the configured [`PercentPolicy`].

use std::sync::Arc;

use async_trait::async_trait;
use cashback_core::{Bot, Handler, HandlerResponse, Message, Result, MESSAGE_TYPE_WEB_APP_DATA};
use cashback_storage::{CashbackStore, NewCashback};
use tracing::{error, info, instrument, warn};

use crate::command::Command;
use crate::intake::{parse_add_args, parse_web_app_data, IntakeError, PercentPolicy};
use crate::render::{rejected_text, saved_text, MSG_GENERIC_FAILURE};
use crate::reply::reply;

pub struct AddCashbackHandler {
    bot: Arc<dyn Bot>,
    store: Arc<dyn CashbackStore>,
    policy: PercentPolicy,
}

impl AddCashbackHandler {
    pub fn new(bot: Arc<dyn Bot>, store: Arc<dyn CashbackStore>, policy: PercentPolicy) -> Self {
        Self { bot, store, policy }
    }

    /// The insert carried by this message, if it is an insert request at all.
    fn parse_request(&self, message: &Message) -> Option<std::result::Result<NewCashback, IntakeError>> {
        if message.message_type == MESSAGE_TYPE_WEB_APP_DATA {
            let data = message.web_app_data.as_deref().unwrap_or_default();
            return Some(parse_web_app_data(message.user.id, data, self.policy));
        }
        if !message.is_text() {
            return None;
        }
        match Command::parse(&message.content) {
            Some(Command::Add(args)) => Some(parse_add_args(message.user.id, &args, self.policy)),
            _ => None,
        }
    }
}

#[async_trait]
impl Handler for AddCashbackHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let request = match self.parse_request(message) {
            Some(request) => request,
            None => return Ok(HandlerResponse::Continue),
        };

        let cashback = match request {
            Ok(cashback) => cashback,
            Err(e) => {
                warn!(user_id = message.user.id, error = %e, "Rejected cashback insert");
                return reply(self.bot.as_ref(), message, rejected_text(&e)).await;
            }
        };

        match self.store.add(&cashback).await {
            Ok(id) => {
                info!(
                    user_id = message.user.id,
                    record_id = %id,
                    "step: AddCashbackHandler saved cashback"
                );
                reply(self.bot.as_ref(), message, saved_text(&cashback)).await
            }
            Err(e) => {
                error!(user_id = message.user.id, error = %e, "Failed to save cashback");
                reply(self.bot.as_ref(), message, MSG_GENERIC_FAILURE.to_string()).await
            }
        }
    }
}
