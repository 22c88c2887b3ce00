//! Sends a reply and turns it into the handler response.

use cashback_core::{Bot, HandlerResponse, Message, Result};

pub(crate) async fn reply(bot: &dyn Bot, message: &Message, text: String) -> Result<HandlerResponse> {
    bot.reply_to(message, &text).await?;
    Ok(HandlerResponse::Reply(text))
}
