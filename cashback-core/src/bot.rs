//! Bot abstraction for sending messages and fetching attachments.
//!
//! [`Bot`] is transport-agnostic; cashback-telegram implements it via teloxide.

use std::path::Path;

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction for talking to the chat transport.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Sends a message with a reply keyboard holding one button that opens the web app at `url`.
    async fn send_web_app_button(
        &self,
        chat: &Chat,
        text: &str,
        button_text: &str,
        url: &str,
    ) -> Result<()>;
    /// Downloads the file with transport id `file_id` to `destination`.
    async fn download_file(&self, file_id: &str, destination: &Path) -> Result<()>;
}
