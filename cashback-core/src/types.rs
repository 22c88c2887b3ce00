//! Transport-neutral message model and the [`Handler`] contract used by the chain.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MESSAGE_TYPE_TEXT: &str = "text";
pub const MESSAGE_TYPE_PHOTO: &str = "photo";
pub const MESSAGE_TYPE_WEB_APP_DATA: &str = "web_app_data";

/// Sender of a message. `id` is the key every cashback is scoped by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// A user known only by id (CLI and tests).
    pub fn with_id(id: i64) -> Self {
        Self {
            id,
            username: None,
            first_name: None,
            last_name: None,
        }
    }
}

/// Chat the message arrived in; replies go back here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// Largest size of a photo attached to a message. Ids are transport-specific.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub file_id: String,
    pub file_unique_id: String,
}

/// A single incoming or outgoing message.
///
/// `message_type` is one of [`MESSAGE_TYPE_TEXT`], [`MESSAGE_TYPE_PHOTO`] or
/// [`MESSAGE_TYPE_WEB_APP_DATA`]; the matching attachment field is set for the latter two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub message_type: String,
    pub created_at: DateTime<Utc>,
    pub photo: Option<Photo>,
    /// Raw payload submitted from the Telegram web app (JSON string).
    pub web_app_data: Option<String>,
}

impl Message {
    pub fn is_text(&self) -> bool {
        self.message_type == MESSAGE_TYPE_TEXT
    }
}

/// Outcome of [`Handler::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Not mine; try the next handler.
    Continue,
    /// Handled without a reply.
    Stop,
    /// Stop the chain and attach the reply text that was sent.
    Reply(String),
}

/// Implemented by transport adapters to produce a core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Implemented by transport adapters to produce a core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    /// None when the update has no sender; every cashback needs an owning user.
    fn to_core(&self) -> Option<Message>;
}

/// One step of message processing. All hooks are optional; see `handler_chain::HandlerChain`
/// for the order they run in.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Pre-processing hook. `false` aborts the whole chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Claims the message by returning Stop or Reply; Continue passes it on.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Post-processing hook; sees the response that ended the handle phase.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
