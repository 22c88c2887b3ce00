//! Unit test module
//!
//! Handler unit tests live here, separate from source files.
//! Stores are in-memory SQLite (sqlite::memory:); the bot is a recording mock.


use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cashback_core::{
    Bot, BotError, Chat, Message, Photo, User, MESSAGE_TYPE_PHOTO,
    MESSAGE_TYPE_TEXT, MESSAGE_TYPE_WEB_APP_DATA,
};
use cashback_storage::{
    CashbackRepository, CashbackRow, CashbackStore, NewCashback, RecordId, StorageError,
};
use chrono::Utc;

use crate::ocr::{OcrError, TextRecognizer};

/// Everything the mock bot was asked to send.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Sent {
    Message(String),
    Reply(String),
    WebAppButton { text: String, url: String },
}

/// Records outgoing traffic; downloads write a small file unless `fail_downloads` is set.
#[derive(Default)]
pub(crate) struct MockBot {
    pub sent: Mutex<Vec<Sent>>,
    pub downloads: Mutex<Vec<PathBuf>>,
    pub fail_downloads: bool,
}

impl MockBot {
    pub fn failing_downloads() -> Self {
        Self {
            fail_downloads: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn replies(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Reply(text) => Some(text),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> cashback_core::Result<()> {
        self.sent.lock().unwrap().push(Sent::Message(text.to_string()));
        Ok(())
    }

    async fn reply_to(&self, _message: &Message, text: &str) -> cashback_core::Result<()> {
        self.sent.lock().unwrap().push(Sent::Reply(text.to_string()));
        Ok(())
    }

    async fn send_web_app_button(
        &self,
        _chat: &Chat,
        text: &str,
        _button_text: &str,
        url: &str,
    ) -> cashback_core::Result<()> {
        self.sent.lock().unwrap().push(Sent::WebAppButton {
            text: text.to_string(),
            url: url.to_string(),
        });
        Ok(())
    }

    async fn download_file(&self, file_id: &str, destination: &Path) -> cashback_core::Result<()> {
        if self.fail_downloads {
            return Err(BotError::Bot(format!("cannot download {}", file_id)));
        }
        tokio::fs::write(destination, b"jpeg").await?;
        self.downloads.lock().unwrap().push(destination.to_path_buf());
        Ok(())
    }
}

/// Returns fixed lines (or an error) and remembers whether the image existed when called.
pub(crate) struct MockRecognizer {
    pub lines: Option<Vec<String>>,
    pub saw_file: Mutex<Option<bool>>,
}

impl MockRecognizer {
    pub fn returning(lines: &[&str]) -> Self {
        Self {
            lines: Some(lines.iter().map(|l| l.to_string()).collect()),
            saw_file: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            lines: None,
            saw_file: Mutex::new(None),
        }
    }
}

#[async_trait]
impl TextRecognizer for MockRecognizer {
    async fn recognize(&self, image: &Path) -> Result<Vec<String>, OcrError> {
        *self.saw_file.lock().unwrap() = Some(image.exists());
        match &self.lines {
            Some(lines) => Ok(lines.clone()),
            None => Err(OcrError::Failed {
                status: "exit status: 1".to_string(),
                stderr: "cannot read image".to_string(),
            }),
        }
    }
}

/// Store whose every call fails, for the generic-failure replies.
pub(crate) struct FailingStore;

#[async_trait]
impl CashbackStore for FailingStore {
    async fn add(&self, _cashback: &NewCashback) -> Result<RecordId, StorageError> {
        Err(StorageError::InvalidRecord("database is locked".to_string()))
    }

    async fn list_all(&self, _user_id: i64) -> Result<Vec<CashbackRow>, StorageError> {
        Err(StorageError::InvalidRecord("database is locked".to_string()))
    }

    async fn find_best(&self, _user_id: i64, _query: &str) -> Result<Vec<CashbackRow>, StorageError> {
        Err(StorageError::InvalidRecord("database is locked".to_string()))
    }

    async fn count(&self, _user_id: i64) -> Result<i64, StorageError> {
        Err(StorageError::InvalidRecord("database is locked".to_string()))
    }

    async fn clear(&self, _user_id: i64) -> Result<u64, StorageError> {
        Err(StorageError::InvalidRecord("database is locked".to_string()))
    }
}

pub(crate) async fn memory_store() -> Arc<CashbackRepository> {
    Arc::new(
        CashbackRepository::new("sqlite::memory:")
            .await
            .expect("Failed to create repository"),
    )
}

/// Builds a test text Message with fixed user_id=123, chat_id=456.
pub(crate) fn create_test_message(content: &str) -> Message {
    create_message_from(123, content)
}

pub(crate) fn create_message_from(user_id: i64, content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: user_id,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        message_type: MESSAGE_TYPE_TEXT.to_string(),
        created_at: Utc::now(),
        photo: None,
        web_app_data: None,
    }
}

pub(crate) fn create_web_app_message(data: &str) -> Message {
    let mut message = create_test_message("");
    message.message_type = MESSAGE_TYPE_WEB_APP_DATA.to_string();
    message.web_app_data = Some(data.to_string());
    message
}

pub(crate) fn create_photo_message(file_unique_id: &str) -> Message {
    let mut message = create_test_message("");
    message.message_type = MESSAGE_TYPE_PHOTO.to_string();
    message.photo = Some(Photo {
        file_id: format!("file-{}", file_unique_id),
        file_unique_id: file_unique_id.to_string(),
    });
    message
}
