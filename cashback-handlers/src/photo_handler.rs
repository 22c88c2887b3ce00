//! Photos: download, OCR, echo the recognized text back. Nothing is parsed into cashbacks.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use cashback_core::{Bot, Handler, HandlerResponse, Message, Result, MESSAGE_TYPE_PHOTO};
use tracing::{error, info, instrument, warn};

use crate::ocr::TextRecognizer;
use crate::render::{ocr_text, MSG_PHOTO_FAILED, MSG_PHOTO_NO_TEXT, MSG_PHOTO_PROCESSING};
use crate::reply::reply;

pub struct PhotoHandler {
    bot: Arc<dyn Bot>,
    recognizer: Arc<dyn TextRecognizer>,
    temp_dir: PathBuf,
}

impl PhotoHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        recognizer: Arc<dyn TextRecognizer>,
        temp_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            bot,
            recognizer,
            temp_dir: temp_dir.into(),
        }
    }

    /// Temp file for a photo, keyed by its transport-unique id.
    pub fn temp_path(&self, file_unique_id: &str) -> PathBuf {
        self.temp_dir.join(format!("{}.jpg", file_unique_id))
    }

    async fn remove_temp_file(path: &Path) {
        if let Err(e) = tokio::fs::remove_file(path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %path.display(), error = %e, "Failed to remove temp image");
            }
        }
    }
}

#[async_trait]
impl Handler for PhotoHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.message_type != MESSAGE_TYPE_PHOTO {
            return Ok(HandlerResponse::Continue);
        }
        let photo = match &message.photo {
            Some(photo) => photo,
            None => {
                warn!(message_id = %message.id, "Photo message without attachment");
                return reply(self.bot.as_ref(), message, MSG_PHOTO_FAILED.to_string()).await;
            }
        };

        self.bot.reply_to(message, MSG_PHOTO_PROCESSING).await?;

        let path = self.temp_path(&photo.file_unique_id);
        if let Err(e) = self.bot.download_file(&photo.file_id, &path).await {
            error!(file_id = %photo.file_id, error = %e, "Failed to download photo");
            Self::remove_temp_file(&path).await;
            return reply(self.bot.as_ref(), message, MSG_PHOTO_FAILED.to_string()).await;
        }
        info!(path = %path.display(), "step: PhotoHandler photo downloaded");

        let lines = match self.recognizer.recognize(&path).await {
            Ok(lines) => lines,
            Err(e) => {
                error!(path = %path.display(), error = %e, "OCR failed");
                Vec::new()
            }
        };
        Self::remove_temp_file(&path).await;

        let text = ocr_text(&lines).unwrap_or_else(|| MSG_PHOTO_NO_TEXT.to_string());
        reply(self.bot.as_ref(), message, text).await
    }
}
