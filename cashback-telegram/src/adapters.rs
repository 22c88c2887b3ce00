//! Adapters from Telegram (teloxide) types to cashback_core types.
//!
//! A message becomes web-app data, a photo (largest size), or text, checked in that order.
//! Photo captions become the message content. Updates without a sender (channel posts) are
//! not converted.

use cashback_core::{
    Chat, Message, Photo, ToCoreMessage, ToCoreUser, User, MESSAGE_TYPE_PHOTO,
    MESSAGE_TYPE_TEXT, MESSAGE_TYPE_WEB_APP_DATA,
};

/// Borrowed teloxide user, converted with [`ToCoreUser::to_core`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Borrowed teloxide message, converted with [`ToCoreMessage::to_core`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Option<Message> {
        let user = TelegramUserWrapper(self.0.from.as_ref()?).to_core();
        let web_app_data = self.0.web_app_data().map(|d| d.data.clone());
        let photo = self.largest_photo();
        let message_type = if web_app_data.is_some() {
            MESSAGE_TYPE_WEB_APP_DATA
        } else if photo.is_some() {
            MESSAGE_TYPE_PHOTO
        } else {
            MESSAGE_TYPE_TEXT
        };

        Some(Message {
            id: self.0.id.to_string(),
            user,
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            content: self
                .0
                .text()
                .or_else(|| self.0.caption())
                .unwrap_or("")
                .to_string(),
            message_type: message_type.to_string(),
            created_at: chrono::Utc::now(),
            photo,
            web_app_data,
        })
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Telegram lists photo sizes smallest first.
    fn largest_photo(&self) -> Option<Photo> {
        self.0.photo().and_then(|sizes| sizes.last()).map(|size| Photo {
            file_id: size.file.id.0.clone(),
            file_unique_id: size.file.unique_id.0.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn telegram_message(extra: serde_json::Value) -> teloxide::types::Message {
        let value = json!({
            "message_id": 42,
            "date": 1700000000,
            "chat": {"id": 456, "type": "private", "first_name": "Test"},
            "from": {"id": 123, "is_bot": false, "first_name": "Test", "username": "test_user"}
        });
        merged_message(value, extra)
    }

    fn merged_message(
        mut value: serde_json::Value,
        extra: serde_json::Value,
    ) -> teloxide::types::Message {
        if let (Some(base), Some(extra)) = (value.as_object_mut(), extra.as_object()) {
            for (k, v) in extra {
                base.insert(k.clone(), v.clone());
            }
        }
        serde_json::from_value(value).unwrap()
    }

    /// **Test: user id, username and names are copied.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
        assert_eq!(core_user.last_name, Some("User".to_string()));
    }

    /// **Test: a text message keeps its text and sender.**
    #[test]
    fn test_text_message_to_core() {
        let msg = telegram_message(json!({"text": "Food"}));

        let core = TelegramMessageWrapper(&msg).to_core().unwrap();

        assert_eq!(core.id, "42");
        assert_eq!(core.user.id, 123);
        assert_eq!(core.chat.id, 456);
        assert_eq!(core.content, "Food");
        assert_eq!(core.message_type, MESSAGE_TYPE_TEXT);
        assert!(core.photo.is_none());
    }

    /// **Test: a photo message carries the largest size's ids and the caption.**
    #[test]
    fn test_photo_message_to_core() {
        let msg = telegram_message(json!({
            "caption": "my cashbacks",
            "photo": [
                {"file_id": "small", "file_unique_id": "u-small", "width": 90, "height": 60, "file_size": 100},
                {"file_id": "large", "file_unique_id": "u-large", "width": 1280, "height": 853, "file_size": 9000}
            ]
        }));

        let core = TelegramMessageWrapper(&msg).to_core().unwrap();

        assert_eq!(core.message_type, MESSAGE_TYPE_PHOTO);
        assert_eq!(core.content, "my cashbacks");
        assert_eq!(
            core.photo,
            Some(Photo {
                file_id: "large".to_string(),
                file_unique_id: "u-large".to_string(),
            })
        );
    }

    /// **Test: web-app data is passed through as the raw payload.**
    #[test]
    fn test_web_app_message_to_core() {
        let payload = r#"{"bank":"Alpha","category":"Taxi","percent":5}"#;
        let msg = telegram_message(json!({
            "web_app_data": {"data": payload, "button_text": "Open app"}
        }));

        let core = TelegramMessageWrapper(&msg).to_core().unwrap();

        assert_eq!(core.message_type, MESSAGE_TYPE_WEB_APP_DATA);
        assert_eq!(core.web_app_data.as_deref(), Some(payload));
    }

    /// **Test: an update without a sender is not turned into a message.**
    #[test]
    fn test_message_without_sender_is_skipped() {
        let value = json!({
            "message_id": 7,
            "date": 1700000000,
            "chat": {"id": 456, "type": "private", "first_name": "Test"}
        });
        let msg = merged_message(value, json!({"text": "Food"}));

        assert!(TelegramMessageWrapper(&msg).to_core().is_none());
    }
}
