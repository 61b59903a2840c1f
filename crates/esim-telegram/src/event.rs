//! Inbound events, decoupled from teloxide's update types.

use teloxide::types::{CallbackQuery, ChatId, Message, MessageId, User, UserId};
use teloxide::utils::html;

/// The user an event came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub id: UserId,
    pub username: Option<String>,
    pub full_name: String,
}

impl Sender {
    /// HTML link that mentions the user by name.
    pub fn mention_html(&self) -> String {
        html::user_mention(self.id, &self.full_name)
    }
}

impl From<&User> for Sender {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            full_name: user.full_name(),
        }
    }
}

/// A message the bot can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRef {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

/// A text message (free text or slash command).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEvent {
    pub chat_id: ChatId,
    pub sender: Option<Sender>,
    pub text: String,
}

impl MessageEvent {
    /// `None` for messages without text (stickers, photos, ...).
    pub fn from_message(msg: &Message) -> Option<Self> {
        Some(Self {
            chat_id: msg.chat.id,
            sender: msg.from.as_ref().map(Sender::from),
            text: msg.text()?.to_string(),
        })
    }

    pub fn user_id(&self) -> Option<u64> {
        self.sender.as_ref().map(|s| s.id.0)
    }
}

/// A button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackEvent {
    /// Query id used to acknowledge the press.
    pub id: String,
    pub sender: Sender,
    pub data: Option<String>,
    /// Message the pressed button was attached to, if still accessible.
    pub origin: Option<MessageRef>,
}

impl CallbackEvent {
    pub fn from_query(query: &CallbackQuery) -> Self {
        Self {
            id: query.id.clone(),
            sender: Sender::from(&query.from),
            data: query.data.clone(),
            origin: query.message.as_ref().map(|m| MessageRef {
                chat_id: m.chat().id,
                message_id: m.id(),
            }),
        }
    }

    /// Conversation to notify if handling fails.
    pub fn chat_id(&self) -> Option<ChatId> {
        self.origin.map(|o| o.chat_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mention_escapes_name() {
        let sender = Sender {
            id: UserId(42),
            username: None,
            full_name: "Ann <Admin>".to_string(),
        };
        let mention = sender.mention_html();
        assert!(mention.contains("tg://user?id=42"));
        assert!(mention.contains("Ann &lt;Admin&gt;"));
        assert!(!mention.contains("&amp;lt;"));
    }

    #[test]
    fn test_mention_escapes_ampersand_once() {
        let sender = Sender {
            id: UserId(7),
            username: None,
            full_name: "Tom & Jerry".to_string(),
        };
        assert_eq!(
            sender.mention_html(),
            r#"<a href="tg://user?id=7">Tom &amp; Jerry</a>"#
        );
    }

    #[test]
    fn test_callback_chat_follows_origin() {
        let mut event = CallbackEvent {
            id: "q1".to_string(),
            sender: Sender {
                id: UserId(7),
                username: Some("ann".to_string()),
                full_name: "Ann".to_string(),
            },
            data: Some("eu_tariff".to_string()),
            origin: Some(MessageRef {
                chat_id: ChatId(100),
                message_id: MessageId(5),
            }),
        };
        assert_eq!(event.chat_id(), Some(ChatId(100)));

        event.origin = None;
        assert_eq!(event.chat_id(), None);
    }
}
