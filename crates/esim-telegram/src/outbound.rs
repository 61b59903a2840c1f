//! Outbound capability used by the handlers.
//!
//! Handlers talk to [`Outbound`] instead of `teloxide::Bot` so they can be
//! exercised without the network. [`TelegramOutbound`] is the production
//! implementation.

use async_trait::async_trait;
use esim_core::{Button, ButtonAction, Keyboard, Reply, TextFormat};
use teloxide::payloads::{EditMessageTextSetters, SendMessageSetters};
use teloxide::prelude::*;
use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
    LinkPreviewOptions, ParseMode,
};
use tracing::debug;
use url::Url;

use crate::error::Result;
use crate::event::MessageRef;

/// Everything the routing layer needs from the chat platform.
#[async_trait]
pub trait Outbound: Send + Sync {
    /// Post a new message.
    async fn send(&self, chat_id: ChatId, reply: &Reply) -> Result<()>;

    /// Replace the content of an existing message.
    async fn edit(&self, target: MessageRef, reply: &Reply) -> Result<()>;

    /// Acknowledge a button press so the client stops showing a spinner.
    async fn answer_callback(&self, callback_id: &str) -> Result<()>;
}

/// [`Outbound`] over the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramOutbound {
    bot: Bot,
}

impl TelegramOutbound {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Outbound for TelegramOutbound {
    async fn send(&self, chat_id: ChatId, reply: &Reply) -> Result<()> {
        let mut req = self
            .bot
            .send_message(chat_id, &reply.text)
            .link_preview_options(no_link_preview());

        if let Some(mode) = parse_mode(reply.format) {
            req = req.parse_mode(mode);
        }

        match &reply.keyboard {
            Keyboard::None => {}
            Keyboard::Inline(rows) => req = req.reply_markup(inline_markup(rows)?),
            Keyboard::Menu(rows) => req = req.reply_markup(menu_markup(rows)),
        }

        req.await?;
        Ok(())
    }

    async fn edit(&self, target: MessageRef, reply: &Reply) -> Result<()> {
        let mut req = self
            .bot
            .edit_message_text(target.chat_id, target.message_id, &reply.text)
            .link_preview_options(no_link_preview());

        if let Some(mode) = parse_mode(reply.format) {
            req = req.parse_mode(mode);
        }

        match &reply.keyboard {
            Keyboard::None => {}
            Keyboard::Inline(rows) => req = req.reply_markup(inline_markup(rows)?),
            // Telegram only allows inline keyboards on edited messages.
            Keyboard::Menu(_) => {
                debug!(chat_id = %target.chat_id, "Dropping menu keyboard on edit");
            }
        }

        req.await?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.bot.answer_callback_query(callback_id.to_string()).await?;
        Ok(())
    }
}

fn no_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

fn parse_mode(format: TextFormat) -> Option<ParseMode> {
    match format {
        TextFormat::Plain => None,
        TextFormat::Html => Some(ParseMode::Html),
    }
}

/// Convert button rows to a Telegram inline keyboard.
pub fn inline_markup(rows: &[Vec<Button>]) -> Result<InlineKeyboardMarkup> {
    let rows = rows
        .iter()
        .map(|row| row.iter().map(inline_button).collect::<Result<Vec<_>>>())
        .collect::<Result<Vec<_>>>()?;
    Ok(InlineKeyboardMarkup::new(rows))
}

fn inline_button(button: &Button) -> Result<InlineKeyboardButton> {
    Ok(match &button.action {
        ButtonAction::Url(url) => InlineKeyboardButton::url(button.label.clone(), Url::parse(url)?),
        ButtonAction::Callback(data) => {
            InlineKeyboardButton::callback(button.label.clone(), data.clone())
        }
    })
}

/// Convert label rows to a resized persistent menu keyboard.
pub fn menu_markup(rows: &[Vec<String>]) -> KeyboardMarkup {
    KeyboardMarkup::new(
        rows.iter()
            .map(|row| row.iter().map(|label| KeyboardButton::new(label.clone())).collect::<Vec<_>>()),
    )
    .resize_keyboard()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TelegramError;
    use esim_core::{content, Topic};
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn test_inline_markup_keeps_layout() {
        let Keyboard::Inline(rows) = &content().reply(Topic::Tariffs).keyboard else {
            panic!("tariffs should carry inline buttons");
        };
        let markup = inline_markup(rows).unwrap();
        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0].len(), 2);
        assert_eq!(markup.inline_keyboard[0][0].text, "🇪🇺 Европа");
        assert!(matches!(
            &markup.inline_keyboard[0][0].kind,
            InlineKeyboardButtonKind::CallbackData(data) if data == "eu_tariff"
        ));
    }

    #[test]
    fn test_inline_markup_url_buttons() {
        let rows = vec![vec![Button::url("Go", "https://travelconnect.online/?p=312")]];
        let markup = inline_markup(&rows).unwrap();
        assert!(matches!(
            &markup.inline_keyboard[0][0].kind,
            InlineKeyboardButtonKind::Url(url) if url.as_str() == "https://travelconnect.online/?p=312"
        ));
    }

    #[test]
    fn test_inline_markup_rejects_bad_url() {
        let rows = vec![vec![Button::url("Broken", "not a url")]];
        let err = inline_markup(&rows).unwrap_err();
        assert!(matches!(err, TelegramError::InvalidUrl(_)));
    }

    #[test]
    fn test_menu_markup() {
        let markup = menu_markup(content().main_menu());
        assert_eq!(markup.keyboard.len(), 4);
        assert_eq!(markup.keyboard[3][0].text, "⚙️ Инструкция");
    }
}
