//! Static menu sections and their replies.
//!
//! The topic set is closed and every topic owns exactly one reply. Replies
//! are built once on first access and shared read-only afterwards, so
//! concurrent handlers need no locking.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::reply::{Button, Reply};
use crate::tariffs;
use crate::texts;

/// Callback identifier of the help button.
pub const HELP_CALLBACK: &str = "help";

/// One static menu section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    About,
    Coverage,
    Tariffs,
    Buy,
    Help,
    Contacts,
    Instructions,
}

impl Topic {
    /// Every topic in enumeration order.
    ///
    /// The text router's substring fallback walks this array and stops at
    /// the first hit, so reordering it changes which topic ambiguous input
    /// lands on.
    pub const ALL: [Topic; 7] = [
        Topic::About,
        Topic::Coverage,
        Topic::Tariffs,
        Topic::Buy,
        Topic::Help,
        Topic::Contacts,
        Topic::Instructions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Topic::About => "about",
            Topic::Coverage => "coverage",
            Topic::Tariffs => "tariffs",
            Topic::Buy => "buy",
            Topic::Help => "help",
            Topic::Contacts => "contacts",
            Topic::Instructions => "instructions",
        }
    }

    /// Label shown on the main menu keyboard, glyph included.
    pub fn menu_label(self) -> &'static str {
        match self {
            Topic::About => "📱 О eSIM",
            Topic::Coverage => "🌍 Страны",
            Topic::Tariffs => "💳 Тарифы",
            Topic::Buy => "🛒 Купить",
            Topic::Help => "❓ Помощь",
            Topic::Contacts => "📞 Контакты",
            Topic::Instructions => "⚙️ Инструкция",
        }
    }

    /// Lowercase label without the decorative glyph.
    pub fn plain_label(self) -> &'static str {
        match self {
            Topic::About => "о esim",
            Topic::Coverage => "страны",
            Topic::Tariffs => "тарифы",
            Topic::Buy => "купить",
            Topic::Help => "помощь",
            Topic::Contacts => "контакты",
            Topic::Instructions => "инструкция",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable topic -> reply mapping.
#[derive(Debug)]
pub struct ContentTable {
    replies: HashMap<Topic, Reply>,
    main_menu: Vec<Vec<String>>,
}

impl ContentTable {
    fn build() -> Self {
        let replies = Topic::ALL
            .into_iter()
            .map(|topic| (topic, render(topic)))
            .collect();

        let layout: [&[Topic]; 4] = [
            &[Topic::About, Topic::Coverage],
            &[Topic::Tariffs, Topic::Buy],
            &[Topic::Help, Topic::Contacts],
            &[Topic::Instructions],
        ];
        let main_menu = layout
            .iter()
            .map(|row| row.iter().map(|t| t.menu_label().to_string()).collect())
            .collect();

        Self { replies, main_menu }
    }

    /// Reply for `topic`.
    pub fn reply(&self, topic: Topic) -> &Reply {
        // `build` renders every member of `Topic::ALL`.
        &self.replies[&topic]
    }

    /// Rows of the persistent main menu keyboard.
    pub fn main_menu(&self) -> &[Vec<String>] {
        &self.main_menu
    }

    /// Greeting sent by `/start`, with the main menu attached.
    pub fn start_reply(&self, mention: &str) -> Reply {
        Reply::html(texts::start_greeting(mention)).with_menu(self.main_menu.clone())
    }
}

fn render(topic: Topic) -> Reply {
    match topic {
        Topic::About => Reply::html(texts::ABOUT),
        Topic::Coverage => Reply::html(texts::COVERAGE).with_buttons(vec![vec![Button::url(
            texts::COVERAGE_BUTTON,
            texts::PURCHASE_URL,
        )]]),
        Topic::Tariffs => tariffs::region_menu(),
        Topic::Buy => Reply::html(texts::BUY).with_buttons(vec![
            vec![Button::url(texts::BUY_ORDER_BUTTON, texts::PURCHASE_URL)],
            vec![Button::url(texts::BUY_TARIFFS_BUTTON, texts::PURCHASE_URL)],
            vec![Button::callback(texts::HELP_BUTTON, HELP_CALLBACK)],
        ]),
        Topic::Help => Reply::html(texts::HELP),
        Topic::Contacts => Reply::html(texts::CONTACTS).with_buttons(vec![vec![Button::url(
            texts::CONTACTS_BUTTON,
            texts::PURCHASE_URL,
        )]]),
        Topic::Instructions => Reply::html(texts::INSTRUCTIONS),
    }
}

static CONTENT: OnceLock<ContentTable> = OnceLock::new();

/// The process-wide content table.
pub fn content() -> &'static ContentTable {
    CONTENT.get_or_init(ContentTable::build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::{ButtonAction, Keyboard};

    #[test]
    fn test_every_topic_has_a_reply() {
        let table = content();
        for topic in Topic::ALL {
            assert!(!table.reply(topic).text.is_empty(), "{} is empty", topic);
        }
    }

    #[test]
    fn test_plain_label_is_lowercased_menu_label_suffix() {
        for topic in Topic::ALL {
            let menu = topic.menu_label().to_lowercase();
            assert!(
                menu.ends_with(topic.plain_label()),
                "{} does not end with {}",
                menu,
                topic.plain_label()
            );
        }
    }

    #[test]
    fn test_buy_offers_help_callback() {
        let buy = content().reply(Topic::Buy);
        let callbacks: Vec<_> = buy
            .buttons()
            .filter_map(|b| match &b.action {
                ButtonAction::Callback(data) => Some(data.as_str()),
                ButtonAction::Url(_) => None,
            })
            .collect();
        assert_eq!(callbacks, vec![HELP_CALLBACK]);
        assert_eq!(buy.buttons().count(), 3);
    }

    #[test]
    fn test_main_menu_contains_every_topic_once() {
        let labels: Vec<_> = content().main_menu().iter().flatten().cloned().collect();
        assert_eq!(labels.len(), Topic::ALL.len());
        for topic in Topic::ALL {
            assert!(labels.iter().any(|l| l == topic.menu_label()));
        }
    }

    #[test]
    fn test_start_reply_attaches_menu() {
        let reply = content().start_reply("<b>Ann</b>");
        assert!(reply.text.starts_with("Привет, <b>Ann</b>!"));
        assert!(matches!(reply.keyboard, Keyboard::Menu(ref rows) if rows.len() == 4));
    }
}
