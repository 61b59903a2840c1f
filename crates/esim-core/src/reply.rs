//! Platform-neutral description of an outbound message.

/// How the body text of a reply should be interpreted by the chat platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    /// Sent verbatim.
    Plain,
    /// Telegram HTML subset (`<b>`, `<i>`, `<a>`, ...).
    Html,
}

/// What a button does when pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Opens an external link.
    Url(String),
    /// Delivers an opaque identifier back to the callback router.
    Callback(String),
}

/// An inline action button attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    /// Button that opens `url`.
    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Url(url.into()),
        }
    }

    /// Button that sends `data` back as a callback.
    pub fn callback(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Callback(data.into()),
        }
    }
}

/// Keyboard attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Keyboard {
    #[default]
    None,
    /// Buttons rendered under the message itself.
    Inline(Vec<Vec<Button>>),
    /// Persistent menu shown in place of the input keyboard. Pressing a
    /// label sends it back as ordinary text.
    Menu(Vec<Vec<String>>),
}

/// A complete reply: body, format and optional keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub format: TextFormat,
    pub keyboard: Keyboard,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
            keyboard: Keyboard::None,
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Html,
            keyboard: Keyboard::None,
        }
    }

    /// Attach a grid of inline buttons.
    pub fn with_buttons(mut self, rows: Vec<Vec<Button>>) -> Self {
        self.keyboard = Keyboard::Inline(rows);
        self
    }

    /// Attach a persistent menu keyboard.
    pub fn with_menu(mut self, rows: Vec<Vec<String>>) -> Self {
        self.keyboard = Keyboard::Menu(rows);
        self
    }

    /// All inline buttons in row order. Empty for non-inline keyboards.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        let rows: &[Vec<Button>] = match &self.keyboard {
            Keyboard::Inline(rows) => rows,
            _ => &[],
        };
        rows.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_flattens_inline_rows() {
        let reply = Reply::html("x").with_buttons(vec![
            vec![Button::callback("a", "a"), Button::callback("b", "b")],
            vec![Button::url("c", "https://example.com")],
        ]);
        let labels: Vec<_> = reply.buttons().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_menu_keyboard_has_no_inline_buttons() {
        let reply = Reply::plain("x").with_menu(vec![vec!["one".to_string()]]);
        assert_eq!(reply.buttons().count(), 0);
        assert_eq!(reply.format, TextFormat::Plain);
    }
}
