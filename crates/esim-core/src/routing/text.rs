//! Free-text router.
//!
//! Input is matched in three passes, first hit wins:
//!
//! 1. the case-folded, trimmed text equals a menu label (glyph included);
//! 2. with decorative glyphs removed it equals a plain label;
//! 3. some plain label occurs inside the cleaned text, checked in
//!    [`Topic::ALL`] order.
//!
//! Anything else gets the "use the menu" guidance reply.
//!
//! Pass 3 is deliberately loose and order-dependent: "купить тарифы"
//! resolves to [`Topic::Tariffs`] only because tariffs precede buy in the
//! enumeration. Tests pin that order.

use tracing::debug;

use crate::content::Topic;

/// Decorative glyphs that may prefix menu labels.
const DECORATIVE_GLYPHS: [&str; 7] = ["📱", "🌍", "💳", "🛒", "❓", "📞", "⚙️"];

/// Which pass produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    MenuLabel,
    PlainLabel,
    Substring,
}

/// Result of routing one text message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRoute {
    Topic { topic: Topic, matched_by: MatchKind },
    /// Nothing matched; reply with the menu guidance.
    Guidance,
}

impl TextRoute {
    pub fn topic(self) -> Option<Topic> {
        match self {
            TextRoute::Topic { topic, .. } => Some(topic),
            TextRoute::Guidance => None,
        }
    }
}

/// Case-fold and trim.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Remove every decorative glyph and trim again.
pub fn strip_glyphs(text: &str) -> String {
    let mut cleaned = text.to_string();
    for glyph in DECORATIVE_GLYPHS {
        if cleaned.contains(glyph) {
            cleaned = cleaned.replace(glyph, "");
        }
    }
    cleaned.trim().to_string()
}

/// Resolve raw message text to a topic or the guidance fallback.
pub fn route_text(raw: &str) -> TextRoute {
    let text = normalize(raw);

    if let Some(topic) = Topic::ALL
        .into_iter()
        .find(|t| t.menu_label().to_lowercase() == text)
    {
        return matched(topic, MatchKind::MenuLabel);
    }

    let cleaned = strip_glyphs(&text);

    if let Some(topic) = Topic::ALL.into_iter().find(|t| t.plain_label() == cleaned) {
        return matched(topic, MatchKind::PlainLabel);
    }

    if let Some(topic) = Topic::ALL
        .into_iter()
        .find(|t| cleaned.contains(t.plain_label()))
    {
        return matched(topic, MatchKind::Substring);
    }

    debug!(text = %cleaned, "No topic matched");
    TextRoute::Guidance
}

fn matched(topic: Topic, matched_by: MatchKind) -> TextRoute {
    debug!(topic = %topic, ?matched_by, "Text routed");
    TextRoute::Topic { topic, matched_by }
}
