//! Button-press router.

use crate::content::{content, Topic, HELP_CALLBACK};
use crate::reply::Reply;
use crate::tariffs::{tariff, Region};
use crate::texts;

/// What a callback identifier asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    Tariff(Region),
    Help,
    Unrecognized,
}

/// How the reply to a callback is delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackReply {
    /// Replace the message the button was attached to.
    Edit(Reply),
    /// Post a fresh message in the same chat.
    SendNew(Reply),
}

impl CallbackReply {
    pub fn reply(&self) -> &Reply {
        match self {
            CallbackReply::Edit(reply) | CallbackReply::SendNew(reply) => reply,
        }
    }
}

/// Classify a callback identifier.
pub fn resolve(data: &str) -> CallbackAction {
    if let Some(region) = Region::from_callback_id(data) {
        CallbackAction::Tariff(region)
    } else if data == HELP_CALLBACK {
        CallbackAction::Help
    } else {
        CallbackAction::Unrecognized
    }
}

/// Build the reply for a callback identifier.
///
/// Help is posted as a new message. Everything else edits in place.
pub fn route_callback(data: &str) -> CallbackReply {
    match resolve(data) {
        CallbackAction::Tariff(region) => match tariff(region) {
            Some(entry) => CallbackReply::Edit(entry.reply()),
            None => CallbackReply::Edit(Reply::plain(texts::TARIFF_NOT_FOUND)),
        },
        CallbackAction::Help => CallbackReply::SendNew(content().reply(Topic::Help).clone()),
        CallbackAction::Unrecognized => {
            CallbackReply::Edit(Reply::plain(texts::CALLBACK_NOT_RECOGNIZED))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::ButtonAction;

    #[test]
    fn test_resolve() {
        assert_eq!(resolve("eu_tariff"), CallbackAction::Tariff(Region::Europe));
        assert_eq!(resolve("africa_tariff"), CallbackAction::Tariff(Region::Africa));
        assert_eq!(resolve("asia_tariff"), CallbackAction::Tariff(Region::Asia));
        assert_eq!(resolve("us_tariff"), CallbackAction::Tariff(Region::America));
        assert_eq!(resolve("help"), CallbackAction::Help);
        assert_eq!(resolve("bogus"), CallbackAction::Unrecognized);
        assert_eq!(resolve(""), CallbackAction::Unrecognized);
        assert_eq!(resolve("HELP"), CallbackAction::Unrecognized);
    }

    #[test]
    fn test_region_callbacks_edit_with_price_list() {
        for region in Region::ALL {
            let routed = route_callback(&region.callback_id());
            let CallbackReply::Edit(reply) = routed else {
                panic!("{:?} should edit in place", region);
            };
            let entry = tariff(region).unwrap();
            assert!(reply.text.contains(entry.prices));
            assert!(reply.text.contains(entry.name));

            let buttons: Vec<_> = reply.buttons().collect();
            assert_eq!(buttons.len(), 1);
            assert!(matches!(buttons[0].action, ButtonAction::Url(_)));
        }
    }

    #[test]
    fn test_help_callback_sends_new_message() {
        let routed = route_callback("help");
        assert_eq!(
            routed,
            CallbackReply::SendNew(content().reply(Topic::Help).clone())
        );
        assert_eq!(routed.reply(), content().reply(Topic::Help));
    }

    #[test]
    fn test_unknown_callback_edits_not_recognized() {
        let routed = route_callback("bogus");
        assert_eq!(
            routed,
            CallbackReply::Edit(Reply::plain(texts::CALLBACK_NOT_RECOGNIZED))
        );
        assert_eq!(routed.reply().text, texts::CALLBACK_NOT_RECOGNIZED);
    }
}
