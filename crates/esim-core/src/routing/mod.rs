//! Resolution of inbound text and button presses to replies.
//!
//! Both routers are pure functions of their input. No state is carried
//! between events.

pub mod callback;
pub mod text;

pub use callback::{resolve, route_callback, CallbackAction, CallbackReply};
pub use text::{normalize, route_text, strip_glyphs, MatchKind, TextRoute};
