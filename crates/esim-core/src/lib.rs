//! eSIM Core - menu content and message routing for the TravelConnect eSIM bot.
//!
//! This crate is independent of the chat platform. It provides:
//!
//! - **content**: the closed set of menu topics and their replies
//! - **tariffs**: per-region price lists behind the tariff buttons
//! - **routing**: free-text and button-press routers
//! - **reply**: platform-neutral reply model (text, format, keyboard)
//! - **config**: env-file loading and token lookup
//!
//! # Example
//!
//! ```
//! use esim_core::routing::route_text;
//! use esim_core::Topic;
//!
//! assert_eq!(route_text("хочу купить").topic(), Some(Topic::Buy));
//! assert_eq!(route_text("").topic(), None);
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod reply;
pub mod routing;
pub mod tariffs;
pub mod texts;

pub use content::{content, ContentTable, Topic, HELP_CALLBACK};
pub use error::{ConfigError, Result};
pub use reply::{Button, ButtonAction, Keyboard, Reply, TextFormat};
pub use routing::{route_callback, route_text, CallbackAction, CallbackReply, MatchKind, TextRoute};
pub use tariffs::{tariff, Region, RegionTariff};
