//! Telegram front end for the TravelConnect eSIM assistant.
//!
//! A menu-driven bot that answers taps and typed text with pre-written
//! product information, coverage and pricing, and links to the purchase
//! site. Routing lives in `esim-core`; this crate connects it to Telegram.
//!
//! # Environment Variables
//!
//! Required:
//! - `TELEGRAM_BOT_TOKEN`: Bot token from @BotFather
//!
//! Optional:
//! - `ESIM_BOT_CONFIG_DIR`: Directory holding `.env.local`
//! - `RUST_LOG`: Log filter, overrides `-v`
//!
//! # Example
//!
//! ```no_run
//! use esim_telegram::{EsimBot, PollingOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bot = EsimBot::new()?;
//!     bot.start_polling(PollingOptions::default()).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Commands
//!
//! - `/start` - Greeting and main menu
//! - `/help` - Frequently asked questions
//! - `/status` - Liveness check

pub mod bot;
pub mod envelope;
pub mod error;
pub mod event;
pub mod handlers;
pub mod outbound;

pub use bot::{EsimBot, PollingOptions};
pub use envelope::{fallback, guard, Notice, Outcome};
pub use error::{Result, TelegramError};
pub use event::{CallbackEvent, MessageEvent, MessageRef, Sender};
pub use handlers::Command;
pub use outbound::{Outbound, TelegramOutbound};
