//! Main Telegram bot implementation.

use std::sync::Arc;
use std::time::Duration;

use esim_core::config;
use teloxide::dispatching::UpdateFilterExt;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use teloxide::update_listeners::Polling;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

use crate::envelope;
use crate::error::{Result, TelegramError};
use crate::event::{CallbackEvent, MessageEvent};
use crate::handlers::{
    handle_callback, handle_command, handle_text, handle_unknown_command, Command,
};
use crate::outbound::{Outbound, TelegramOutbound};

/// Default long-polling timeout.
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 20;

/// Long-polling settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingOptions {
    /// How long each getUpdates request may wait for new updates.
    pub timeout: Duration,
    /// Skip updates that queued up while the bot was offline.
    pub drop_pending_updates: bool,
}

impl Default for PollingOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_POLL_TIMEOUT_SECS),
            drop_pending_updates: true,
        }
    }
}

/// The eSIM assistant bot.
pub struct EsimBot {
    /// The teloxide bot instance.
    bot: Bot,
    /// Outbound capability shared by all handlers.
    outbound: Arc<dyn Outbound>,
}

impl EsimBot {
    /// Create a new bot.
    ///
    /// Requires `TELEGRAM_BOT_TOKEN` environment variable to be set.
    pub fn new() -> Result<Self> {
        let token = config::bot_token().ok_or(TelegramError::NoToken)?;
        Ok(Self::with_token(token))
    }

    /// Create a bot from an explicit token.
    pub fn with_token(token: impl Into<String>) -> Self {
        let bot = Bot::new(token);
        let outbound = Arc::new(TelegramOutbound::new(bot.clone()));
        Self { bot, outbound }
    }

    /// Get the bot's username. Fails if the token is rejected.
    pub async fn get_me(&self) -> Result<String> {
        let me = self
            .bot
            .get_me()
            .await
            .map_err(|e| TelegramError::BotStartFailed(e.to_string()))?;
        Ok(me.username().to_string())
    }

    /// Publish the command list shown in Telegram's command menu.
    pub async fn register_commands(&self) {
        if let Err(e) = self.bot.set_my_commands(Command::bot_commands()).await {
            warn!(error = %e, "Failed to register bot commands");
        }
    }

    /// Start the bot in long-polling mode. Returns when the dispatcher stops.
    pub async fn start_polling(&self, options: PollingOptions) -> Result<()> {
        info!(
            timeout_secs = options.timeout.as_secs(),
            drop_pending = options.drop_pending_updates,
            "Starting Telegram bot in polling mode..."
        );

        self.register_commands().await;

        let outbound_for_callbacks = Arc::clone(&self.outbound);
        let outbound_for_commands = Arc::clone(&self.outbound);
        let outbound_for_unknown = Arc::clone(&self.outbound);
        let outbound_for_text = Arc::clone(&self.outbound);

        let handler = dptree::entry()
            .branch(
                Update::filter_callback_query().endpoint(move |q: CallbackQuery| {
                    let outbound = Arc::clone(&outbound_for_callbacks);
                    async move { callback_endpoint(outbound, q).await }
                }),
            )
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |msg: Message, cmd: Command| {
                        let outbound = Arc::clone(&outbound_for_commands);
                        info!(chat_id = %msg.chat.id, "Command matched: {:?}", cmd);
                        async move { command_endpoint(outbound, msg, cmd).await }
                    }),
            )
            .branch(
                Update::filter_message()
                    .filter(|msg: Message| {
                        // Unrecognized commands (start with / but didn't parse)
                        msg.text().map(|t| t.starts_with('/')).unwrap_or(false)
                    })
                    .endpoint(move |msg: Message| {
                        let outbound = Arc::clone(&outbound_for_unknown);
                        async move { unknown_command_endpoint(outbound, msg).await }
                    }),
            )
            .branch(
                Update::filter_message()
                    .filter(|msg: Message| {
                        msg.text().map(|t| !t.starts_with('/')).unwrap_or(false)
                    })
                    .endpoint(move |msg: Message| {
                        let outbound = Arc::clone(&outbound_for_text);
                        async move { text_endpoint(outbound, msg).await }
                    }),
            );

        let mut listener = Polling::builder(self.bot.clone()).timeout(options.timeout);
        if options.drop_pending_updates {
            listener = listener.drop_pending_updates();
        }
        let listener = listener.build();

        info!("Bot is running! Send /start to begin.");

        Dispatcher::builder(self.bot.clone(), handler)
            .default_handler(|upd| async move {
                warn!("Unhandled update: {:?}", upd);
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch_with_listener(
                listener,
                LoggingErrorHandler::with_custom_text("An error from the update listener"),
            )
            .await;

        info!("Bot has stopped");
        Ok(())
    }
}

async fn callback_endpoint(outbound: Arc<dyn Outbound>, q: CallbackQuery) -> ResponseResult<()> {
    let out = outbound.as_ref();
    let chat_id = q.message.as_ref().map(|m| m.chat().id);
    envelope::fallback(out, "callback_endpoint", chat_id, async {
        let event = CallbackEvent::from_query(&q);
        envelope::guard(out, "handle_callback", event.chat_id(), handle_callback(out, &event))
            .await;
        Ok::<(), TelegramError>(())
    })
    .await;
    Ok(())
}

async fn command_endpoint(
    outbound: Arc<dyn Outbound>,
    msg: Message,
    cmd: Command,
) -> ResponseResult<()> {
    let out = outbound.as_ref();
    envelope::fallback(out, "command_endpoint", Some(msg.chat.id), async {
        let event = message_event(&msg)?;
        envelope::guard(out, "handle_command", Some(event.chat_id), handle_command(out, &event, cmd))
            .await;
        Ok::<(), TelegramError>(())
    })
    .await;
    Ok(())
}

async fn unknown_command_endpoint(outbound: Arc<dyn Outbound>, msg: Message) -> ResponseResult<()> {
    let out = outbound.as_ref();
    envelope::fallback(out, "unknown_command_endpoint", Some(msg.chat.id), async {
        let event = message_event(&msg)?;
        envelope::guard(
            out,
            "handle_unknown_command",
            Some(event.chat_id),
            handle_unknown_command(out, &event),
        )
        .await;
        Ok::<(), TelegramError>(())
    })
    .await;
    Ok(())
}

async fn text_endpoint(outbound: Arc<dyn Outbound>, msg: Message) -> ResponseResult<()> {
    let out = outbound.as_ref();
    envelope::fallback(out, "text_endpoint", Some(msg.chat.id), async {
        let event = message_event(&msg)?;
        envelope::guard(out, "handle_text", Some(event.chat_id), handle_text(out, &event)).await;
        Ok::<(), TelegramError>(())
    })
    .await;
    Ok(())
}

/// The branch filters only admit text messages.
fn message_event(msg: &Message) -> Result<MessageEvent> {
    MessageEvent::from_message(msg).ok_or(TelegramError::MissingText)
}
