//! Command, text and callback handlers for the Telegram bot.
//!
//! Handlers receive platform-neutral events and an [`Outbound`]; they are
//! wrapped in the error envelope by the dispatcher, so they simply
//! propagate failures with `?`.

use esim_core::routing::{normalize, route_callback, route_text, CallbackReply, TextRoute};
use esim_core::{content, texts, Reply, Topic};
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

use crate::error::{Result, TelegramError};
use crate::event::{CallbackEvent, MessageEvent};
use crate::outbound::Outbound;

/// Bot commands that can be invoked with /.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "Показать главное меню")]
    Start,

    #[command(description = "Частые вопросы и справка")]
    Help,

    #[command(description = "Проверить работу бота")]
    Status,
}

/// Handle the /start command.
pub async fn handle_start(outbound: &dyn Outbound, event: &MessageEvent) -> Result<()> {
    let sender = event.sender.as_ref().ok_or(TelegramError::MissingSender)?;

    info!(
        chat_id = %event.chat_id,
        user_id = sender.id.0,
        username = ?sender.username,
        "User started the bot"
    );

    let reply = content().start_reply(&sender.mention_html());
    outbound.send(event.chat_id, &reply).await
}

/// Handle the /help command.
pub async fn handle_help(outbound: &dyn Outbound, event: &MessageEvent) -> Result<()> {
    show_topic(outbound, event, Topic::Help).await
}

/// Handle the /status command.
pub async fn handle_status(outbound: &dyn Outbound, event: &MessageEvent) -> Result<()> {
    info!(chat_id = %event.chat_id, user_id = ?event.user_id(), "User checked status");
    outbound
        .send(event.chat_id, &Reply::plain(texts::STATUS_OK))
        .await
}

/// Dispatch commands to appropriate handlers.
pub async fn handle_command(
    outbound: &dyn Outbound,
    event: &MessageEvent,
    cmd: Command,
) -> Result<()> {
    match cmd {
        Command::Start => handle_start(outbound, event).await,
        Command::Help => handle_help(outbound, event).await,
        Command::Status => handle_status(outbound, event).await,
    }
}

/// Handle a slash command that did not parse as a [`Command`].
///
/// Never reaches the text router, so `/купить` does not match a topic.
pub async fn handle_unknown_command(outbound: &dyn Outbound, event: &MessageEvent) -> Result<()> {
    info!(
        chat_id = %event.chat_id,
        user_id = ?event.user_id(),
        command = %event.text,
        "User sent unknown command"
    );
    outbound
        .send(event.chat_id, &Reply::plain(texts::UNKNOWN_COMMAND))
        .await
}

/// Handle free text: menu taps and typed messages. Sends exactly one reply.
pub async fn handle_text(outbound: &dyn Outbound, event: &MessageEvent) -> Result<()> {
    info!(
        chat_id = %event.chat_id,
        user_id = ?event.user_id(),
        text = %normalize(&event.text),
        "User sent message"
    );

    match route_text(&event.text) {
        TextRoute::Topic { topic, .. } => show_topic(outbound, event, topic).await,
        TextRoute::Guidance => {
            outbound
                .send(event.chat_id, &Reply::plain(texts::GUIDANCE))
                .await
        }
    }
}

async fn show_topic(outbound: &dyn Outbound, event: &MessageEvent, topic: Topic) -> Result<()> {
    info!(
        chat_id = %event.chat_id,
        user_id = ?event.user_id(),
        topic = %topic,
        "User requested topic"
    );
    outbound.send(event.chat_id, content().reply(topic)).await
}

/// Handle an inline button press.
///
/// The press is acknowledged first, whatever happens next. A failed
/// acknowledgement is logged and does not stop the reply.
pub async fn handle_callback(outbound: &dyn Outbound, event: &CallbackEvent) -> Result<()> {
    if let Err(e) = outbound.answer_callback(&event.id).await {
        warn!(callback_id = %event.id, error = %e, "Failed to answer callback query");
    }

    let data = event.data.as_deref().unwrap_or_default();
    info!(
        user_id = event.sender.id.0,
        chat_id = ?event.chat_id(),
        data = %data,
        "User pressed button"
    );

    let origin = event.origin.ok_or(TelegramError::MissingOrigin)?;

    match route_callback(data) {
        CallbackReply::Edit(reply) => outbound.edit(origin, &reply).await,
        CallbackReply::SendNew(reply) => outbound.send(origin.chat_id, &reply).await,
    }
}
