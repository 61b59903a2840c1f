//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use esim_core::Reply;
use esim_telegram::{CallbackEvent, MessageEvent, MessageRef, Outbound, Sender, TelegramError};
use teloxide::types::{ChatId, MessageId, UserId};
use teloxide::{ApiError, RequestError};

pub const CHAT: ChatId = ChatId(1001);
pub const ORIGIN: MessageRef = MessageRef {
    chat_id: CHAT,
    message_id: MessageId(77),
};

/// One outbound call as seen by the platform.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Send(ChatId, Reply),
    Edit(MessageRef, Reply),
    Answer(String),
}

/// Records every outbound call. Sends can be made to fail.
#[derive(Default)]
pub struct RecordingOutbound {
    calls: Mutex<Vec<Call>>,
    failing_sends: AtomicUsize,
    fail_answers: AtomicBool,
}

impl RecordingOutbound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `n` sends fail before being recorded.
    pub fn fail_next_sends(&self, n: usize) {
        self.failing_sends.store(n, Ordering::SeqCst);
    }

    pub fn fail_answers(&self) {
        self.fail_answers.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<Reply> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Send(_, reply) => Some(reply),
                _ => None,
            })
            .collect()
    }

    pub fn edited(&self) -> Vec<Reply> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Edit(_, reply) => Some(reply),
                _ => None,
            })
            .collect()
    }
}

fn blocked() -> TelegramError {
    TelegramError::Request(RequestError::Api(ApiError::BotBlocked))
}

#[async_trait]
impl Outbound for RecordingOutbound {
    async fn send(&self, chat_id: ChatId, reply: &Reply) -> esim_telegram::Result<()> {
        let fail = self
            .failing_sends
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if fail {
            return Err(blocked());
        }
        self.calls.lock().unwrap().push(Call::Send(chat_id, reply.clone()));
        Ok(())
    }

    async fn edit(&self, target: MessageRef, reply: &Reply) -> esim_telegram::Result<()> {
        self.calls.lock().unwrap().push(Call::Edit(target, reply.clone()));
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> esim_telegram::Result<()> {
        if self.fail_answers.load(Ordering::SeqCst) {
            return Err(blocked());
        }
        self.calls
            .lock()
            .unwrap()
            .push(Call::Answer(callback_id.to_string()));
        Ok(())
    }
}

pub fn sender() -> Sender {
    Sender {
        id: UserId(42),
        username: Some("traveller".to_string()),
        full_name: "Anna Petrova".to_string(),
    }
}

pub fn text_event(text: &str) -> MessageEvent {
    MessageEvent {
        chat_id: CHAT,
        sender: Some(sender()),
        text: text.to_string(),
    }
}

pub fn callback_event(data: &str) -> CallbackEvent {
    CallbackEvent {
        id: "cbq-1".to_string(),
        sender: sender(),
        data: Some(data.to_string()),
        origin: Some(ORIGIN),
    }
}
