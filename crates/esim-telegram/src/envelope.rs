//! Fault containment around handlers.
//!
//! Every handler runs inside [`guard`]. A handler that returns an error or
//! panics is logged under its name and the originating chat gets exactly
//! one apology. If that apology cannot be delivered the failure is logged
//! and dropped. Nothing is re-raised and nothing is retried, so a fault in
//! one event never reaches the dispatcher or another conversation.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use esim_core::{texts, Reply};
use futures::FutureExt;
use teloxide::types::ChatId;
use tracing::{error, warn};

use crate::error::Result;
use crate::outbound::Outbound;

/// Which apology to send on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A handler failed while producing its reply.
    HandlerFault,
    /// Something failed outside any handler.
    Unexpected,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Notice::HandlerFault => texts::HANDLER_FAULT,
            Notice::Unexpected => texts::UNEXPECTED_FAULT,
        }
    }
}

/// What happened to a guarded invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The handler failed; `notified` tells whether the apology went out.
    Contained { notified: bool },
}

/// Run a handler with the handler-fault apology.
pub async fn guard<F>(
    outbound: &dyn Outbound,
    handler: &'static str,
    chat_id: Option<ChatId>,
    work: F,
) -> Outcome
where
    F: Future<Output = Result<()>>,
{
    contain(outbound, Notice::HandlerFault, handler, chat_id, work).await
}

/// Top-level fallback used by the dispatcher around each endpoint.
pub async fn fallback<F>(
    outbound: &dyn Outbound,
    endpoint: &'static str,
    chat_id: Option<ChatId>,
    work: F,
) -> Outcome
where
    F: Future<Output = Result<()>>,
{
    contain(outbound, Notice::Unexpected, endpoint, chat_id, work).await
}

async fn contain<F>(
    outbound: &dyn Outbound,
    notice: Notice,
    handler: &'static str,
    chat_id: Option<ChatId>,
    work: F,
) -> Outcome
where
    F: Future<Output = Result<()>>,
{
    let fault = match AssertUnwindSafe(work).catch_unwind().await {
        Ok(Ok(())) => return Outcome::Completed,
        Ok(Err(e)) => e.to_string(),
        Err(payload) => format!("panic: {}", panic_message(payload.as_ref())),
    };

    error!(handler, chat_id = ?chat_id, error = %fault, "Error in handler");

    let Some(chat_id) = chat_id else {
        warn!(handler, "No conversation to notify about the failure");
        return Outcome::Contained { notified: false };
    };

    match outbound.send(chat_id, &Reply::plain(notice.text())).await {
        Ok(()) => Outcome::Contained { notified: true },
        Err(e) => {
            error!(handler, chat_id = %chat_id, error = %e, "Failed to send error message");
            Outcome::Contained { notified: false }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_variants() {
        let static_payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(static_payload.as_ref()), "boom");

        let owned_payload: Box<dyn Any + Send> = Box::new(String::from("owned boom"));
        assert_eq!(panic_message(owned_payload.as_ref()), "owned boom");

        let other_payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(other_payload.as_ref()), "unknown panic payload");
    }

    #[test]
    fn test_notice_texts_differ() {
        assert_ne!(Notice::HandlerFault.text(), Notice::Unexpected.text());
        assert!(Notice::HandlerFault.text().starts_with("⚠️"));
    }
}
