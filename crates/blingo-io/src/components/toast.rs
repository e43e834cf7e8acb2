//! Transient confirmation message.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// How long a toast stays visible.
pub const TOAST_DURATION_MS: u32 = 3_000;

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

/// A toast and the identity used to expire it.
///
/// Each message gets a fresh id, so a timer started for an older toast
/// never hides a newer one with the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    id: u64,
    text: String,
}

impl ToastMessage {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
            text: text.into(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Renders the current toast and hides it after [`TOAST_DURATION_MS`].
///
/// Mount once near the root; setting `message` to a new
/// [`ToastMessage`] restarts the timer.
#[component]
pub fn Toast(message: Signal<Option<ToastMessage>>) -> Element {
    use_effect(move || {
        let Some(id) = message.read().as_ref().map(ToastMessage::id) else {
            return;
        };
        let mut message = message;
        spawn(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            if message.peek().as_ref().is_some_and(|m| m.id() == id) {
                message.set(None);
            }
        });
    });

    rsx! {
        if let Some(toast) = message() {
            div { class: "toast", role: "status", aria_live: "polite",
                "{toast.text()}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_message_gets_a_fresh_id() {
        let a = ToastMessage::new("Image saved to gallery!");
        let b = ToastMessage::new("Image saved to gallery!");
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
        assert_eq!(a.text(), b.text());
    }
}
