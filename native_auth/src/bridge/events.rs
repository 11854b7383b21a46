use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::{PoisonError, RwLock};
use tokio::sync::broadcast::{self, error::RecvError};

use crate::config::NATIVE_AUTH_EVENT_CAPACITY;

use super::errors::BridgeError;

/// Event name a native host uses when an SMS code has been sent.
pub const CODE_SENT_EVENT: &str = "cfaSignInPhoneOnCodeSent";
/// Event name a native host uses when an SMS code has been retrieved.
pub const CODE_RECEIVED_EVENT: &str = "cfaSignInPhoneOnCodeReceived";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSentEvent {
    pub verification_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeReceivedEvent {
    pub verification_id: String,
    pub verification_code: String,
}

#[derive(Debug, Clone)]
enum PhoneEvent {
    CodeSent(CodeSentEvent),
    CodeReceived(CodeReceivedEvent),
}

/// Fan-out hub for phone verification events.
///
/// Every listener sees the first matching event published after it was
/// created, independently of other listeners. A listener handles exactly one
/// event; subscribe again for the next phone attempt.
pub struct PhoneEvents {
    sender: RwLock<broadcast::Sender<PhoneEvent>>,
    capacity: usize,
}

impl Default for PhoneEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneEvents {
    pub fn new() -> Self {
        Self::with_capacity(*NATIVE_AUTH_EVENT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: RwLock::new(sender),
            capacity,
        }
    }

    /// Waits for the next "code sent" event.
    pub fn on_code_sent(&self) -> CodeSentListener {
        PhoneListener {
            receiver: self.subscribe(),
            select: |event| match event {
                PhoneEvent::CodeSent(event) => Some(event),
                PhoneEvent::CodeReceived(_) => None,
            },
        }
    }

    /// Waits for the next "code received" event.
    pub fn on_code_received(&self) -> CodeReceivedListener {
        PhoneListener {
            receiver: self.subscribe(),
            select: |event| match event {
                PhoneEvent::CodeReceived(event) => Some(event),
                PhoneEvent::CodeSent(_) => None,
            },
        }
    }

    /// Publishes a "code sent" event, returning how many listeners were waiting.
    pub fn emit_code_sent(&self, verification_id: impl Into<String>) -> usize {
        let event = CodeSentEvent {
            verification_id: verification_id.into(),
        };
        tracing::debug!("Phone code sent: {}", event.verification_id);
        self.publish(PhoneEvent::CodeSent(event))
    }

    /// Publishes a "code received" event, returning how many listeners were waiting.
    pub fn emit_code_received(
        &self,
        verification_id: impl Into<String>,
        verification_code: impl Into<String>,
    ) -> usize {
        let event = CodeReceivedEvent {
            verification_id: verification_id.into(),
            verification_code: verification_code.into(),
        };
        tracing::debug!("Phone code received: {}", event.verification_id);
        self.publish(PhoneEvent::CodeReceived(event))
    }

    /// Publishes an event delivered by a native host as a name and JSON payload.
    pub fn dispatch(&self, event_name: &str, payload: Value) -> Result<usize, BridgeError> {
        let event = match event_name {
            CODE_SENT_EVENT => PhoneEvent::CodeSent(
                serde_json::from_value(payload).map_err(|e| BridgeError::Serde(e.to_string()))?,
            ),
            CODE_RECEIVED_EVENT => PhoneEvent::CodeReceived(
                serde_json::from_value(payload).map_err(|e| BridgeError::Serde(e.to_string()))?,
            ),
            other => return Err(BridgeError::UnknownEvent(other.to_string())),
        };
        Ok(self.publish(event))
    }

    /// Resolves every outstanding listener with [`BridgeError::ListenerRemoved`].
    pub fn remove_all_listeners(&self) {
        let mut sender = self.sender.write().unwrap_or_else(PoisonError::into_inner);
        let removed = sender.receiver_count();
        // Dropping the old sender closes every receiver subscribed to it
        *sender = broadcast::channel(self.capacity).0;
        tracing::debug!("Removed {} phone listeners", removed);
    }

    pub fn listener_count(&self) -> usize {
        self.sender
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .receiver_count()
    }

    fn subscribe(&self) -> broadcast::Receiver<PhoneEvent> {
        self.sender
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .subscribe()
    }

    fn publish(&self, event: PhoneEvent) -> usize {
        let sender = self.sender.read().unwrap_or_else(PoisonError::into_inner);
        // A send error only means nobody is listening
        sender.send(event).unwrap_or(0)
    }
}

/// One-shot subscription to a phone event; `.await` it or call [`recv`](Self::recv).
pub struct PhoneListener<T> {
    receiver: broadcast::Receiver<PhoneEvent>,
    select: fn(PhoneEvent) -> Option<T>,
}

pub type CodeSentListener = PhoneListener<CodeSentEvent>;
pub type CodeReceivedListener = PhoneListener<CodeReceivedEvent>;

impl<T> PhoneListener<T> {
    pub async fn recv(mut self) -> Result<T, BridgeError> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => {
                    if let Some(value) = (self.select)(event) {
                        return Ok(value);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Phone listener lagged, skipped {} events", skipped);
                }
                Err(RecvError::Closed) => return Err(BridgeError::ListenerRemoved),
            }
        }
    }
}

impl<T: Send + 'static> IntoFuture for PhoneListener<T> {
    type Output = Result<T, BridgeError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.recv())
    }
}
