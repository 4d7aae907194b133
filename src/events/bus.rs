//! Event bus built on std mpsc channels.
//!
//! Producers (the hotkey filter) hold cloneable [`EventPublisher`] handles;
//! the single consumer (the navigation dispatcher, on the UI thread) drains
//! pending events once per frame.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::AppEvent;

/// Application-wide event queue.
///
/// Multi-producer, single-consumer: any number of publishers may send, the
/// UI thread drains. Sends never block.
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// A cheap, cloneable handle for publishing events.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Next pending event, if any. Never blocks.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Collect everything published since the last drain, in order.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Publishing half of the bus. Clones share the same queue.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Queue an event for the next drain.
    ///
    /// A send after the receiver is gone means the app is shutting down;
    /// the event is dropped silently.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}
