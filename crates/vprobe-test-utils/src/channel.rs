//! Cross-thread emission drained on a single dispatcher.
//!
//! Probes are single-threaded. When the code under test emits from
//! worker threads, route those emissions through an [`Emitter`] and let
//! the test thread deliver them with [`ChannelPublisher::dispatch`].
//! Delivery order is channel order: per-emitter order is preserved,
//! interleaving across emitters is whatever the channel saw.

use crossbeam_channel::{Receiver, SendError, Sender};
use indexmap::IndexMap;
use vprobe_core::{Observer, Publisher, SubscriptionId};

use crate::{deliver, Observers};

/// Sending half handed to producer threads. Cheap to clone.
#[derive(Debug)]
pub struct Emitter<T> {
    tx: Sender<T>,
}

impl<T> Emitter<T> {
    /// Queue `value` for delivery on the next dispatch.
    ///
    /// Fails only when the owning [`ChannelPublisher`] has been dropped.
    pub fn emit(&self, value: T) -> Result<(), SendError<T>> {
        self.tx.send(value)
    }
}

impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

/// Publisher whose values arrive over an unbounded channel and are
/// delivered to observers on the thread that calls
/// [`dispatch`](Self::dispatch).
pub struct ChannelPublisher<T> {
    tx: Sender<T>,
    rx: Receiver<T>,
    observers: Observers<T>,
}

impl<T> ChannelPublisher<T> {
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            tx,
            rx,
            observers: IndexMap::new(),
        }
    }

    /// A new sending handle.
    pub fn emitter(&self) -> Emitter<T> {
        Emitter {
            tx: self.tx.clone(),
        }
    }

    /// Values queued but not yet dispatched.
    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }
}

impl<T: Clone> ChannelPublisher<T> {
    /// Deliver every queued value to the observers, in channel order.
    ///
    /// Never blocks. Returns the number of values delivered.
    pub fn dispatch(&mut self) -> usize {
        let mut delivered = 0;
        while let Ok(value) = self.rx.try_recv() {
            deliver(&mut self.observers, value);
            delivered += 1;
        }
        tracing::trace!(delivered, "dispatched");
        delivered
    }
}

impl<T> Default for ChannelPublisher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Publisher<T> for ChannelPublisher<T> {
    fn subscribe(&mut self, observer: Box<dyn Observer<T>>) -> SubscriptionId {
        let id = SubscriptionId::next();
        self.observers.insert(id, observer);
        tracing::debug!(subscription = %id, "subscribe");
        id
    }
}
