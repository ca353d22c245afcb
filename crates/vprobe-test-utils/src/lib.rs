//! Mock publishers and fixtures for vprobe development.
//!
//! Provides implementations of [`Publisher`] for driving probes in tests
//! and benchmarks:
//!
//! - [`MockPublisher`] — synchronous broadcast; `emit` returns after every
//!   observer has seen the value.
//! - [`ChannelPublisher`] — values sent from any thread through an
//!   [`Emitter`], delivered when the owning thread calls
//!   [`dispatch`](ChannelPublisher::dispatch).
//! - [`emit_all`] — push a sequence of values through a [`MockPublisher`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod channel;

pub use channel::{ChannelPublisher, Emitter};

use indexmap::IndexMap;
use vprobe_core::{Observer, Publisher, SubscriptionId};

/// Registered observers in subscription order.
pub(crate) type Observers<T> = IndexMap<SubscriptionId, Box<dyn Observer<T>>>;

/// Hand a clone of `value` to every observer, in subscription order.
pub(crate) fn deliver<T: Clone>(observers: &mut Observers<T>, value: T) {
    for observer in observers.values_mut() {
        observer.on_next(value.clone());
    }
}

/// Synchronous broadcast publisher.
///
/// Observers are kept in subscription order and receive every value
/// emitted while they are subscribed, before [`emit`](Self::emit)
/// returns.
pub struct MockPublisher<T> {
    observers: Observers<T>,
    emitted: usize,
}

impl<T> MockPublisher<T> {
    pub fn new() -> Self {
        Self {
            observers: IndexMap::new(),
            emitted: 0,
        }
    }

    /// Remove a subscription. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.observers.shift_remove(&id).is_some();
        tracing::debug!(subscription = %id, removed, "unsubscribe");
        removed
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Number of values emitted so far, whether or not anyone listened.
    pub fn emitted_count(&self) -> usize {
        self.emitted
    }
}

impl<T: Clone> MockPublisher<T> {
    /// Deliver `value` to every current observer.
    pub fn emit(&mut self, value: T) {
        deliver(&mut self.observers, value);
        self.emitted += 1;
    }
}

impl<T> Default for MockPublisher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Publisher<T> for MockPublisher<T> {
    fn subscribe(&mut self, observer: Box<dyn Observer<T>>) -> SubscriptionId {
        let id = SubscriptionId::next();
        self.observers.insert(id, observer);
        tracing::debug!(subscription = %id, "subscribe");
        id
    }
}

/// Emit every value from `values` in order.
pub fn emit_all<T, I>(publisher: &mut MockPublisher<T>, values: I)
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    for value in values {
        publisher.emit(value);
    }
}
