//! The observer/publisher seam.
//!
//! A probe only ever talks to the thing it observes through these two
//! traits. Emission mechanics, lifecycle and threading belong to the
//! publisher; the probe just receives values.

use crate::id::SubscriptionId;

/// Receives values emitted by a [`Publisher`], one call per emission.
///
/// Any `FnMut(T)` closure is an observer, so ad-hoc listeners need no
/// wrapper type.
pub trait Observer<T> {
    /// Accept the next emitted value.
    ///
    /// Called zero or more times after registration, in emission order.
    /// A publisher that can emit "no value" uses `T = Option<U>`.
    fn on_next(&mut self, value: T);
}

impl<T, F> Observer<T> for F
where
    F: FnMut(T),
{
    fn on_next(&mut self, value: T) {
        self(value)
    }
}

/// A source of sequentially emitted values that observers can register with.
///
/// The publisher owns registered observers and invokes
/// [`Observer::on_next`] from its own dispatch context. Probes assume that
/// context is a single thread delivering synchronously.
pub trait Publisher<T> {
    /// Register an observer. Every value emitted after this call is
    /// delivered to it.
    fn subscribe(&mut self, observer: Box<dyn Observer<T>>) -> SubscriptionId;
}
