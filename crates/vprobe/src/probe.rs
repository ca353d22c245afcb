//! The recording probe and its read surface.

use std::fmt;
use std::rc::Rc;

use vprobe_core::{ConfigError, Observer, ProbeError, SubscriptionId};

use crate::config::ProbeConfig;
use crate::history::History;

/// Records every value a publisher emits and answers queries about them.
///
/// A `ValueProbe` is a handle: clones share one append-only history, so
/// the clone registered with the publisher and the one kept by the test
/// see the same values. Each handle also has an offset; the attached
/// probe starts at 0 and [`skip`](Self::skip) produces views with larger
/// offsets. Queries and assertions only see values at or after the
/// handle's offset, and always reflect the history as it is at the time
/// of the call.
///
/// The handle is `!Send`: probes assume the publisher delivers on the
/// test's own thread. See `ChannelPublisher` in `vprobe-test-utils` for
/// funnelling cross-thread emissions onto one dispatcher.
pub struct ValueProbe<T> {
    pub(crate) history: History<T>,
    pub(crate) offset: usize,
    pub(crate) config: Rc<ProbeConfig>,
    subscription: Option<SubscriptionId>,
}

impl<T> ValueProbe<T> {
    /// Create a detached probe with the default configuration.
    ///
    /// Nothing is recorded until a clone is registered as an observer.
    pub fn new() -> Self {
        Self::from_valid_config(ProbeConfig::default())
    }

    /// Create a detached probe with a validated configuration.
    pub fn with_config(config: ProbeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ProbeConfig) -> Self {
        Self {
            history: History::with_capacity(config.initial_capacity),
            offset: 0,
            config: Rc::new(config),
            subscription: None,
        }
    }

    /// The configuration this probe was built with.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// The probe label, if configured.
    pub fn label(&self) -> Option<&str> {
        self.config.label.as_deref()
    }

    /// The subscription under which the publisher delivers to this probe,
    /// if it was attached through [`attach`](crate::attach()).
    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.subscription
    }

    pub(crate) fn set_subscription(&mut self, id: SubscriptionId) {
        self.subscription = Some(id);
    }

    /// Number of leading values hidden from this handle.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of visible recorded values.
    pub fn value_count(&self) -> usize {
        self.history.len().saturating_sub(self.offset)
    }

    /// Returns true if no visible values have been recorded.
    pub fn is_empty(&self) -> bool {
        self.value_count() == 0
    }

    /// A view that hides the first `count` visible values.
    ///
    /// `count` may equal the number of visible values, giving an empty
    /// view. The bound is checked against the history as it is now;
    /// values emitted afterwards show up in the view.
    ///
    /// # Errors
    ///
    /// [`ProbeError::InvalidArgument`] if `count` is negative,
    /// [`ProbeError::InvalidSkip`] if it exceeds the visible count.
    pub fn skip<N: TryInto<usize>>(&self, count: N) -> Result<Self, ProbeError> {
        let count = count.try_into().map_err(|_| ProbeError::InvalidArgument {
            reason: "Skip count must be non-negative".into(),
        })?;
        let size = self.value_count();
        if count > size {
            return Err(ProbeError::InvalidSkip { count, size });
        }
        tracing::debug!(
            probe = self.config.log_label(),
            count,
            size,
            "created skip view"
        );
        Ok(Self {
            history: self.history.clone(),
            offset: self.offset + count,
            config: Rc::clone(&self.config),
            subscription: self.subscription,
        })
    }

    /// Shorthand for `skip(1)`.
    pub fn skip_one(&self) -> Result<Self, ProbeError> {
        self.skip(1usize)
    }

    fn record(&self, value: T) {
        let index = self.history.push(value);
        tracing::trace!(probe = self.config.log_label(), index, "recorded value");
    }
}

impl<T: Clone> ValueProbe<T> {
    /// The latest visible value.
    ///
    /// # Errors
    ///
    /// [`ProbeError::EmptyHistory`] when nothing visible has been recorded.
    pub fn value(&self) -> Result<T, ProbeError> {
        self.get_value().ok_or(ProbeError::EmptyHistory)
    }

    /// The latest visible value, or `None` when nothing visible has been
    /// recorded.
    pub fn get_value(&self) -> Option<T> {
        self.history.last_from(self.offset)
    }

    /// Copy of the visible values in emission order.
    pub fn values(&self) -> Vec<T> {
        self.history.snapshot_from(self.offset)
    }

    /// The visible value at `index` (0 is the first visible value).
    ///
    /// # Errors
    ///
    /// [`ProbeError::InvalidIndex`] when `index` is past the end.
    pub fn value_at(&self, index: usize) -> Result<T, ProbeError> {
        self.offset
            .checked_add(index)
            .and_then(|at| self.history.get(at))
            .ok_or_else(|| ProbeError::InvalidIndex {
                index,
                size: self.value_count(),
            })
    }
}

impl<T> Observer<T> for ValueProbe<T> {
    fn on_next(&mut self, value: T) {
        self.record(value);
    }
}

impl<T> Default for ValueProbe<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ValueProbe<T> {
    fn clone(&self) -> Self {
        Self {
            history: self.history.clone(),
            offset: self.offset,
            config: Rc::clone(&self.config),
            subscription: self.subscription,
        }
    }
}

impl<T> fmt::Debug for ValueProbe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueProbe")
            .field("label", &self.config.label)
            .field("offset", &self.offset)
            .field("recorded", &self.history.len())
            .field("handles", &self.history.handles())
            .finish_non_exhaustive()
    }
}
