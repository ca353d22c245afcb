//! Shared, append-only value history.
//!
//! Every handle to a probe (the one registered with the publisher, the
//! one held by the test, and any skip views) points at the same
//! [`History`]. Reads copy out of it; only [`History::push`] mutates it.
//! Borrows never outlive a single method call, so user callbacks never
//! run while the history is borrowed.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

/// Values kept inline before the history moves to the heap. The default
/// [`ProbeConfig::initial_capacity`](crate::ProbeConfig::initial_capacity)
/// matches it, so a default probe does not allocate slots up front.
pub(crate) const INLINE_SLOTS: usize = 8;

type Slots<T> = SmallVec<[T; INLINE_SLOTS]>;

pub(crate) struct History<T> {
    slots: Rc<RefCell<Slots<T>>>,
}

impl<T> History<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Rc::new(RefCell::new(SmallVec::with_capacity(capacity))),
        }
    }

    /// Append a value and return its emission index.
    pub(crate) fn push(&self, value: T) -> usize {
        let mut slots = self.slots.borrow_mut();
        slots.push(value);
        slots.len() - 1
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Number of handles sharing this history.
    pub(crate) fn handles(&self) -> usize {
        Rc::strong_count(&self.slots)
    }
}

impl<T: Clone> History<T> {
    /// Copy of every value at or after `offset`, in emission order.
    pub(crate) fn snapshot_from(&self, offset: usize) -> Vec<T> {
        self.slots
            .borrow()
            .get(offset..)
            .map(<[T]>::to_vec)
            .unwrap_or_default()
    }

    /// The latest value, provided it lies at or after `offset`.
    pub(crate) fn last_from(&self, offset: usize) -> Option<T> {
        let slots = self.slots.borrow();
        if slots.len() > offset {
            slots.last().cloned()
        } else {
            None
        }
    }

    /// The value at absolute position `index`.
    pub(crate) fn get(&self, index: usize) -> Option<T> {
        self.slots.borrow().get(index).cloned()
    }
}

impl<T> Clone for History<T> {
    fn clone(&self) -> Self {
        Self {
            slots: Rc::clone(&self.slots),
        }
    }
}

impl<T> fmt::Debug for History<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
