//! Strongly-typed identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`SubscriptionId`] allocation.
static SUBSCRIPTION_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identifies one observer registration on a publisher.
///
/// Allocated from a monotonic atomic counter via [`SubscriptionId::next`],
/// so two registrations never share an ID, even across publishers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Allocate a fresh, unique subscription ID. Thread-safe.
    pub fn next() -> Self {
        Self(SUBSCRIPTION_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_is_unique_and_increasing() {
        let a = SubscriptionId::next();
        let b = SubscriptionId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn display_prefixes_counter() {
        let id = SubscriptionId::next();
        assert_eq!(id.to_string(), format!("sub#{}", id.get()));
    }
}
