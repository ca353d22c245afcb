//! Error types for the vprobe value recorder.
//!
//! Failures fall into two disjoint channels: usage errors
//! ([`ProbeError`]), raised when a query's preconditions are violated, and
//! assertion failures ([`AssertionFailure`]), raised when recorded values
//! do not match what a test expected. Assertion methods can hit either,
//! so they report through [`CheckError`]. [`ConfigError`] covers probe
//! construction.

use std::error::Error;
use std::fmt;

/// Usage errors from probe queries.
///
/// These are programmer errors in the test itself: they are returned by
/// the offending call and are never retried or suppressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeError {
    /// The strict latest-value accessor was called on an empty history.
    EmptyHistory,
    /// `skip` was asked to drop more values than are currently recorded.
    InvalidSkip {
        /// Requested skip count.
        count: usize,
        /// Visible history length when `skip` was called.
        size: usize,
    },
    /// A positional read past the end of the history.
    InvalidIndex {
        /// Requested index.
        index: usize,
        /// Visible history length at the time of the read.
        size: usize,
    },
    /// A numeric argument was out of its domain (e.g. a negative count).
    InvalidArgument {
        /// Human-readable description of the violated precondition.
        reason: String,
    },
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHistory => write!(f, "No values recorded"),
            Self::InvalidSkip { count, size } => {
                write!(f, "Cannot skip: {count} value(s), when only: {size} values")
            }
            Self::InvalidIndex { index, size } => {
                write!(f, "Invalid index: {index}, when only: {size} values")
            }
            Self::InvalidArgument { reason } => write!(f, "{reason}"),
        }
    }
}

impl Error for ProbeError {}

/// A recorded history did not match what the test expected.
///
/// The message pinpoints expected vs. actual and is part of the public
/// contract: tests may compare against it verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    /// Build a failure carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for AssertionFailure {}

/// Outcome of a failed assertion call.
///
/// `Debug` prints the bare message so that a `#[test] fn .. -> Result<(),
/// CheckError>` reports the failure readably.
#[derive(Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The assertion was called with invalid arguments.
    Usage(ProbeError),
    /// The recorded values did not match.
    Assertion(AssertionFailure),
}

impl CheckError {
    /// The human-readable message for either channel.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns the assertion failure, if this is one.
    pub fn as_assertion(&self) -> Option<&AssertionFailure> {
        match self {
            Self::Assertion(failure) => Some(failure),
            Self::Usage(_) => None,
        }
    }

    /// Returns the usage error, if this is one.
    pub fn as_usage(&self) -> Option<&ProbeError> {
        match self {
            Self::Usage(err) => Some(err),
            Self::Assertion(_) => None,
        }
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(err) => write!(f, "{err}"),
            Self::Assertion(failure) => write!(f, "{failure}"),
        }
    }
}

/// Same text as `Display`, so `fn test() -> Result<(), CheckError>` fails
/// with the bare message.
impl fmt::Debug for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Error for CheckError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Usage(err) => Some(err),
            Self::Assertion(failure) => Some(failure),
        }
    }
}

impl From<ProbeError> for CheckError {
    fn from(err: ProbeError) -> Self {
        Self::Usage(err)
    }
}

impl From<AssertionFailure> for CheckError {
    fn from(failure: AssertionFailure) -> Self {
        Self::Assertion(failure)
    }
}

/// Errors detected by `ProbeConfig::validate()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The label was set to an empty string.
    EmptyLabel,
    /// `render_limit` is zero, so failure messages could show no values.
    RenderLimitZero,
    /// `initial_capacity` exceeds the supported maximum.
    CapacityTooLarge {
        /// The configured capacity.
        configured: usize,
        /// The largest accepted capacity.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "probe label must not be empty"),
            Self::RenderLimitZero => write!(f, "render_limit must be at least 1"),
            Self::CapacityTooLarge { configured, max } => {
                write!(f, "initial_capacity {configured} exceeds maximum {max}")
            }
        }
    }
}

impl Error for ConfigError {}
