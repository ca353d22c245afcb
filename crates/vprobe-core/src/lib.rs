//! Core types and traits for the vprobe value recorder.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the seams between a probe and the publisher it observes (the
//! [`Observer`] and [`Publisher`] traits), the [`SubscriptionId`] handed
//! out by publishers, and the error types shared by every vprobe crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;

pub use error::{AssertionFailure, CheckError, ConfigError, ProbeError};
pub use id::SubscriptionId;
pub use traits::{Observer, Publisher};
