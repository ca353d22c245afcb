//! vprobe: a recording probe for testing observable value publishers.
//!
//! Attach a [`ValueProbe`] to anything implementing [`Publisher`] and it
//! records every value emitted from that moment on. Tests then query the
//! recorded history or assert on it instead of hand-rolling a listener.
//!
//! # Quick start
//!
//! ```rust
//! use vprobe::prelude::*;
//! use vprobe::SubscriptionId;
//!
//! // A minimal publisher that broadcasts to its observers.
//! #[derive(Default)]
//! struct Ticker(Vec<Box<dyn Observer<&'static str>>>);
//!
//! impl Publisher<&'static str> for Ticker {
//!     fn subscribe(&mut self, observer: Box<dyn Observer<&'static str>>) -> SubscriptionId {
//!         self.0.push(observer);
//!         SubscriptionId::next()
//!     }
//! }
//!
//! impl Ticker {
//!     fn emit(&mut self, value: &'static str) {
//!         self.0.iter_mut().for_each(|o| o.on_next(value));
//!     }
//! }
//!
//! let mut ticker = Ticker::default();
//! let probe = ticker.probe();
//!
//! ticker.emit("abc");
//! ticker.emit("def");
//! ticker.emit("ghi");
//!
//! assert_eq!(probe.value(), Ok("ghi"));
//! assert_eq!(probe.skip(2).unwrap().values(), vec!["ghi"]);
//! probe.assert_value_count(3).unwrap().assert_value("ghi").unwrap();
//! assert_eq!(
//!     probe.assert_value("def").unwrap_err().message(),
//!     "expected:<def> but was:<ghi>",
//! );
//! ```
//!
//! # Error channels
//!
//! | Type | Raised by | Meaning |
//! |------|-----------|---------|
//! | [`ProbeError`] | queries (`value`, `skip`, `value_at`) | the test misused the probe |
//! | [`AssertionFailure`] | assertions | recorded values did not match |
//! | [`CheckError`] | assertions | either of the above |
//! | [`ConfigError`] | [`attach_with`], [`ValueProbe::with_config`] | invalid [`ProbeConfig`] |
//!
//! # Threading
//!
//! A probe assumes the publisher delivers synchronously on the test's
//! thread. The handle is deliberately `!Send`, so a publisher that moves
//! observers to other threads will not accept it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod assert;
pub mod attach;
pub mod config;
mod history;
pub mod probe;
mod render;

pub use attach::{attach, attach_with, ProbeExt};
pub use config::{ProbeConfig, MAX_INITIAL_CAPACITY};
pub use probe::ValueProbe;
pub use vprobe_core::{
    AssertionFailure, CheckError, ConfigError, Observer, ProbeError, Publisher, SubscriptionId,
};

/// Core traits, IDs and errors (`vprobe-core`).
pub use vprobe_core as types;

/// Common imports for tests using vprobe.
pub mod prelude {
    pub use crate::attach::{attach, ProbeExt};
    pub use crate::probe::ValueProbe;
    pub use vprobe_core::{CheckError, Observer, ProbeError, Publisher};
}
