//! Benchmark profiles and utilities for the vprobe value recorder.
//!
//! - [`populated`]: a publisher with a probe that has already recorded
//!   `n` values
//! - [`value_stream`]: deterministic emission payloads

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vprobe::{ProbeExt, ValueProbe};
use vprobe_test_utils::{emit_all, MockPublisher};

/// `n` deterministic, non-monotonic payloads (a fixed LCG sequence).
pub fn value_stream(n: usize) -> impl Iterator<Item = u64> {
    let mut state = 0x2545_F491_4F6C_DD1Du64;
    (0..n).map(move |_| {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        state >> 33
    })
}

/// A publisher plus an attached probe that has recorded `n` values.
pub fn populated(n: usize) -> (MockPublisher<u64>, ValueProbe<u64>) {
    let mut publisher = MockPublisher::new();
    let probe = publisher.probe();
    emit_all(&mut publisher, value_stream(n));
    (publisher, probe)
}
