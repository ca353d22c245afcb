//! Integration test: probe behaviour against a synchronous publisher.
//!
//! Walks the canonical attach → emit → query/assert sequences end to end
//! through `MockPublisher`, checking values and the exact failure text.

use vprobe::prelude::*;
use vprobe::{AssertionFailure, ProbeConfig};
use vprobe_test_utils::{emit_all, MockPublisher};

// ── No emissions ────────────────────────────────────────────────────

#[test]
fn empty_history() {
    let mut publisher = MockPublisher::<String>::new();
    let probe = publisher.probe();

    assert!(probe.values().is_empty());
    assert_eq!(probe.value(), Err(ProbeError::EmptyHistory));
    assert_eq!(probe.get_value(), None);
    assert!(probe.assert_value_count(0).is_ok());
    assert!(probe.assert_no_values().is_ok());
}

// ── Single emission ─────────────────────────────────────────────────

#[test]
fn single_value() -> Result<(), CheckError> {
    let mut publisher = MockPublisher::new();
    let probe = publisher.probe();

    publisher.emit("abc");

    assert_eq!(probe.value(), Ok("abc"));
    assert_eq!(probe.values(), vec!["abc"]);
    probe.assert_only_value("abc")?.assert_value_count(1)?;
    Ok(())
}

// ── Several emissions ───────────────────────────────────────────────

#[test]
fn latest_of_three() {
    let mut publisher = MockPublisher::new();
    let probe = publisher.probe();

    emit_all(&mut publisher, ["abc", "def", "ghi"]);

    assert_eq!(probe.value(), Ok("ghi"));
    assert_eq!(probe.skip(2).map(|v| v.values()), Ok(vec!["ghi"]));
    assert!(probe.assert_value("ghi").is_ok());

    let err = probe.assert_value("def").expect_err("latest is ghi");
    assert_eq!(
        err.as_assertion(),
        Some(&AssertionFailure::new("expected:<def> but was:<ghi>"))
    );
}

#[test]
fn skip_past_end() {
    let mut publisher = MockPublisher::new();
    let probe = publisher.probe();

    emit_all(&mut publisher, ["abc", "def"]);

    let err = probe.skip(3).expect_err("only two values");
    assert_eq!(err, ProbeError::InvalidSkip { count: 3, size: 2 });
    assert_eq!(err.to_string(), "Cannot skip: 3 value(s), when only: 2 values");
}

#[test]
fn negative_count_regardless_of_history() {
    let mut publisher = MockPublisher::new();
    let probe = publisher.probe();

    for emitted in 0..3 {
        let err = probe.assert_value_count(-1).expect_err("negative count");
        assert_eq!(err.message(), "Expected count parameter must be non-negative");
        assert!(err.as_usage().is_some());
        publisher.emit(emitted);
    }
}

// ── Skip semantics ──────────────────────────────────────────────────

#[test]
fn skip_defaults_to_one() {
    let mut publisher = MockPublisher::new();
    let probe = publisher.probe();
    emit_all(&mut publisher, ["abc", "def"]);

    assert_eq!(probe.skip_one().map(|v| v.values()), Ok(vec!["def"]));
}

#[test]
fn skip_by_count() {
    let mut publisher = MockPublisher::new();
    let probe = publisher.probe();
    emit_all(&mut publisher, ["abc", "def", "ghi", "jkl"]);

    assert_eq!(probe.skip(2).map(|v| v.values()), Ok(vec!["ghi", "jkl"]));
}

#[test]
fn skip_with_nothing_emitted() {
    let mut publisher = MockPublisher::<&str>::new();
    let probe = publisher.probe();

    assert_eq!(
        probe.skip_one().map(|v| v.values()),
        Err(ProbeError::InvalidSkip { count: 1, size: 0 })
    );
}

#[test]
fn skip_equal_to_count_is_empty() {
    let mut publisher = MockPublisher::new();
    let probe = publisher.probe();
    emit_all(&mut publisher, ["abc", "def"]);

    let view = probe.skip(2).expect("skip to end");
    assert_eq!(view.values(), Vec::<&str>::new());
    assert_eq!(view.value(), Err(ProbeError::EmptyHistory));
    assert_eq!(view.get_value(), None);
}

#[test]
fn skip_view_tracks_later_emissions() -> Result<(), CheckError> {
    let mut publisher = MockPublisher::new();
    let probe = publisher.probe();
    emit_all(&mut publisher, [1, 2]);

    let view = probe.skip(2)?;
    view.assert_no_values()?;

    publisher.emit(3);
    view.assert_only_value(3)?;
    probe.assert_values(&[1, 2, 3])?;
    Ok(())
}

// ── Attachment lifecycle ────────────────────────────────────────────

#[test]
fn only_post_attach_values_are_recorded() {
    let mut publisher = MockPublisher::new();
    publisher.emit("before");
    let probe = publisher.probe();
    publisher.emit("after");

    assert_eq!(probe.values(), vec!["after"]);
}

#[test]
fn unsubscribed_probe_stops_recording() {
    let mut publisher = MockPublisher::new();
    let probe = publisher.probe();
    publisher.emit(1);

    let id = probe.subscription().expect("attached");
    assert!(publisher.unsubscribe(id));
    publisher.emit(2);

    assert_eq!(probe.values(), vec![1]);
}

#[test]
fn independent_probes_on_one_publisher() {
    let mut publisher = MockPublisher::new();
    let first = publisher.probe();
    publisher.emit('a');
    let second = publisher.probe();
    publisher.emit('b');

    assert_eq!(first.values(), vec!['a', 'b']);
    assert_eq!(second.values(), vec!['b']);
    assert_ne!(first.subscription(), second.subscription());
}

#[test]
fn absent_values_are_distinct_from_empty_history() {
    let mut publisher = MockPublisher::<Option<u32>>::new();
    let probe = publisher.probe();
    assert_eq!(probe.get_value(), None);

    publisher.emit(None);
    assert_eq!(probe.get_value(), Some(None));
    assert_eq!(probe.value(), Ok(None));
    assert!(probe.assert_value_count(1).is_ok());
}

#[test]
fn labelled_probe_prefixes_failures() {
    let mut publisher = MockPublisher::new();
    let probe = publisher
        .probe_with(ProbeConfig::default().with_label("quotes"))
        .expect("valid config");
    publisher.emit(10);

    let err = probe.assert_value(11).expect_err("mismatch");
    assert_eq!(err.message(), "[quotes] expected:<11> but was:<10>");
}

#[test]
fn returned_snapshots_are_independent() {
    let mut publisher = MockPublisher::new();
    let probe = publisher.probe();
    publisher.emit(String::from("abc"));

    let mut snapshot = probe.values();
    snapshot.clear();
    let mut latest = probe.value().expect("one value");
    latest.push_str("def");

    assert_eq!(probe.values(), vec![String::from("abc")]);
    assert_eq!(probe.value(), Ok(String::from("abc")));
}
