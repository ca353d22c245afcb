//! Assertions over a probe's recorded values.
//!
//! Every assertion reads the visible history as it is at the time of the
//! call, never modifies it, and returns `Ok(&self)` on success so calls
//! chain with `?`. Failure messages are stable and may be compared
//! verbatim.

use std::fmt::Display;

use vprobe_core::{AssertionFailure, CheckError, ProbeError};

use crate::probe::ValueProbe;
use crate::render::{self, Seq};

const AT_LEAST_ONE: &str = "Expected at least one value.";

impl<T> ValueProbe<T> {
    /// Assert that exactly `expected` values are visible.
    ///
    /// # Errors
    ///
    /// [`CheckError::Usage`] if `expected` is negative, otherwise
    /// [`CheckError::Assertion`] on a count mismatch.
    pub fn assert_value_count<N: TryInto<usize>>(&self, expected: N) -> Result<&Self, CheckError> {
        let expected = expected
            .try_into()
            .map_err(|_| ProbeError::InvalidArgument {
                reason: "Expected count parameter must be non-negative".into(),
            })?;
        let actual = self.value_count();
        if actual != expected {
            return Err(self.fail(format!(
                "Expected: {expected} value(s), but has: {actual}"
            )));
        }
        Ok(self)
    }

    /// Assert that nothing visible has been recorded.
    pub fn assert_no_values(&self) -> Result<&Self, CheckError> {
        let actual = self.value_count();
        if actual != 0 {
            return Err(self.fail(format!("Expected no values, but has: {actual}")));
        }
        Ok(self)
    }

    pub(crate) fn fail(&self, message: String) -> CheckError {
        let message = match self.label() {
            Some(label) => format!("[{label}] {message}"),
            None => message,
        };
        tracing::debug!(
            probe = self.config.log_label(),
            failure = %message,
            "assertion failed"
        );
        AssertionFailure::new(message).into()
    }
}

impl<T: Clone + Display> ValueProbe<T> {
    /// Assert that exactly one value is visible and that it equals
    /// `expected`.
    pub fn assert_only_value<E>(&self, expected: E) -> Result<&Self, CheckError>
    where
        E: Display,
        T: PartialEq<E>,
    {
        let values = self.values();
        let [actual] = values.as_slice() else {
            return Err(self.fail(format!(
                "Expected a single value, but has: {}",
                values.len()
            )));
        };
        if *actual != expected {
            return Err(self.fail(render::expected_was(&expected, actual)));
        }
        Ok(self)
    }

    /// Assert that the latest visible value equals `expected`.
    ///
    /// Earlier values are not inspected.
    pub fn assert_value<E>(&self, expected: E) -> Result<&Self, CheckError>
    where
        E: Display,
        T: PartialEq<E>,
    {
        let Some(actual) = self.get_value() else {
            return Err(self.fail(AT_LEAST_ONE.to_string()));
        };
        if actual != expected {
            return Err(self.fail(render::expected_was(&expected, &actual)));
        }
        Ok(self)
    }

    /// Assert that the visible values equal `expected`, in order.
    pub fn assert_values<E>(&self, expected: &[E]) -> Result<&Self, CheckError>
    where
        E: Display,
        T: PartialEq<E>,
    {
        let values = self.values();
        let same = values.len() == expected.len()
            && values.iter().zip(expected).all(|(a, e)| a == e);
        if !same {
            let limit = self.config.render_limit;
            return Err(self.fail(render::expected_was(
                &Seq {
                    items: expected,
                    limit,
                },
                &Seq {
                    items: &values,
                    limit,
                },
            )));
        }
        Ok(self)
    }

    /// Assert that the visible values are exactly `expected`, reporting
    /// a count mismatch first and then the first differing position.
    pub fn assert_only_values<E>(&self, expected: &[E]) -> Result<&Self, CheckError>
    where
        E: Display,
        T: PartialEq<E>,
    {
        let values = self.values();
        if values.len() != expected.len() {
            return Err(self.fail(format!(
                "Expected: {} value(s), but has: {}",
                expected.len(),
                values.len()
            )));
        }
        let mismatch = values
            .iter()
            .zip(expected)
            .enumerate()
            .find(|(_, (a, e))| *a != *e);
        if let Some((index, (actual, expected))) = mismatch {
            return Err(self.fail(format!(
                "{} at index: {index}",
                render::expected_was(expected, actual)
            )));
        }
        Ok(self)
    }

    /// Assert that the visible value at `index` equals `expected`.
    pub fn assert_value_at<E>(&self, index: usize, expected: E) -> Result<&Self, CheckError>
    where
        E: Display,
        T: PartialEq<E>,
    {
        let actual = self.checked_value_at(index)?;
        if actual != expected {
            return Err(self.fail(render::expected_was(&expected, &actual)));
        }
        Ok(self)
    }

    /// Assert that the visible value at `index` satisfies `predicate`.
    ///
    /// The predicate receives a copy, so it may freely emit more values.
    pub fn assert_value_at_matches<F>(&self, index: usize, predicate: F) -> Result<&Self, CheckError>
    where
        F: FnOnce(&T) -> bool,
    {
        let actual = self.checked_value_at(index)?;
        if !predicate(&actual) {
            return Err(self.fail(format!(
                "Value at index: {index} does not match predicate, was:<{actual}>"
            )));
        }
        Ok(self)
    }

    /// Assert that the latest visible value satisfies `predicate`.
    pub fn assert_value_predicate<F>(&self, predicate: F) -> Result<&Self, CheckError>
    where
        F: FnOnce(&T) -> bool,
    {
        let Some(actual) = self.get_value() else {
            return Err(self.fail(AT_LEAST_ONE.to_string()));
        };
        if !predicate(&actual) {
            return Err(self.fail(format!(
                "Value does not match predicate, was:<{actual}>"
            )));
        }
        Ok(self)
    }

    fn checked_value_at(&self, index: usize) -> Result<T, CheckError> {
        let size = self.value_count();
        if size == 0 {
            return Err(self.fail(AT_LEAST_ONE.to_string()));
        }
        self.value_at(index).map_err(|_| {
            self.fail(format!("Invalid index: {index}, when only: {size} values"))
        })
    }
}
