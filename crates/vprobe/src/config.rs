//! Probe configuration and validation.
//!
//! [`ProbeConfig`] is the construction input for a
//! [`ValueProbe`](crate::ValueProbe). [`validate()`](ProbeConfig::validate)
//! checks its invariants before the probe is attached.

use vprobe_core::ConfigError;

/// Largest accepted [`ProbeConfig::initial_capacity`].
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

/// Configuration for a [`ValueProbe`](crate::ValueProbe).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Name shown in log events and prefixed to assertion failures as
    /// `[label] `. Default: `None`.
    pub label: Option<String>,
    /// Number of history slots reserved up front. Default: 8.
    pub initial_capacity: usize,
    /// Maximum number of elements rendered per sequence in failure
    /// messages; the rest are summarised as `... (n more)`. Default: 32.
    pub render_limit: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            label: None,
            initial_capacity: crate::history::INLINE_SLOTS,
            render_limit: 32,
        }
    }
}

impl ProbeConfig {
    /// Set the probe label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the initial history capacity.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set the per-sequence render limit for failure messages.
    pub fn with_render_limit(mut self, limit: usize) -> Self {
        self.render_limit = limit;
        self
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if matches!(self.label.as_deref(), Some("")) {
            return Err(ConfigError::EmptyLabel);
        }
        if self.render_limit == 0 {
            return Err(ConfigError::RenderLimitZero);
        }
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::CapacityTooLarge {
                configured: self.initial_capacity,
                max: MAX_INITIAL_CAPACITY,
            });
        }
        Ok(())
    }

    /// The label for log events, `"-"` when unset.
    pub(crate) fn log_label(&self) -> &str {
        self.label.as_deref().unwrap_or("-")
    }
}
