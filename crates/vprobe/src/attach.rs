//! Wiring a probe to a publisher.

use std::any::type_name;

use vprobe_core::{ConfigError, Publisher};

use crate::config::ProbeConfig;
use crate::probe::ValueProbe;

/// Attach a fresh probe to `publisher` with the default configuration.
///
/// The probe is registered through [`Publisher::subscribe`]; every value
/// emitted from now on is recorded synchronously with its emission.
pub fn attach<T, P>(publisher: &mut P) -> ValueProbe<T>
where
    T: 'static,
    P: Publisher<T> + ?Sized,
{
    register(publisher, ValueProbe::new())
}

/// Attach a fresh probe built from `config`.
///
/// # Errors
///
/// Returns the [`ConfigError`] from [`ProbeConfig::validate`]; the
/// publisher is left untouched in that case.
pub fn attach_with<T, P>(publisher: &mut P, config: ProbeConfig) -> Result<ValueProbe<T>, ConfigError>
where
    T: 'static,
    P: Publisher<T> + ?Sized,
{
    let probe = ValueProbe::with_config(config)?;
    Ok(register(publisher, probe))
}

fn register<T, P>(publisher: &mut P, mut probe: ValueProbe<T>) -> ValueProbe<T>
where
    T: 'static,
    P: Publisher<T> + ?Sized,
{
    let id = publisher.subscribe(Box::new(probe.clone()));
    probe.set_subscription(id);
    tracing::debug!(
        probe = probe.config().log_label(),
        publisher = type_name::<P>(),
        subscription = %id,
        "attached probe"
    );
    probe
}

/// `publisher.probe()` sugar over [`attach`].
pub trait ProbeExt<T>: Publisher<T> {
    /// Attach a probe with the default configuration.
    fn probe(&mut self) -> ValueProbe<T>;

    /// Attach a probe built from `config`.
    fn probe_with(&mut self, config: ProbeConfig) -> Result<ValueProbe<T>, ConfigError>;
}

impl<T, P> ProbeExt<T> for P
where
    T: 'static,
    P: Publisher<T> + ?Sized,
{
    fn probe(&mut self) -> ValueProbe<T> {
        attach(self)
    }

    fn probe_with(&mut self, config: ProbeConfig) -> Result<ValueProbe<T>, ConfigError> {
        attach_with(self, config)
    }
}
