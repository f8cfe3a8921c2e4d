//! Error sink used by the fail-soft read path.

use std::fmt;

/// Receives error records from [`YamlFile::load`](crate::YamlFile::load).
///
/// Implementations only need to accept a pre-formatted message; the
/// accessor never reads anything back from its logger.
pub trait Logger: Send + Sync {
    fn error(&self, message: fmt::Arguments<'_>);
}

/// Default logger: forwards every record to `tracing` at error level.
///
/// Nothing is printed unless the host has installed a subscriber, see
/// [`logging::init`](crate::logging::init).
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn error(&self, message: fmt::Arguments<'_>) {
        tracing::error!(target: "yamlfile", "{message}");
    }
}
