//! Optional stderr subscriber for programs embedding the accessor.
//!
//! The library itself never installs a subscriber. Hosts that want the
//! default [`TracingLogger`](crate::TracingLogger) records to show up call
//! [`init`] once at startup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a compact stderr subscriber filtered by `RUST_LOG`.
///
/// Defaults to `warn` if `RUST_LOG` is unset or invalid. Returns `false`
/// when a global subscriber was already installed.
///
/// # Example
/// ```bash
/// RUST_LOG=yamlfile=debug my-tool
/// ```
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .is_ok()
}
