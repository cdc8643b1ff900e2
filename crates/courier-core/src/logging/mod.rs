//! Structured logging with `tracing`.
//!
//! Library code only emits events; the host binary (or a test) decides where
//! they go. [`init_subscriber`] installs a compact stderr subscriber for hosts
//! that have none, and [`capture_logs`] records events for test assertions.
//!
//! Level conventions across courier:
//! - `debug`: absent input (missing map, field, or event data)
//! - `warn`: malformed input (bad JSON, wrong shape)
//! - `error`: input unusable as a whole (e.g. an empty push message)

use tracing_subscriber::EnvFilter;

pub mod test_utils;

pub use test_utils::{CapturedLogs, capture_logs};

/// Install a compact stderr subscriber as the process default.
///
/// `level` is an `EnvFilter` directive such as `"warn"` or `"courier_push=debug"`;
/// `RUST_LOG`, when set and valid, wins over it. Returns `false` when a global
/// subscriber was already installed, in which case nothing changes.
pub fn init_subscriber(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .is_ok()
}
