//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Initialize tracing with `RUST_LOG`, falling back to `default_directive`.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().init();
}
