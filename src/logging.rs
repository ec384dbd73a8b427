//! Diagnostic logging to stderr, filtered by `PASSGEN_LOG` (default `warn`).
//! Passwords are never logged.

use tracing_subscriber::EnvFilter;

pub const ENV: &str = "PASSGEN_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
