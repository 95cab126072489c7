//! Tracing setup.
//!
//! One process-wide subscriber, installed on first use and filtered by
//! `RUST_LOG` with a caller-supplied fallback. The pipeline logs under
//! its module targets: `rustyaztec::symbol_spec` carries the sizing
//! decision, `rustyaztec::text` the high-level encoding summary and
//! `rustyaztec::matrix` the painting trace.

use std::sync::Once;

static INSTALL: Once = Once::new();

fn install(default_filter: &str, capture_for_tests: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    INSTALL.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));
        if capture_for_tests {
            fmt().with_env_filter(filter).with_test_writer().init();
        } else {
            fmt().with_env_filter(filter).init();
        }
    });
}

/// Subscriber for binaries. `RUST_LOG=rustyaztec=debug` (or a
/// per-module target) widens the default info level.
pub fn init_tracing() {
    install("rustyaztec=info", false);
}

/// Subscriber for tests; output is captured per test. Any number of
/// tests may call this, only the first installs.
pub fn init_test_tracing() {
    install("rustyaztec=warn", true);
}
