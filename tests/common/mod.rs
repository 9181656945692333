//! Shared helpers for integration tests

#![allow(dead_code)]

use humantype::typing::random;
use rand::rngs::StdRng;

/// Route library logs to the test writer (RUST_LOG=humantype=trace)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Seeds used for property-style checks
pub fn seeds() -> impl Iterator<Item = StdRng> {
    (0..64u64).map(random::seeded)
}
