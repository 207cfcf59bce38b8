//! colorpick-test - Regression test framework for colorpick
//!
//! Every `tests/*_reg.rs` file in the workspace drives its checks through a
//! [`RegParams`], which numbers each comparison, records failures with
//! their index, and reports a summary on [`RegParams::cleanup`].
//!
//! # Usage
//!
//! ```ignore
//! use colorpick_test::RegParams;
//!
//! let mut rp = RegParams::new("select");
//! rp.compare_values(5.0, selected.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"
//! - `RUST_LOG`: Filter for the `tracing` output captured during tests

mod error;
pub mod images;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call has an effect.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
