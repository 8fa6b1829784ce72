//! Shared setup for the integration tests.
//!
//! `color_distance` emits its diagnostics through `log`: rejected hex strings
//! at debug, parse-cache hits and misses and computed distances at trace.
//! The subscriber installed here picks those up through the `tracing-log`
//! bridge, next to the `tracing` events the tests emit themselves.
//!
//! # Environment Variables
//!
//! - `RUST_LOG=color_distance=trace` - Show every cache lookup and distance
//! - `RUST_LOG=color_distance::sync=warn` - Only report poisoned-lock recovery
//! - `TEST_LOG_JSON=1` - One JSON object per event, for CI log collectors

#![allow(dead_code)]

pub mod assertions;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Rejections are visible by default; per-lookup trace output is opt-in.
const DEFAULT_FILTER: &str = "warn,color_distance=debug";

static INIT: Once = Once::new();

/// Install the test subscriber once per test binary.
///
/// Call at the top of each test; later calls do nothing.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let json = std::env::var_os("TEST_LOG_JSON").is_some();
        let json_layer = json.then(|| fmt::layer().json().with_test_writer());
        let text_layer = (!json).then(|| {
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .with_line_number(true)
                .compact()
        });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .with(text_layer)
            .try_init()
            .ok();
    });
}

/// Enter a named span for one step of a test, such as "identity" or
/// "black to white".
pub fn test_phase(name: &str) -> tracing::span::EnteredSpan {
    let span = tracing::info_span!("phase", name);
    tracing::debug!(phase = name, "begin");
    span.entered()
}

/// Record which test is running and what it checks.
pub fn log_test_context(test_name: &str, description: &str) {
    tracing::info!(test = test_name, checks = description, "start");
}
