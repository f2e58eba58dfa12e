//! Telemetry helpers for applications embedding `mini-chart-rs`.
//!
//! The widget only emits `tracing` events; installing a subscriber is left to
//! the host. `init_default_tracing` is a convenience for demos and tests.

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling back
/// to `default_directive` when the variable is unset or malformed.
///
/// Returns `true` when initialization succeeds, `false` when the `telemetry`
/// feature is disabled or a global subscriber is already installed.
#[must_use]
pub fn init_tracing_with_default(default_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_directive;
        false
    }
}

/// Same as [`init_tracing_with_default`] with an `info` fallback.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default("info")
}
