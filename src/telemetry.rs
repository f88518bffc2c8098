//! Telemetry helpers for applications embedding `interval-chart`.
//!
//! Chart code only emits `tracing` events. Installing a subscriber is left to
//! the host, or to these opt-in helpers behind the `telemetry` feature.

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`,
/// falling back to `info`.
///
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default_filter("info")
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"interval_chart=debug"`.
#[must_use]
pub fn init_tracing_with_default_filter(default_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
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
