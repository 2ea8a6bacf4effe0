// File: crates/vizkit-core/src/telemetry.rs
// Summary: Opt-in tracing subscriber setup for binaries embedding vizkit.

/// Install a compact `tracing` subscriber filtered by `RUST_LOG` (default
/// `info`), so config fallbacks and "Figure saved to" lines are visible.
///
/// Returns `false` when the `telemetry` feature is off or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().try_init().is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
