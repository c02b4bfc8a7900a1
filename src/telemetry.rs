//! Optional `tracing` setup for hosts of the codec.
//!
//! The codec reports through `tracing` events under the `chart_style` target:
//! `debug` for encode/decode/file summaries, `trace` for every ignored block
//! or entry, `warn` for dropped verbatim spans and series left unstyled.
//! Nothing is installed unless the host asks for it.

/// Directive used when `RUST_LOG` is unset: warnings from this crate only.
pub const DEFAULT_DIRECTIVE: &str = "chart_style=warn";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_DIRECTIVE`]. Requires the `telemetry` feature.
///
/// Returns `false` when the feature is off or a global subscriber already
/// exists.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
