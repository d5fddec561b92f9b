use tracing_subscriber::EnvFilter;

static INIT_ONCE: std::sync::Once = std::sync::Once::new();

/// Install the global fmt subscriber once.
///
/// Verbosity maps 0 -> warn, 1 -> info, 2 -> debug, 3+ -> trace for this
/// crate's events; `RUST_LOG` overrides it when set. Logs go to stderr so
/// generated periods on stdout stay machine-readable.
pub fn init_tracing_once(verbosity: u8) {
    INIT_ONCE.call_once(|| {
        let level = match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("periodgen={level}")));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
