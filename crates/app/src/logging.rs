use tracing_subscriber::{EnvFilter, fmt, fmt::time::UtcTime, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_DIRECTIVES: &str = "info,services=debug,storage=info";

/// Install the global subscriber. `RUST_LOG` overrides the default directives.
///
/// A second call is a no-op.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_DIRECTIVES))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_timer(UtcTime::rfc_3339()),
        )
        .try_init();
}
