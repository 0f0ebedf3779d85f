use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Diagnostics go to stderr and are filtered by `RUST_LOG` (default `warn`),
/// keeping stdout for the game itself.
///
/// ```bash
/// RUST_LOG=life=debug,libgame=debug cargo run -p life
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
