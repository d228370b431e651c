//! Logging and tracing setup
//!
//! Provides structured logging configuration using tracing.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging for the demo CLI.
///
/// Reads the log level from `RUST_LOG`, defaulting to `info`. The parser
/// itself never calls this — only the binary entry point does, once, at
/// startup.
///
/// ```rust
/// use tracing::{info, error};
/// info!(block_height = 439, "parsed block");
/// error!(error = %err, "failed to decode transaction");
/// ```
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_level(true)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{error, info, warn};

    #[test]
    fn test_tracing_init() {
        let _result = std::panic::catch_unwind(|| {
            init_tracing();
        });

        info!("test log message");
        warn!(count = 42, "warning with structured data");
        error!(error = "test error", "error message");
    }
}
