//! Observability (logging)
//!
//! Structured logging through `tracing`, written to stderr so generated
//! progress output and diagnostics never mix with piped stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging stack
///
/// `RUST_LOG` takes precedence; otherwise the level is derived from the
/// CLI verbosity (0-1 warn, 2 info, 3 debug).
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use drf_scaffold::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init(2)?;
/// tracing::info!("scaffolding started");
/// # Ok(())
/// # }
/// ```
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

/// Filter directive for a verbosity level
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 | 1 => "warn",
        2 => "info,drf_scaffold=info",
        _ => "debug,drf_scaffold=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "warn");
        assert_eq!(default_directive(2), "info,drf_scaffold=info");
        assert_eq!(default_directive(3), "debug,drf_scaffold=trace");
    }
}
