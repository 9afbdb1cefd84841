//! Logging configuration using the tracing ecosystem.
//!
//! Logs go to stderr so they never interleave with command output on
//! stdout. The level is controlled by `RUST_LOG`, with `--verbose` raising
//! the default from warnings to debug.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default log filter if RUST_LOG is not set.
const DEFAULT_LOG_FILTER: &str = "rd=warn";

/// Log filter used when --verbose is given and RUST_LOG is not set.
const VERBOSE_LOG_FILTER: &str = "rd=debug";

/// Initialize the logging system.
///
/// `RUST_LOG` wins over the `--verbose` flag when both are present.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let default_filter = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time(),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "rd starting");

    Ok(())
}
