//! Tracing subscriber setup for binaries built on this crate.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utilkit_core::{Error, Result};

/// Installs a compact stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used, raised to
/// `debug` when `verbose` is true. Fails if the filter does not parse or a
/// global subscriber is already installed.
pub fn init(default_filter: &str, verbose: bool) -> Result<()> {
    let fallback = if verbose { "debug" } else { default_filter };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback).map_err(|e| {
            Error::configuration(format!("invalid log filter '{fallback}': {e}"))
        })?,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::runtime(format!("failed to install tracing subscriber: {e}")))
}

fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_filter() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let err = init("utilkit=notalevel", false).unwrap_err();
        assert!(err.to_string().contains("invalid log filter"));
    }
}
