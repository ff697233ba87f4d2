//! Logging setup on the `tracing` ecosystem.
//!
//! Progress lines ("Navigating to ...", "Taking screenshot of ...") are
//! emitted at INFO, which is the default level. `--verbose` drops to DEBUG,
//! `--quiet` raises to ERROR, and `RUST_LOG` overrides both defaults.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Call once at startup, before any logging occurs.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("shotcheck=debug")
    } else if quiet {
        EnvFilter::new("shotcheck=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shotcheck=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be installed once per process, so these
    // tests only exercise filter construction.

    #[test]
    fn verbose_filter_parses() {
        let _filter = EnvFilter::new("shotcheck=debug");
    }

    #[test]
    fn quiet_filter_parses() {
        let _filter = EnvFilter::new("shotcheck=error");
    }
}
