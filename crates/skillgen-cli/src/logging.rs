//! Tracing setup. Logs go to stderr and stay quiet unless asked for.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "skillgen=debug,skillgen_cli=debug,skillgen_core=debug,skillgen_config=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. `RUST_LOG` overrides `--verbose`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
