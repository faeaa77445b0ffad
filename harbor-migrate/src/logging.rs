//! Logger setup for the CLI.

use env_logger::{Builder, Env};

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Logger builder honouring `RUST_LOG`, read when this is called
///
/// Load `.env` first so a `RUST_LOG` defined there takes effect.
pub fn builder(quiet: bool, verbose: bool) -> Builder {
    Builder::from_env(Env::default().default_filter_or(default_filter(quiet, verbose)))
}
