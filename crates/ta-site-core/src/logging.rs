//! Tracing subscriber setup shared by the binaries.
//!
//! ```ignore
//! ta_site_core::logging::init(cli.verbose)?;
//! tracing::info!("Rendering site");
//! ```
//!
//! `RUST_LOG` always wins over the verbosity flag:
//!
//! ```bash
//! RUST_LOG=ta_site_core=debug ta-site-cli export
//! ```

use tracing_subscriber::EnvFilter;

use crate::error::{SiteError, SiteResult};

/// Default filter directive for a `-v` count.
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber.
///
/// Fails instead of panicking when a subscriber is already installed.
pub fn init(verbosity: u8) -> SiteResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_for(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| SiteError::Logging(e.to_string()))
}
