//! Console logging setup.
//!
//! The page logs through `tracing` everywhere. The host installs a single
//! `fmt` subscriber filtered by `RUST_LOG`, falling back to the directive
//! passed in when the variable is unset or unparsable.
//!
//! ```ignore
//! fortress_core::logging::init("info");
//! tracing::info!("HP Fortress dashboard initialized");
//! ```

use tracing_subscriber::EnvFilter;

/// Default directive used when neither `RUST_LOG` nor the caller says otherwise.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Build the filter: `RUST_LOG` wins, otherwise `default_directive`.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber.
///
/// Returns `false` if a subscriber was already installed (tests, embedding).
pub fn init(default_directive: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .with_target(false)
        .try_init()
        .is_ok()
}
