use tracing_subscriber::EnvFilter;

use crate::config::config;

/// Install the fmt subscriber. `RUST_LOG` wins; otherwise the level follows
/// `mapper.debug_logging`. Safe to call more than once.
pub fn init() {
    let default_level = if config().mapper.debug_logging {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
