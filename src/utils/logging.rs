//! Logging
//!
//! Installs the global tracing subscriber. `RUST_LOG` wins over the default
//! directive when set.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const DEFAULT_DIRECTIVE: &str = "timeleft=info";

pub fn init_logging(default_directive: &str) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let _ = init_logging(DEFAULT_DIRECTIVE);
        assert!(init_logging(DEFAULT_DIRECTIVE).is_err());
    }
}
