//! Configuration, logging and seed data for Secure Eye

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod seed;

// Re-export commonly used types
pub use config::{Config, DashboardConfig, LoggingConfig};
pub use secureeye_types::{Error, Result};
pub use seed::{SeedSet, admin_cameras, load_seed_file, seed_store, user_cameras};

/// Initialize logging with the given configuration.
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Errors
///
/// Returns [`Error::Configuration`] if the level does not parse or a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| Error::configuration(format!("invalid log level: {e}")))?,
    };

    let subscriber = tracing_subscriber::registry().with(env_filter);

    let installed = if config.format == "json" {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init()
    };

    installed.map_err(|e| Error::configuration(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_fails_second_time() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config);
        let second = init_logging(&config);

        assert!(matches!(second, Err(Error::Configuration { .. })));
    }
}
