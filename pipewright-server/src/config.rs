//! Server configuration
//!
//! Defines all configurable parameters for the server including the bind
//! address, the Jenkinsfile template location, and the validator
//! subprocess timeout.

use std::path::PathBuf;
use std::time::Duration;

/// Server configuration
///
/// The validator timeout is configurable so deployments with slow linters
/// (JVM startup, container wrappers) can loosen it without a rebuild.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// Path to the Jenkinsfile template resource
    pub template_path: PathBuf,

    /// Maximum time a validator subprocess may run before it is killed
    pub validator_timeout: Duration,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables (all optional):
    /// - PIPEWRIGHT_BIND_ADDR (default: 0.0.0.0:8080)
    /// - PIPEWRIGHT_TEMPLATE (default: templates/Jenkinsfile.hbs)
    /// - VALIDATOR_TIMEOUT (seconds, default: 10)
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("PIPEWRIGHT_BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let template_path = std::env::var("PIPEWRIGHT_TEMPLATE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("templates/Jenkinsfile.hbs"));

        let validator_timeout = std::env::var("VALIDATOR_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        Self {
            bind_addr,
            template_path,
            validator_timeout,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if self.template_path.as_os_str().is_empty() {
            anyhow::bail!("template_path cannot be empty");
        }

        if self.validator_timeout.is_zero() {
            anyhow::bail!("validator_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            template_path: PathBuf::from("templates/Jenkinsfile.hbs"),
            validator_timeout: Duration::from_secs(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.validator_timeout, Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Empty bind address should fail
        config.bind_addr = String::new();
        assert!(config.validate().is_err());

        config.bind_addr = "127.0.0.1:9000".to_string();

        // Zero timeout should fail
        config.validator_timeout = Duration::from_secs(0);
        assert!(config.validate().is_err());

        config.validator_timeout = Duration::from_secs(5);
        assert!(config.validate().is_ok());
    }
}
