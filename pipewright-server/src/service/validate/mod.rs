//! Jenkinsfile syntax validation
//!
//! Validation is delegated to external tools behind a uniform backend
//! capability, tried in a fixed priority order. The chain must keep three
//! outcomes distinct: the Jenkinsfile is valid, the Jenkinsfile is invalid
//! with a reason, or no validator tool is installed at all. The last one
//! is a service-configuration fault, never a verdict on the input.
//!
//! Chain rules:
//! - a backend whose binary is missing is skipped, not an error;
//! - the first backend that actually runs is authoritative, success or
//!   failure, and no further backend is consulted;
//! - if nothing in the chain is installed, validation fails with
//!   [`ValidateError::NoValidatorAvailable`].

pub mod command;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub use command::CommandBackend;

/// Result type alias for validation operations
pub type Result<T> = std::result::Result<T, ValidateError>;

/// Errors distinct from a negative validation verdict
#[derive(Debug, Error)]
pub enum ValidateError {
    /// No backend in the chain is installed; the service cannot validate
    /// anything until the deployment environment is fixed.
    #[error("no Jenkinsfile validator is available")]
    NoValidatorAvailable,

    /// A backend was found but invoking it failed
    #[error("validator I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Verdict reported by a backend that actually ran
#[derive(Debug, Clone)]
pub struct Verdict {
    pub valid: bool,
    /// Error output captured from the tool; empty on success
    pub message: String,
}

impl Verdict {
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Outcome of asking one backend about a Jenkinsfile
#[derive(Debug, Clone)]
pub enum Attempt {
    /// The backend's tool is not installed; try the next one
    Unavailable,
    /// The tool ran to completion and produced a verdict
    Ran(Verdict),
}

/// A single external validation tool
#[async_trait]
pub trait ValidatorBackend: Send + Sync {
    /// Backend name for logging
    fn name(&self) -> &str;

    /// Attempts to validate the Jenkinsfile with this backend's tool
    ///
    /// Returns `Attempt::Unavailable` when the tool is not installed;
    /// I/O errors other than a missing binary propagate as `Err`.
    async fn attempt(&self, jenkinsfile: &str) -> std::io::Result<Attempt>;
}

/// Prioritized chain of validator backends
pub struct SyntaxValidator {
    backends: Vec<Box<dyn ValidatorBackend>>,
}

impl SyntaxValidator {
    pub fn new(backends: Vec<Box<dyn ValidatorBackend>>) -> Self {
        Self { backends }
    }

    /// The standard chain: the dedicated Jenkinsfile linter first, the
    /// generic Groovy interpreter as fallback.
    pub fn default_chain(timeout: Duration) -> Self {
        Self::new(vec![
            Box::new(CommandBackend::jflint(timeout)),
            Box::new(CommandBackend::groovy(timeout)),
        ])
    }

    /// Walks the chain and returns the first authoritative verdict
    pub async fn validate(&self, jenkinsfile: &str) -> Result<Verdict> {
        for backend in &self.backends {
            match backend.attempt(jenkinsfile).await? {
                Attempt::Unavailable => {
                    tracing::debug!("Validator backend {} unavailable, skipping", backend.name());
                }
                Attempt::Ran(verdict) => {
                    tracing::debug!(
                        "Validator backend {} reported valid={}",
                        backend.name(),
                        verdict.valid
                    );
                    return Ok(verdict);
                }
            }
        }

        Err(ValidateError::NoValidatorAvailable)
    }
}
