//! Subprocess validator backends
//!
//! Each backend wraps one external executable, located via the process's
//! PATH. The Jenkinsfile is piped to the tool's stdin; stdout and stderr
//! are captured. Exit status zero means valid. On a nonzero exit the
//! error message is taken from stderr, falling back to stdout when the
//! tool writes its diagnostics there.
//!
//! Invocations share no mutable state, so concurrent validations run
//! fully in parallel.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::warn;

use super::{Attempt, ValidatorBackend, Verdict};

/// Groovy snippet that parses stdin without executing it. A Jenkinsfile
/// is Groovy, so the generic interpreter can at least catch syntax errors.
const GROOVY_PARSE: &str = "new GroovyShell().parse(System.in.newReader())";

/// Validator backend invoking one external command
pub struct CommandBackend {
    name: &'static str,
    program: &'static str,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandBackend {
    pub fn new(
        name: &'static str,
        program: &'static str,
        args: &[&str],
        timeout: Duration,
    ) -> Self {
        Self {
            name,
            program,
            args: args.iter().map(|a| a.to_string()).collect(),
            timeout,
        }
    }

    /// Dedicated Jenkinsfile linter, reading the pipeline from stdin
    pub fn jflint(timeout: Duration) -> Self {
        Self::new("jflint", "jflint", &["-"], timeout)
    }

    /// Generic Groovy interpreter fallback, parse-only
    pub fn groovy(timeout: Duration) -> Self {
        Self::new("groovy", "groovy", &["-e", GROOVY_PARSE], timeout)
    }
}

#[async_trait]
impl ValidatorBackend for CommandBackend {
    fn name(&self) -> &str {
        self.name
    }

    async fn attempt(&self, jenkinsfile: &str) -> std::io::Result<Attempt> {
        let mut cmd = Command::new(self.program);
        cmd.args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            // A missing binary is unavailability, not an error
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Attempt::Unavailable),
            Err(e) => return Err(e),
        };

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(jenkinsfile.as_bytes()).await {
                // The tool may exit before draining stdin
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
            // Drop closes the pipe so the tool sees end-of-input
        }

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(output) => output?,
            Err(_) => {
                // A hung tool says nothing about the input; treat it like a
                // missing backend and let the chain move on. kill_on_drop
                // reaps the subprocess.
                warn!(
                    "Validator backend {} timed out after {:?}, skipping",
                    self.name, self.timeout
                );
                return Ok(Attempt::Unavailable);
            }
        };

        if output.status.success() {
            return Ok(Attempt::Ran(Verdict::pass()));
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = if stderr.trim().is_empty() {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr.trim().to_string()
        };

        Ok(Attempt::Ran(Verdict::fail(message)))
    }
}
