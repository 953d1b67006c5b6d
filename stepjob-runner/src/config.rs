//! Runner configuration
//!
//! Resolved once at startup into an immutable value that the rest of the
//! runner consumes. The only external input is the job identifier.

use std::time::Duration;

/// Environment variable holding the job identifier
pub const JOB_ID_ENV: &str = "AWS_BATCH_JOB_ID";

/// Identifier used when the environment provides none
pub const DEFAULT_JOB_ID: &str = "local-job";

/// Number of steps in every job
pub const TOTAL_STEPS: u32 = 5;

/// Time spent on each step
pub const STEP_DELAY: Duration = Duration::from_secs(2);

/// Logger name printed in every job log line
pub const LOGGER_NAME: &str = "stepjob_runner";

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Identifier used to correlate log lines for this run
    pub job_id: String,

    /// How many steps the job processes
    pub total_steps: u32,

    /// How long each step takes
    pub step_delay: Duration,

    /// Logger name shown in rendered log lines
    pub logger_name: String,
}

impl Config {
    /// Creates a configuration with the fixed step count and delay
    pub fn new(job_id: String) -> Self {
        Self {
            job_id,
            total_steps: TOTAL_STEPS,
            step_delay: STEP_DELAY,
            logger_name: LOGGER_NAME.to_string(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - AWS_BATCH_JOB_ID (optional, default: local-job)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    ///
    /// An unset or empty job identifier falls back to [`DEFAULT_JOB_ID`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let job_id = lookup(JOB_ID_ENV)
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| DEFAULT_JOB_ID.to_string());

        Self::new(job_id)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.job_id.is_empty() {
            anyhow::bail!("job_id cannot be empty");
        }

        if self.total_steps == 0 {
            anyhow::bail!("total_steps must be greater than 0");
        }

        if self.logger_name.is_empty() {
            anyhow::bail!("logger_name cannot be empty");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_JOB_ID.to_string())
    }
}
