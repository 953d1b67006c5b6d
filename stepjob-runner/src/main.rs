//! Stepjob Runner
//!
//! A batch worker that processes one job per invocation and exits.
//!
//! Architecture:
//! - Configuration: Resolve the job identifier from the environment once
//! - Services: Step execution, the per-step work unit and the job log sink
//!
//! Job log lines go to stdout. Internal diagnostics go through `tracing` to
//! stderr and are silent unless `RUST_LOG` asks for them. The exit status is
//! 0 when every step finished and 1 otherwise.

mod config;
mod service;

use std::process::ExitCode;
use std::sync::Arc;
use stepjob_core::domain::job::{Job, JobResult};
use stepjob_core::domain::log::LogEntry;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::service::{
    ExecutionService, LogSink, SimulatedWork, StandardExecutionService, StdoutLogSink, WorkUnit,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize diagnostics
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stepjob_runner=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    debug!(
        "Loaded configuration: job_id={}, total_steps={}, step_delay={:?}",
        config.job_id, config.total_steps, config.step_delay
    );

    let log: Arc<dyn LogSink> = Arc::new(StdoutLogSink::new(config.logger_name.clone()));

    let result = match config.validate() {
        Ok(()) => run(&config, Arc::clone(&log)).await,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            log.write(LogEntry::error(format!("Error processing job: {:#}", e)));
            JobResult::failed(format!("{:#}", e))
        }
    };

    debug!(
        "Job {} finished: success={}, exit_code={}",
        config.job_id, result.success, result.exit_code
    );

    ExitCode::from(exit_status(&result))
}

/// Builds the services and runs the configured job
async fn run(config: &Config, log: Arc<dyn LogSink>) -> JobResult {
    let work: Arc<dyn WorkUnit> = Arc::new(SimulatedWork::new(config.step_delay));
    let execution_service = StandardExecutionService::new(work, log);

    let mut job = Job::new(config.job_id.clone(), config.total_steps);
    execution_service.execute_job(&mut job).await
}

/// Maps a job result onto the process exit status
///
/// Codes outside 0..=255 are reported as a plain failure.
fn exit_status(result: &JobResult) -> u8 {
    u8::try_from(result.exit_code).unwrap_or(1)
}
