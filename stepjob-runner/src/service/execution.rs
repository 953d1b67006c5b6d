//! Execution service
//!
//! Drives a job through its steps:
//! - Logging the start, every step and the completion
//! - Delegating each step body to a work unit
//! - Turning any failure into a single error line and a failed result
//!
//! `execute_job` is the only place errors are caught.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use stepjob_core::domain::job::{Job, JobResult};
use stepjob_core::domain::log::LogEntry;
use tracing::{debug, warn};

use crate::service::log_sink::LogSink;
use crate::service::work::{StepContext, WorkUnit};

/// Service trait for executing jobs
#[async_trait]
pub trait ExecutionService: Send + Sync {
    /// Runs a pending job to completion or failure
    ///
    /// Never returns an error: failures are reported through the job log
    /// and the returned result.
    async fn execute_job(&self, job: &mut Job) -> JobResult;
}

/// Standard implementation of ExecutionService
pub struct StandardExecutionService {
    work: Arc<dyn WorkUnit>,
    log: Arc<dyn LogSink>,
}

impl StandardExecutionService {
    /// Creates a new standard execution service
    ///
    /// # Arguments
    /// * `work` - Body run for every step
    /// * `log` - Sink receiving the job log lines
    pub fn new(work: Arc<dyn WorkUnit>, log: Arc<dyn LogSink>) -> Self {
        Self { work, log }
    }

    async fn process_job(&self, job: &mut Job) -> Result<()> {
        self.log.write(LogEntry::info(format!(
            "Starting job processing for job ID: {}",
            job.job_id
        )));
        job.start()?;

        while job.current_step() < job.total_steps {
            let step = job.begin_step()?;
            self.log
                .write(LogEntry::info(format!("Processing step {}", step)));

            let ctx = StepContext {
                job_id: job.job_id.clone(),
                step,
            };
            self.work.perform(&ctx).await?;

            job.finish_step()?;
            debug!("Step {} of job {} done", step, job.job_id);
        }

        job.complete()?;
        self.log.write(LogEntry::info(format!(
            "Job {} completed successfully",
            job.job_id
        )));

        Ok(())
    }
}

#[async_trait]
impl ExecutionService for StandardExecutionService {
    async fn execute_job(&self, job: &mut Job) -> JobResult {
        debug!("Executing job {} ({} steps)", job.job_id, job.total_steps);

        match self.process_job(job).await {
            Ok(()) => JobResult::succeeded(),
            Err(e) => {
                let message = format!("{:#}", e);
                self.log
                    .write(LogEntry::error(format!("Error processing job: {}", message)));

                if let Err(e) = job.fail() {
                    warn!("Could not mark job {} as failed: {}", job.job_id, e);
                }

                JobResult::failed(message)
            }
        }
    }
}
