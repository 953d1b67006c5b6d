//! Unit of work service
//!
//! A work unit is the body of a single step. The execution service owns the
//! loop, logging and error handling; work units only do the work.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use stepjob_core::domain::job::Step;
use tracing::debug;

/// Everything a work unit knows about the step it is running
#[derive(Debug, Clone)]
pub struct StepContext {
    pub job_id: String,
    pub step: Step,
}

/// Service trait for the body of a step
#[async_trait]
pub trait WorkUnit: Send + Sync {
    /// Performs the work of one step
    ///
    /// Any error aborts the job.
    async fn perform(&self, ctx: &StepContext) -> Result<()>;
}

/// Placeholder work that waits a fixed delay per step
pub struct SimulatedWork {
    delay: Duration,
}

impl SimulatedWork {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl WorkUnit for SimulatedWork {
    async fn perform(&self, ctx: &StepContext) -> Result<()> {
        debug!(
            "Simulating step {} of job {} for {:?}",
            ctx.step, ctx.job_id, self.delay
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
