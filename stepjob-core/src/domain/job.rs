//! Job domain types

use std::fmt;

use thiserror::Error;

/// A single batch job run
///
/// Tracks how many steps have finished. `current_step` counts completed
/// steps, so it starts at 0 and reaches `total_steps` exactly once all
/// steps are done.
#[derive(Debug, Clone)]
pub struct Job {
    pub job_id: String,
    pub total_steps: u32,
    current_step: u32,
    status: JobStatus,
}

/// Job lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl JobStatus {
    /// Returns true once the job can no longer change status
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Succeeded | JobStatus::Failed)
    }
}

/// Position of a step within its job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// 0-based index
    pub index: u32,
    pub total: u32,
}

impl Step {
    /// 1-based step number, as reported in logs
    pub fn number(&self) -> u32 {
        self.index + 1
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.number(), self.total)
    }
}

/// Errors raised by invalid job state transitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JobError {
    #[error("invalid job transition from {from:?} to {to:?}")]
    InvalidTransition { from: JobStatus, to: JobStatus },

    #[error("job is not running (status: {0:?})")]
    NotRunning(JobStatus),

    #[error("all {total} steps have already been processed")]
    StepsExhausted { total: u32 },

    #[error("job finished {completed} of {total} steps")]
    Incomplete { completed: u32, total: u32 },
}

impl Job {
    /// Creates a pending job
    pub fn new(job_id: impl Into<String>, total_steps: u32) -> Self {
        Self {
            job_id: job_id.into(),
            total_steps,
            current_step: 0,
            status: JobStatus::Pending,
        }
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    /// Number of steps finished so far
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Moves the job from `Pending` to `Running`
    pub fn start(&mut self) -> Result<(), JobError> {
        if self.status != JobStatus::Pending {
            return Err(JobError::InvalidTransition {
                from: self.status,
                to: JobStatus::Running,
            });
        }
        self.status = JobStatus::Running;
        Ok(())
    }

    /// Returns the step to process next without advancing the counter
    pub fn begin_step(&self) -> Result<Step, JobError> {
        self.ensure_step_available()?;
        Ok(Step {
            index: self.current_step,
            total: self.total_steps,
        })
    }

    /// Marks the current step as done
    pub fn finish_step(&mut self) -> Result<(), JobError> {
        self.ensure_step_available()?;
        self.current_step += 1;
        Ok(())
    }

    /// Moves the job to `Succeeded` once every step has finished
    pub fn complete(&mut self) -> Result<(), JobError> {
        if self.status != JobStatus::Running {
            return Err(JobError::InvalidTransition {
                from: self.status,
                to: JobStatus::Succeeded,
            });
        }
        if self.current_step != self.total_steps {
            return Err(JobError::Incomplete {
                completed: self.current_step,
                total: self.total_steps,
            });
        }
        self.status = JobStatus::Succeeded;
        Ok(())
    }

    /// Moves the job to `Failed`
    ///
    /// Reachable from any non-terminal status.
    pub fn fail(&mut self) -> Result<(), JobError> {
        if self.status.is_terminal() {
            return Err(JobError::InvalidTransition {
                from: self.status,
                to: JobStatus::Failed,
            });
        }
        self.status = JobStatus::Failed;
        Ok(())
    }

    fn ensure_step_available(&self) -> Result<(), JobError> {
        if self.status != JobStatus::Running {
            return Err(JobError::NotRunning(self.status));
        }
        if self.current_step >= self.total_steps {
            return Err(JobError::StepsExhausted {
                total: self.total_steps,
            });
        }
        Ok(())
    }
}

/// Outcome of a job run, mapped onto the process exit status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobResult {
    pub success: bool,
    pub exit_code: i32,
    pub error_message: Option<String>,
}

impl JobResult {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            exit_code: 0,
            error_message: None,
        }
    }

    pub fn failed(error_message: impl Into<String>) -> Self {
        Self {
            success: false,
            exit_code: 1,
            error_message: Some(error_message.into()),
        }
    }
}
