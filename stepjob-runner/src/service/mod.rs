//! Service layer
//!
//! Services contain the runner's behavior: executing a job, the body of
//! each step, and where job log lines go.
//!
//! All services are trait-based so real work and other log destinations can
//! be plugged in without touching the execution loop.

mod execution;
mod log_sink;
mod work;

// Re-export traits
pub use execution::ExecutionService;
pub use log_sink::LogSink;
pub use work::WorkUnit;

// Re-export implementations
pub use execution::StandardExecutionService;
pub use log_sink::StdoutLogSink;
pub use work::SimulatedWork;
