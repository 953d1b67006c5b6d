//! Core domain types
//!
//! A job is a transient, in-process entity: it is created when the worker
//! starts and discarded when the process exits.

pub mod job;
pub mod log;
