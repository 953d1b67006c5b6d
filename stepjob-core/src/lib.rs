//! Stepjob Core
//!
//! Core types for the stepjob batch worker.
//!
//! This crate contains the domain types shared by the runner: the job state
//! machine, job results and log records.

pub mod domain;
