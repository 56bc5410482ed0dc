//! Simpler Core
//!
//! Building blocks for structuring request-handling logic as composable jobs.
//!
//! This crate contains:
//! - Job traits: `Job` plus the typed `InJob`, `OutJob` and `InOutJob` variants
//! - Typed fields: `Input` (must be assigned) and `Output` (lazily defaulted)
//! - `Invoke`: the handle a parent job uses to configure and run a sub-job
//! - Sub-job injection: per-type registries that bind unbound members
//! - Lifecycle: the per-instance state machine enforced by the runner

pub mod error;
pub mod inject;
pub mod invoke;
pub mod io;
pub mod job;
pub mod lifecycle;

pub use error::{JobError, Result};
pub use inject::{InjectionRecord, Injected, SubJobs, inject_sub_jobs};
pub use invoke::Invoke;
pub use io::{Input, Output};
pub use job::{InJob, InOutJob, Job, OutJob};
pub use lifecycle::{JobState, Lifecycle, Tracked};
