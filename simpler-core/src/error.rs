//! Error types for job execution

use thiserror::Error;

use crate::lifecycle::JobState;

/// Result type alias for job operations
pub type Result<T> = std::result::Result<T, JobError>;

/// Errors raised while wiring, configuring or executing jobs
#[derive(Debug, Error)]
pub enum JobError {
    /// An invoker was configured or invoked before a sub-job was bound to it
    #[error("invoker for '{job}' has no bound sub-job")]
    UnboundInvoker {
        /// Fully-qualified type name of the expected sub-job
        job: &'static str,
    },

    /// A sub-job member could not be constructed during injection
    #[error("failed to construct '{job}' for member '{member}': {reason}")]
    Construction {
        /// Fully-qualified type name of the sub-job
        job: &'static str,
        /// Name of the parent member being injected
        member: &'static str,
        /// Why the factory failed
        reason: String,
    },

    /// A job read its input before anything assigned it
    #[error("input of '{job}' read before it was assigned")]
    MissingInput {
        /// Fully-qualified type name of the input
        job: &'static str,
    },

    /// Failure raised by a job's own execution logic
    #[error(transparent)]
    Execution(#[from] anyhow::Error),

    /// A job was driven through an impossible lifecycle step
    #[error("invalid job state transition: {from:?} -> {to:?}")]
    InvalidTransition { from: JobState, to: JobState },
}

impl JobError {
    /// Create an unbound-invoker error for sub-job type `J`
    pub fn unbound<J: ?Sized>() -> Self {
        Self::UnboundInvoker {
            job: std::any::type_name::<J>(),
        }
    }

    /// Wrap an arbitrary failure raised by job logic
    pub fn execution(error: impl Into<anyhow::Error>) -> Self {
        Self::Execution(error.into())
    }

    /// Check if this error means an invoker was never wired
    pub fn is_unbound(&self) -> bool {
        matches!(self, Self::UnboundInvoker { .. })
    }

    /// Check if this error came from a failed sub-job construction
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::Construction { .. })
    }
}
