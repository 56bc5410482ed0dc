//! Job traits
//!
//! A [`Job`] is a unit of work with a single entry point. Typed variants add a
//! settable input ([`InJob`]), a lazily-defaulted output ([`OutJob`]) or both
//! ([`InOutJob`]).

use crate::error::Result;
use crate::inject::SubJobs;
use crate::io::{Input, Output};

/// Base unit of work
///
/// Each instance is constructed, optionally wired with sub-jobs, executed once
/// and then discarded after its output has been read.
pub trait Job {
    /// Runs the job's own logic
    ///
    /// # Errors
    /// Any failure, including errors bubbling up from sub-jobs invoked here,
    /// is returned to the caller unchanged.
    fn execute(&mut self) -> Result<()>;

    /// Declares the job's sub-job members
    ///
    /// Returning `Some` marks the job as containing sub-jobs: the runner then
    /// performs an injection pass over the listed members before `execute`.
    /// Ordinary jobs keep the default and pay nothing for it.
    fn sub_jobs() -> Option<SubJobs<Self>>
    where
        Self: Sized,
    {
        None
    }
}

/// A job with a typed input
pub trait InJob: Job {
    type In;

    fn input_field(&self) -> &Input<Self::In>;

    fn input_field_mut(&mut self) -> &mut Input<Self::In>;

    fn set_input(&mut self, input: Self::In) {
        self.input_field_mut().set(input);
    }

    /// # Errors
    /// [`JobError::MissingInput`](crate::JobError::MissingInput) if nothing was assigned
    fn input(&self) -> Result<&Self::In> {
        self.input_field().get()
    }
}

/// A job with a typed output
pub trait OutJob: Job {
    type Out: Default;

    fn output_field(&self) -> &Output<Self::Out>;

    fn output_field_mut(&mut self) -> &mut Output<Self::Out>;

    /// Reads the output, building the default on first read if unset
    fn output(&self) -> &Self::Out {
        self.output_field().get()
    }

    fn set_output(&mut self, output: Self::Out) {
        self.output_field_mut().set(output);
    }
}

/// A job with both a typed input and a typed output
pub trait InOutJob: InJob + OutJob {}

impl<T: InJob + OutJob + ?Sized> InOutJob for T {}
