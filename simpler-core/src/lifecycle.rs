//! Per-instance job lifecycle
//!
//! A job moves through `Constructed -> (Injected) -> Executing` and ends in
//! either `Completed` or `Failed`. Injection happens at most once and always
//! before execution starts.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::error::{JobError, Result};

/// Execution state of a single job instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobState {
    Constructed,
    Injected,
    Executing,
    Completed,
    Failed,
}

impl JobState {
    /// Returns true for states with no outgoing transition
    pub fn is_terminal(self) -> bool {
        matches!(self, JobState::Completed | JobState::Failed)
    }

    /// Whether moving from `self` to `next` is a legal step
    pub fn can_transition_to(self, next: JobState) -> bool {
        use JobState::*;
        matches!(
            (self, next),
            (Constructed, Injected)
                | (Constructed, Executing)
                | (Constructed, Failed)
                | (Injected, Executing)
                | (Executing, Completed)
                | (Executing, Failed)
        )
    }
}

/// Tracks and enforces the state machine for one job instance
#[derive(Debug, Clone)]
pub struct Lifecycle {
    state: JobState,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            state: JobState::Constructed,
        }
    }

    pub fn state(&self) -> JobState {
        self.state
    }

    /// Moves to `next`, rejecting illegal transitions
    pub fn advance(&mut self, next: JobState) -> Result<()> {
        if !self.state.can_transition_to(next) {
            return Err(JobError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        Ok(())
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// A job instance paired with its own lifecycle
///
/// The state travels with the instance, so once a tracked job reaches
/// `Completed` or `Failed` it cannot be driven again.
#[derive(Debug)]
pub struct Tracked<J> {
    job: J,
    lifecycle: Lifecycle,
}

impl<J> Tracked<J> {
    /// Wraps a freshly constructed job
    pub fn new(job: J) -> Self {
        Self {
            job,
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn state(&self) -> JobState {
        self.lifecycle.state()
    }

    /// Moves the wrapped job to `next`, rejecting illegal transitions
    pub fn advance(&mut self, next: JobState) -> Result<()> {
        self.lifecycle.advance(next)
    }

    pub fn into_inner(self) -> J {
        self.job
    }
}

impl<J> Deref for Tracked<J> {
    type Target = J;

    fn deref(&self) -> &J {
        &self.job
    }
}

impl<J> DerefMut for Tracked<J> {
    fn deref_mut(&mut self) -> &mut J {
        &mut self.job
    }
}
