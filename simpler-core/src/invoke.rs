//! Invoker handles for sub-jobs
//!
//! A parent job declares each dependency as an [`Invoke<J>`] member. The
//! member is either bound up front (tests seeding a stub) or left unbound for
//! the injector to fill. The parent configures the sub-job's input with
//! [`Invoke::set`] and runs it with [`Invoke::get`].

use tracing::debug;

use crate::error::{JobError, Result};
use crate::job::Job;

/// Handle owned by a parent job for one sub-job dependency
///
/// The bound job is boxed so its address stays stable for the lifetime of the
/// binding, regardless of how the parent is moved.
pub struct Invoke<J> {
    job: Option<Box<J>>,
    executed: bool,
}

impl<J: Job> Invoke<J> {
    /// Creates a handle with no sub-job bound
    pub fn unbound() -> Self {
        Self {
            job: None,
            executed: false,
        }
    }

    /// Creates a handle already bound to `job`
    pub fn bound(job: J) -> Self {
        Self {
            job: Some(Box::new(job)),
            executed: false,
        }
    }

    /// Binds `job`, replacing any previous binding
    pub fn bind(&mut self, job: J) {
        self.job = Some(Box::new(job));
        self.executed = false;
    }

    pub fn is_bound(&self) -> bool {
        self.job.is_some()
    }

    /// Whether the bound sub-job ran since it was last configured
    pub fn has_executed(&self) -> bool {
        self.executed
    }

    pub fn job(&self) -> Option<&J> {
        self.job.as_deref()
    }

    /// # Errors
    /// [`JobError::UnboundInvoker`] if nothing is bound
    pub fn job_mut(&mut self) -> Result<&mut J> {
        self.job.as_deref_mut().ok_or_else(JobError::unbound::<J>)
    }

    /// Applies `configure` to the bound sub-job and returns the handle for chaining
    ///
    /// Configuring re-arms the handle: the next [`get`](Self::get) runs the
    /// sub-job again.
    ///
    /// # Errors
    /// [`JobError::UnboundInvoker`] if nothing is bound
    pub fn set<F>(&mut self, configure: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut J),
    {
        configure(self.job_mut()?);
        self.executed = false;
        Ok(self)
    }

    /// Executes the bound sub-job (once per configuration) and returns it
    ///
    /// # Errors
    /// [`JobError::UnboundInvoker`] if nothing is bound, otherwise whatever
    /// the sub-job's execution returned, unchanged.
    pub fn get(&mut self) -> Result<&J> {
        let job = self.job.as_deref_mut().ok_or_else(JobError::unbound::<J>)?;
        if !self.executed {
            debug!("Executing sub-job {}", std::any::type_name::<J>());
            job.execute()?;
            self.executed = true;
        }
        Ok(job)
    }
}

impl<J: Job> Default for Invoke<J> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<J> std::fmt::Debug for Invoke<J> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Invoke")
            .field("job", &std::any::type_name::<J>())
            .field("bound", &self.job.is_some())
            .field("executed", &self.executed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{Input, Output};
    use crate::job::{InJob, OutJob};

    #[derive(Debug, Default)]
    struct Greet {
        input: Input<String>,
        output: Output<String>,
        runs: usize,
    }

    impl Job for Greet {
        fn execute(&mut self) -> Result<()> {
            self.runs += 1;
            let greeting = format!("hello {}", self.input()?);
            self.set_output(greeting);
            Ok(())
        }
    }

    impl InJob for Greet {
        type In = String;

        fn input_field(&self) -> &Input<String> {
            &self.input
        }

        fn input_field_mut(&mut self) -> &mut Input<String> {
            &mut self.input
        }
    }

    impl OutJob for Greet {
        type Out = String;

        fn output_field(&self) -> &Output<String> {
            &self.output
        }

        fn output_field_mut(&mut self) -> &mut Output<String> {
            &mut self.output
        }
    }

    #[test]
    fn test_set_then_get_chain() {
        let mut invoker = Invoke::bound(Greet::default());
        let output = invoker
            .set(|job| job.set_input("rivet".to_string()))
            .unwrap()
            .get()
            .unwrap()
            .output()
            .clone();
        assert_eq!(output, "hello rivet");
    }

    #[test]
    fn test_unbound_set_fails_loudly() {
        let mut invoker: Invoke<Greet> = Invoke::unbound();
        let err = invoker.set(|_| {}).unwrap_err();
        assert!(err.is_unbound());
        assert!(err.to_string().contains("Greet"));
    }

    #[test]
    fn test_unbound_get_fails_loudly() {
        let mut invoker: Invoke<Greet> = Invoke::default();
        assert!(invoker.get().unwrap_err().is_unbound());
    }

    #[test]
    fn test_get_runs_once_per_configuration() {
        let mut invoker = Invoke::bound(Greet::default());
        invoker.set(|job| job.set_input("a".to_string())).unwrap();
        invoker.get().unwrap();
        invoker.get().unwrap();
        assert_eq!(invoker.job().unwrap().runs, 1);
        assert!(invoker.has_executed());

        invoker.set(|job| job.set_input("b".to_string())).unwrap();
        assert!(!invoker.has_executed());
        assert_eq!(invoker.get().unwrap().output(), "hello b");
        assert_eq!(invoker.job().unwrap().runs, 2);
    }

    #[test]
    fn test_sub_job_failure_propagates_unchanged() {
        let mut invoker = Invoke::bound(Greet::default());
        let err = invoker.get().unwrap_err();
        assert!(matches!(err, JobError::MissingInput { .. }));
        assert!(!invoker.has_executed());
    }

    #[test]
    fn test_bound_job_keeps_its_address() {
        let invoker = Invoke::bound(Greet::default());
        let before = invoker.job().unwrap() as *const Greet;
        let moved = invoker;
        assert!(std::ptr::eq(before, moved.job().unwrap()));
    }
}
