//! Job runner
//!
//! Drives one execution cycle for a root job:
//! - Injection pass over the job's declared sub-jobs, if it has any
//! - The job's own execution
//!
//! Errors from either step go back to the caller exactly as raised. There is
//! no retry and nothing is suppressed.

use chrono::Utc;
use simpler_core::{InjectionRecord, Job, JobError, JobState, OutJob, Result, Tracked};
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::config::RunnerConfig;
use crate::report::RunReport;

/// Runs root jobs, wiring their sub-jobs first
#[derive(Debug, Clone)]
pub struct JobRunner {
    config: RunnerConfig,
}

impl JobRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Executes one cycle for `job`
    ///
    /// The lifecycle lives in the [`Tracked`] wrapper, so a job instance can go
    /// through at most one cycle.
    ///
    /// # Returns
    /// A report of the completed cycle, including the injection record
    ///
    /// # Errors
    /// [`JobError::InvalidTransition`](simpler_core::JobError::InvalidTransition)
    /// if the job is not freshly constructed. A construction error from the
    /// injection pass aborts the cycle before the job's own logic runs.
    /// Execution failures are returned unchanged.
    pub fn run<J: Job + 'static>(&self, job: &mut Tracked<J>) -> Result<RunReport> {
        let job_type = std::any::type_name::<J>();
        if job.state() != JobState::Constructed {
            error!("Refusing to run {} in state {:?}", job_type, job.state());
            return Err(JobError::InvalidTransition {
                from: job.state(),
                to: JobState::Executing,
            });
        }

        let run_id = Uuid::new_v4();
        let started_at = Utc::now();

        info!("Run {} starting job {}", run_id, job_type);

        let injected = match J::sub_jobs() {
            Some(sub_jobs) => {
                let record = match sub_jobs.inject(&mut **job) {
                    Ok(record) => record,
                    Err(e) => {
                        job.advance(JobState::Failed)?;
                        error!("Run {} failed during injection: {}", run_id, e);
                        return Err(e);
                    }
                };
                job.advance(JobState::Injected)?;
                self.trace_injection(&record);
                record
            }
            None => {
                debug!("{} declares no sub-jobs, skipping injection", job_type);
                InjectionRecord::default()
            }
        };

        job.advance(JobState::Executing)?;
        if let Err(e) = job.execute() {
            job.advance(JobState::Failed)?;
            error!("Run {} failed: {}", run_id, e);
            return Err(e);
        }
        job.advance(JobState::Completed)?;

        let finished_at = Utc::now();
        info!(
            "Run {} completed {} in {} ms",
            run_id,
            job_type,
            (finished_at - started_at).num_milliseconds()
        );

        Ok(RunReport {
            run_id,
            runner_id: self.config.runner_id.clone(),
            job_type,
            state: job.state(),
            injected,
            started_at,
            finished_at,
        })
    }

    /// Executes one cycle and returns a copy of the job's output with the report
    pub fn run_to_output<J>(&self, job: &mut Tracked<J>) -> Result<(J::Out, RunReport)>
    where
        J: OutJob + 'static,
        J::Out: Clone,
    {
        let report = self.run(job)?;
        Ok((job.output().clone(), report))
    }

    fn trace_injection(&self, record: &InjectionRecord) {
        if !self.config.trace_injection {
            return;
        }
        for entry in record.entries() {
            info!("  - {} <- {}", entry.member, entry.job_type);
        }
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new(RunnerConfig::default())
    }
}
