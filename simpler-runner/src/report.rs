//! Run reports
//!
//! A report only exists for a completed cycle; failures are returned to the
//! caller as the original error instead.

use chrono::{DateTime, Utc};
use serde::Serialize;
use simpler_core::{InjectionRecord, JobState};
use uuid::Uuid;

/// Summary of one completed execution cycle
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub runner_id: String,
    /// Fully-qualified type name of the root job
    pub job_type: &'static str,
    pub state: JobState,
    /// Sub-jobs bound by the injection pass, empty for ordinary jobs
    pub injected: InjectionRecord,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }

    pub fn injected_count(&self) -> usize {
        self.injected.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serialization() {
        let started_at = Utc::now();
        let report = RunReport {
            run_id: Uuid::new_v4(),
            runner_id: "runner-1".to_string(),
            job_type: "demo::Show",
            state: JobState::Completed,
            injected: InjectionRecord::default(),
            started_at,
            finished_at: started_at + chrono::Duration::milliseconds(5),
        };

        assert_eq!(report.duration(), chrono::Duration::milliseconds(5));
        assert_eq!(report.injected_count(), 0);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["state"], "Completed");
        assert_eq!(json["job_type"], "demo::Show");
        assert_eq!(json["injected"]["entries"], serde_json::json!([]));
    }
}
