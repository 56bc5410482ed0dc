//! Simpler Runner
//!
//! Executes root jobs one cycle at a time: wires declared sub-jobs, runs the
//! job, and reports what happened.
//!
//! - Configuration: runner identity and tracing options, from environment or defaults
//! - Runner: the execution cycle itself
//! - Reports: serializable summaries of completed cycles

pub mod config;
pub mod report;
pub mod runner;

pub use config::RunnerConfig;
pub use report::RunReport;
pub use runner::JobRunner;
