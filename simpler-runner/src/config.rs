//! Runner configuration
//!
//! Identifies the runner in reports and logs and controls how much injection
//! detail is traced.

/// Runner configuration
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Identifier stamped on every run report
    pub runner_id: String,

    /// Log each injected sub-job member at info level
    pub trace_injection: bool,
}

impl RunnerConfig {
    /// Creates a new configuration with defaults
    pub fn new(runner_id: String) -> Self {
        Self {
            runner_id,
            trace_injection: true,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - SIMPLER_RUNNER_ID (required)
    /// - SIMPLER_TRACE_INJECTION (optional, true/false, default: true)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration with an optional explicit runner id
    ///
    /// The explicit id wins over SIMPLER_RUNNER_ID; with neither, a random id
    /// is generated. SIMPLER_TRACE_INJECTION is always honored and an
    /// unparsable value is an error, never silently ignored.
    pub fn from_env_or_default(runner_id: Option<String>) -> anyhow::Result<Self> {
        Self::resolve(runner_id, |key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let runner_id = lookup("SIMPLER_RUNNER_ID")
            .ok_or_else(|| anyhow::anyhow!("SIMPLER_RUNNER_ID environment variable not set"))?;

        Ok(Self {
            runner_id,
            trace_injection: trace_flag(&lookup)?,
        })
    }

    fn resolve(
        runner_id: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let mut config = match runner_id.or_else(|| lookup("SIMPLER_RUNNER_ID")) {
            Some(runner_id) => Self::new(runner_id),
            None => Self::default(),
        };
        config.trace_injection = trace_flag(&lookup)?;
        Ok(config)
    }

    pub fn with_trace_injection(mut self, enabled: bool) -> Self {
        self.trace_injection = enabled;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.runner_id.trim().is_empty() {
            anyhow::bail!("runner_id cannot be empty");
        }

        Ok(())
    }
}

fn trace_flag(lookup: &impl Fn(&str) -> Option<String>) -> anyhow::Result<bool> {
    match lookup("SIMPLER_TRACE_INJECTION") {
        Some(raw) => raw.trim().parse::<bool>().map_err(|_| {
            anyhow::anyhow!(
                "SIMPLER_TRACE_INJECTION must be true or false, got '{}'",
                raw
            )
        }),
        None => Ok(true),
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &HashMap<&str, &str>) -> impl Fn(&str) -> Option<String> {
        move |key| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_default_config() {
        let config = RunnerConfig::default();
        assert!(config.trace_injection);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = RunnerConfig::default();
        config.runner_id = "  ".to_string();
        assert!(config.validate().is_err());

        config.runner_id = "runner-1".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup() {
        let vars = HashMap::from([
            ("SIMPLER_RUNNER_ID", "web-1"),
            ("SIMPLER_TRACE_INJECTION", "false"),
        ]);
        let config = RunnerConfig::from_lookup(lookup_in(&vars)).unwrap();
        assert_eq!(config.runner_id, "web-1");
        assert!(!config.trace_injection);
    }

    #[test]
    fn test_from_lookup_requires_runner_id() {
        let vars = HashMap::new();
        let err = RunnerConfig::from_lookup(lookup_in(&vars)).unwrap_err();
        assert!(err.to_string().contains("SIMPLER_RUNNER_ID"));
    }

    #[test]
    fn test_from_lookup_rejects_bad_flag() {
        let vars = HashMap::from([
            ("SIMPLER_RUNNER_ID", "web-1"),
            ("SIMPLER_TRACE_INJECTION", "sometimes"),
        ]);
        assert!(RunnerConfig::from_lookup(lookup_in(&vars)).is_err());
    }

    #[test]
    fn test_resolve_explicit_id_wins() {
        let vars = HashMap::from([("SIMPLER_RUNNER_ID", "from-env")]);
        let config =
            RunnerConfig::resolve(Some("from-flag".to_string()), lookup_in(&vars)).unwrap();
        assert_eq!(config.runner_id, "from-flag");
        assert!(config.trace_injection);
    }

    #[test]
    fn test_resolve_falls_back_to_generated_id() {
        let vars = HashMap::from([("SIMPLER_TRACE_INJECTION", "false")]);
        let config = RunnerConfig::resolve(None, lookup_in(&vars)).unwrap();
        assert!(uuid::Uuid::parse_str(&config.runner_id).is_ok());
        assert!(!config.trace_injection);
    }

    #[test]
    fn test_resolve_rejects_bad_flag_even_with_explicit_id() {
        let vars = HashMap::from([("SIMPLER_TRACE_INJECTION", "sometimes")]);
        let err = RunnerConfig::resolve(Some("web-1".to_string()), lookup_in(&vars)).unwrap_err();
        assert!(err.to_string().contains("sometimes"));
    }

    #[test]
    fn test_with_trace_injection() {
        let config = RunnerConfig::new("r".to_string()).with_trace_injection(false);
        assert!(!config.trace_injection);
    }
}
