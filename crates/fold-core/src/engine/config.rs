use thiserror::Error;

/// Default cap on proposal attempts per optimization step.
///
/// Tightly folded chains can reject many proposals in a row; the cap bounds
/// that retry loop so a fully blocked chain cannot livelock the run.
pub const DEFAULT_RETRY_LIMIT: usize = 1_000;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Retry limit must be at least 1")]
    ZeroRetryLimit,
}

/// Parameters of one folding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldConfig {
    /// Number of valid-candidate evaluations to perform. Structurally
    /// invalid proposals do not consume steps.
    pub steps: u64,
    /// Maximum proposal attempts per step before the run reports
    /// proposal exhaustion.
    pub retry_limit: usize,
    /// RNG seed; entropy-seeded when absent.
    pub seed: Option<u64>,
}

#[derive(Default)]
pub struct FoldConfigBuilder {
    steps: Option<u64>,
    retry_limit: Option<usize>,
    seed: Option<u64>,
}

impl FoldConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(mut self, steps: u64) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn retry_limit(mut self, limit: usize) -> Self {
        self.retry_limit = Some(limit);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<FoldConfig, ConfigError> {
        let retry_limit = self.retry_limit.unwrap_or(DEFAULT_RETRY_LIMIT);
        if retry_limit == 0 {
            return Err(ConfigError::ZeroRetryLimit);
        }
        Ok(FoldConfig {
            steps: self
                .steps
                .ok_or(ConfigError::MissingParameter("steps"))?,
            retry_limit,
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_a_step_budget() {
        let result = FoldConfigBuilder::new().build();
        assert_eq!(result, Err(ConfigError::MissingParameter("steps")));
    }

    #[test]
    fn build_applies_the_default_retry_limit() {
        let config = FoldConfigBuilder::new().steps(100).build().unwrap();
        assert_eq!(config.steps, 100);
        assert_eq!(config.retry_limit, DEFAULT_RETRY_LIMIT);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn build_keeps_explicit_values() {
        let config = FoldConfigBuilder::new()
            .steps(2_000)
            .retry_limit(50)
            .seed(42)
            .build()
            .unwrap();
        assert_eq!(
            config,
            FoldConfig {
                steps: 2_000,
                retry_limit: 50,
                seed: Some(42),
            }
        );
    }

    #[test]
    fn build_rejects_a_zero_retry_limit() {
        let result = FoldConfigBuilder::new().steps(10).retry_limit(0).build();
        assert_eq!(result, Err(ConfigError::ZeroRetryLimit));
    }
}
