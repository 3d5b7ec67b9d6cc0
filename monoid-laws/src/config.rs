//! Knobs for a law check run.
use proptest::test_runner::Config;
use proptest::test_runner::RngAlgorithm;
use proptest::test_runner::TestRng;
use proptest::test_runner::TestRunner;

/// How many random trials to run per law, and how to run them.
///
/// The defaults come from proptest's own defaults, so the
/// `PROPTEST_CASES` and `PROPTEST_MAX_SHRINK_ITERS` environment
/// variables apply.
///
/// ```rust
/// use monoid_laws::LawConfig;
///
/// let config = LawConfig::default().with_cases(64).deterministic();
/// assert_eq!(config.cases, 64);
/// assert!(config.deterministic);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LawConfig {
    /// Number of passing trials required per law.
    pub cases: u32,
    /// Upper bound on shrinking steps once a counterexample is found.
    pub max_shrink_iters: u32,
    /// Use a fixed RNG seed so repeated runs sample the same values.
    pub deterministic: bool,
}

impl Default for LawConfig {
    fn default() -> Self {
        let base = Config::default();
        Self {
            cases: base.cases,
            max_shrink_iters: base.max_shrink_iters,
            deterministic: false,
        }
    }
}

impl LawConfig {
    /// Set the number of trials per law.
    pub fn with_cases(mut self, cases: u32) -> Self {
        self.cases = cases;
        self
    }

    /// Set the shrinking budget.
    pub fn with_max_shrink_iters(mut self, iters: u32) -> Self {
        self.max_shrink_iters = iters;
        self
    }

    /// Sample from a fixed seed.
    pub fn deterministic(mut self) -> Self {
        self.deterministic = true;
        self
    }

    /// Proptest configuration for one law.
    ///
    /// Failure persistence is off: law checks never touch the
    /// filesystem.
    pub fn proptest_config(&self) -> Config {
        Config {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            failure_persistence: None,
            ..Config::default()
        }
    }

    pub(crate) fn runner(&self) -> TestRunner {
        let config = self.proptest_config();
        if self.deterministic {
            TestRunner::new_with_rng(config, TestRng::deterministic_rng(RngAlgorithm::ChaCha))
        } else {
            TestRunner::new(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_follows_proptest() {
        let base = Config::default();
        let config = LawConfig::default();
        assert_eq!(config.cases, base.cases);
        assert_eq!(config.max_shrink_iters, base.max_shrink_iters);
        assert!(!config.deterministic);
    }

    #[test]
    fn builders_set_fields() {
        let config = LawConfig::default()
            .with_cases(7)
            .with_max_shrink_iters(11)
            .deterministic();
        assert_eq!(
            config,
            LawConfig {
                cases: 7,
                max_shrink_iters: 11,
                deterministic: true,
            }
        );
    }

    #[test]
    fn proptest_config_disables_persistence() {
        let config = LawConfig::default().with_cases(3).proptest_config();
        assert_eq!(config.cases, 3);
        assert!(config.failure_persistence.is_none());
    }
}
