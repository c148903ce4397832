//! Anytime driver configuration.

use std::time::Duration;

use crate::anneal::AnnealConfig;
use crate::baseline::BaselineConfig;
use crate::error::{Error, Result};

/// Configuration for [`AnytimeRunner`](super::AnytimeRunner).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_route::anytime::AnytimeConfig;
///
/// let config = AnytimeConfig::default()
///     .with_pass_budget(Duration::from_millis(200))
///     .with_max_rounds(20)
///     .with_max_no_improve(5)
///     .with_workers(4)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnytimeConfig {
    /// Maximum refinement rounds. 0 = no limit.
    pub max_rounds: usize,

    /// Stop after this many consecutive rounds without improvement.
    /// 0 = never.
    pub max_no_improve: usize,

    /// Overall wall-clock cap. A round is only started if it can finish
    /// within the cap.
    pub total_budget: Option<Duration>,

    /// Independent passes per round.
    pub workers: usize,

    /// Seed for deriving per-pass seeds. `None` draws a fresh one.
    pub seed: Option<u64>,

    /// Baseline construction settings.
    pub baseline: BaselineConfig,

    /// Template for each pass; its `time_budget` is the per-pass budget
    /// and its `seed` is replaced per pass.
    pub anneal: AnnealConfig,
}

impl Default for AnytimeConfig {
    fn default() -> Self {
        Self {
            max_rounds: 10,
            max_no_improve: 0,
            total_budget: None,
            workers: 1,
            seed: None,
            baseline: BaselineConfig::default(),
            anneal: AnnealConfig::default(),
        }
    }
}

impl AnytimeConfig {
    pub fn with_max_rounds(mut self, n: usize) -> Self {
        self.max_rounds = n;
        self
    }

    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    pub fn with_total_budget(mut self, budget: Duration) -> Self {
        self.total_budget = Some(budget);
        self
    }

    pub fn with_workers(mut self, n: usize) -> Self {
        self.workers = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock budget of each pass.
    pub fn with_pass_budget(mut self, budget: Duration) -> Self {
        self.anneal.time_budget = budget;
        self
    }

    pub fn with_baseline(mut self, baseline: BaselineConfig) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn with_anneal(mut self, anneal: AnnealConfig) -> Self {
        self.anneal = anneal;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::validation("workers must be at least 1"));
        }
        if self.max_rounds == 0 && self.max_no_improve == 0 && self.total_budget.is_none() {
            return Err(Error::validation(
                "no stopping criterion: set max_rounds, max_no_improve or total_budget",
            ));
        }
        self.anneal.validate()
    }
}
