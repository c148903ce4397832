//! Annealing pass configuration.

use std::time::Duration;

use crate::error::{Error, Result};

/// Configuration for one [`AnnealRunner`](super::AnnealRunner) pass.
///
/// The initial temperature is not configurable: it is the mean edge
/// length of the perturbed route, so the schedule scales with the data.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_route::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_time_budget(Duration::from_millis(250))
///     .with_cooling_rate(0.99)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Wall-clock budget for the pass. Zero runs no iterations.
    pub time_budget: Duration,

    /// Geometric cooling factor applied once per iteration, in (0, 1).
    pub cooling_rate: f64,

    /// Below this temperature worsening moves are never accepted.
    pub min_temperature: f64,

    /// Random segment reversals applied before the walk (routes of more
    /// than four stops only).
    pub perturbation_kicks: usize,

    /// Probability of trying a segment reversal rather than a relocation.
    pub reversal_probability: f64,

    /// Hard iteration cap in addition to the time budget. 0 = no cap.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_secs(1),
            cooling_rate: 0.985,
            min_temperature: 1e-8,
            perturbation_kicks: 3,
            reversal_probability: 0.5,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_perturbation_kicks(mut self, n: usize) -> Self {
        self.perturbation_kicks = n;
        self
    }

    pub fn with_reversal_probability(mut self, p: f64) -> Self {
        self.reversal_probability = p;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.cooling_rate.is_nan() || self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(Error::validation(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.min_temperature.is_nan() || self.min_temperature < 0.0 {
            return Err(Error::validation(format!(
                "min_temperature must be non-negative, got {}",
                self.min_temperature
            )));
        }
        if !(0.0..=1.0).contains(&self.reversal_probability) {
            return Err(Error::validation(format!(
                "reversal_probability must be in [0, 1], got {}",
                self.reversal_probability
            )));
        }
        Ok(())
    }
}

/// Converts a budget in seconds, rejecting negative and non-finite values.
pub(crate) fn budget_from_secs(secs: f64) -> Result<Duration> {
    if secs.is_nan() || secs < 0.0 {
        return Err(Error::validation(format!(
            "time budget must be a non-negative number of seconds, got {secs}"
        )));
    }
    Duration::try_from_secs_f64(secs)
        .map_err(|e| Error::validation(format!("time budget {secs}s is not representable: {e}")))
}
