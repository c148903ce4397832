//! Anytime driver loop.
//!
//! # Algorithm
//!
//! 1. Build the baseline route
//! 2. Skip refinement for routes of two stops or fewer
//! 3. While no stopping criterion is met:
//!    a. derive one seed per worker from the driver RNG
//!    b. run one annealing pass per seed from the incumbent
//!    c. replace the incumbent with the shortest pass result if it is
//!    strictly shorter
//! 4. Return the incumbent

use std::time::Duration;

use rand::Rng;

use super::config::AnytimeConfig;
use crate::anneal::{AnnealConfig, AnnealResult, AnnealRunner};
use crate::baseline::BaselineRunner;
use crate::catalog::Catalog;
use crate::clock::Stopwatch;
use crate::error::Result;
use crate::random::{create_rng, resolve_seed};
use crate::solution::Solution;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of an anytime run.
#[derive(Debug, Clone)]
pub struct AnytimeResult {
    /// Shortest route found.
    pub best: Solution,

    /// The baseline route refinement started from.
    pub baseline: Solution,

    /// Refinement rounds executed.
    pub rounds: usize,

    /// Annealing passes executed (rounds × workers).
    pub passes: usize,

    /// Rounds that replaced the incumbent.
    pub improving_rounds: usize,

    /// Incumbent distance after the baseline and after every round.
    /// Non-increasing.
    pub cost_history: Vec<f64>,

    /// Total wall-clock time.
    pub elapsed: Duration,

    /// Driver seed the per-pass seeds were derived from.
    pub seed: u64,
}

/// Runs the baseline-then-refine loop.
pub struct AnytimeRunner;

impl AnytimeRunner {
    /// Optimizes a route over `candidates` starting at `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use u_route::anytime::{AnytimeConfig, AnytimeRunner};
    /// use u_route::Catalog;
    ///
    /// let catalog = Catalog::from_coords(
    ///     (0..8).map(|k| (format!("s{k}"), [(k * 3 % 8) as f64, (k * 5 % 8) as f64, 0.0])),
    /// ).unwrap();
    /// let ids: Vec<String> = (0..8).map(|k| format!("s{k}")).collect();
    /// let config = AnytimeConfig::default()
    ///     .with_pass_budget(Duration::from_millis(5))
    ///     .with_max_rounds(3)
    ///     .with_seed(1);
    ///
    /// let result = AnytimeRunner::run(&ids, &catalog, "s0", &config).unwrap();
    /// assert!(result.best.distance <= result.baseline.distance);
    /// assert_eq!(result.rounds, 3);
    /// ```
    pub fn run<S: AsRef<str>>(
        candidates: &[S],
        catalog: &Catalog,
        start: &str,
        config: &AnytimeConfig,
    ) -> Result<AnytimeResult> {
        config.validate()?;
        let watch = Stopwatch::start();

        let baseline = BaselineRunner::run(candidates, catalog, start, &config.baseline)?.solution;
        let mut best = baseline.clone();
        let mut cost_history = vec![best.distance];

        let seed = resolve_seed(config.seed);
        let mut rng = create_rng(seed);

        let mut rounds = 0usize;
        let mut passes = 0usize;
        let mut improving_rounds = 0usize;
        let mut no_improve = 0usize;

        if best.len() > 2 {
            loop {
                if config.max_rounds > 0 && rounds >= config.max_rounds {
                    break;
                }
                if config.max_no_improve > 0 && no_improve >= config.max_no_improve {
                    break;
                }
                if let Some(total) = config.total_budget {
                    let round_end = watch.elapsed().checked_add(config.anneal.time_budget);
                    if round_end.is_none_or(|end| end > total) {
                        break;
                    }
                }

                let seeds: Vec<u64> = (0..config.workers).map(|_| rng.random()).collect();
                let results = run_round(&best.path, catalog, &config.anneal, &seeds)?;
                rounds += 1;
                passes += results.len();

                let round_best = results
                    .into_iter()
                    .map(|r| r.solution)
                    .min_by(|a, b| a.distance.total_cmp(&b.distance));

                match round_best {
                    Some(candidate) if candidate.distance < best.distance => {
                        log::info!(
                            "anytime: round={rounds} improved {:.3} -> {:.3}",
                            best.distance,
                            candidate.distance
                        );
                        best = candidate;
                        improving_rounds += 1;
                        no_improve = 0;
                    }
                    _ => no_improve += 1,
                }
                cost_history.push(best.distance);
            }
        }

        let elapsed = watch.elapsed();
        log::debug!(
            "anytime: n={} rounds={rounds} passes={passes} improving_rounds={improving_rounds} \
             baseline={:.3} best={:.3} elapsed_ms={}",
            best.len(),
            baseline.distance,
            best.distance,
            elapsed.as_millis()
        );

        Ok(AnytimeResult {
            best,
            baseline,
            rounds,
            passes,
            improving_rounds,
            cost_history,
            elapsed,
            seed,
        })
    }
}

/// Runs one independent pass per seed from the same incumbent.
fn run_round(
    path: &[String],
    catalog: &Catalog,
    template: &AnnealConfig,
    seeds: &[u64],
) -> Result<Vec<AnnealResult>> {
    let pass = |&seed: &u64| AnnealRunner::run(path, catalog, &template.clone().with_seed(seed));

    #[cfg(feature = "parallel")]
    {
        if seeds.len() > 1 {
            return seeds.par_iter().map(pass).collect();
        }
    }

    seeds.iter().map(pass).collect()
}
