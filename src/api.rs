//! Entry points with default settings.
//!
//! These are the two calls a host makes: one baseline, then repeated
//! refinement passes fed with the best route so far. Both return a
//! [`Result`]; wrap it in [`Outcome`](crate::Outcome) where the host
//! needs a tagged value instead.

use rand::Rng;

use crate::anneal::{budget_from_secs, AnnealConfig, AnnealRunner};
use crate::baseline::{BaselineConfig, BaselineRunner};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::solution::Solution;

/// Builds the initial route: nearest neighbor from `start_id`, then 2-opt
/// to convergence.
///
/// # Examples
///
/// ```
/// use u_route::{compute_baseline, Catalog};
///
/// let catalog = Catalog::from_coords([
///     ("A", [0.0, 0.0, 0.0]),
///     ("B", [10.0, 0.0, 0.0]),
///     ("C", [0.0, 10.0, 0.0]),
///     ("D", [10.0, 10.0, 0.0]),
/// ]).unwrap();
///
/// let solution = compute_baseline(&["A", "B", "C", "D"], &catalog, "A").unwrap();
/// assert_eq!(solution.path, vec!["A", "B", "D", "C"]);
/// assert!((solution.distance - 30.0).abs() < 1e-9);
/// ```
pub fn compute_baseline<S: AsRef<str>>(
    candidate_ids: &[S],
    catalog: &Catalog,
    start_id: &str,
) -> Result<Solution> {
    BaselineRunner::run(candidate_ids, catalog, start_id, &BaselineConfig::default())
        .map(|r| r.solution)
}

/// Runs one refinement pass of `time_budget_seconds` with a freshly
/// seeded random source.
///
/// The returned route is the best seen during the pass; it may be worse
/// than `current_best_path` because the pass starts from a perturbed
/// copy. Callers keep whichever is shorter.
pub fn run_pass<S: AsRef<str>>(
    current_best_path: &[S],
    catalog: &Catalog,
    time_budget_seconds: f64,
) -> Result<Solution> {
    let config = AnnealConfig::default().with_time_budget(budget_from_secs(time_budget_seconds)?);
    AnnealRunner::run(current_best_path, catalog, &config).map(|r| r.solution)
}

/// Runs one refinement pass with caller-supplied settings and randomness.
///
/// `config.seed` is ignored; `rng` is the only random source.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_route::anneal::AnnealConfig;
/// use u_route::random::create_rng;
/// use u_route::{run_pass_with_rng, Catalog};
///
/// let catalog = Catalog::from_coords([
///     ("A", [0.0, 0.0, 0.0]),
///     ("B", [3.0, 0.0, 0.0]),
///     ("C", [1.0, 0.0, 0.0]),
/// ]).unwrap();
/// let config = AnnealConfig::default()
///     .with_time_budget(Duration::from_secs(10))
///     .with_max_iterations(500);
///
/// let a = run_pass_with_rng(&["A", "B", "C"], &catalog, &config, &mut create_rng(1)).unwrap();
/// let b = run_pass_with_rng(&["A", "B", "C"], &catalog, &config, &mut create_rng(1)).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn run_pass_with_rng<S: AsRef<str>, R: Rng>(
    current_best_path: &[S],
    catalog: &Catalog,
    config: &AnnealConfig,
    rng: &mut R,
) -> Result<Solution> {
    AnnealRunner::run_with_rng(current_best_path, catalog, config, rng).map(|r| r.solution)
}
