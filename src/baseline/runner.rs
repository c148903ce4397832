//! Nearest-neighbor construction and 2-opt refinement.
//!
//! # Algorithm
//!
//! 1. Start at the fixed start stop; repeatedly append the closest
//!    unvisited stop (ties go to the lowest identifier)
//! 2. 2-opt, first improvement: for each `1 <= i < j <= n-1`, replace
//!    edges `(p[i-1], p[i])` and `(p[j-1], p[j])` with `(p[i-1], p[j-1])`
//!    and `(p[i], p[j])` by reversing `p[i..=j-1]` whenever that is
//!    strictly shorter, then rescan `j` from `i + 1`
//! 3. Repeat full passes until one makes no move

use super::config::BaselineConfig;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::instance::Instance;
use crate::moves::reverse_segment;
use crate::solution::Solution;

/// A reversal must shorten the two affected edges by more than this
/// fraction of their length; rounding noise alone can never cycle.
const MIN_RELATIVE_GAIN: f64 = 1e-12;

/// Result of a baseline construction.
#[derive(Debug, Clone)]
pub struct BaselineResult {
    /// Final route with its recomputed distance.
    pub solution: Solution,

    /// Distance of the nearest-neighbor route before 2-opt.
    pub nearest_neighbor_distance: f64,

    /// Full 2-opt passes executed (including the final non-improving one).
    pub two_opt_passes: usize,

    /// Improving reversals applied.
    pub two_opt_moves: usize,
}

/// Builds baseline routes.
pub struct BaselineRunner;

impl BaselineRunner {
    /// Builds a route over `candidates` starting at `start`.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`](crate::Error::Validation) if `candidates`
    ///   is empty or does not contain `start`
    /// - [`Error::Lookup`](crate::Error::Lookup) if a candidate has no
    ///   catalog entry
    ///
    /// # Examples
    ///
    /// ```
    /// use u_route::baseline::{BaselineConfig, BaselineRunner};
    /// use u_route::Catalog;
    ///
    /// let catalog = Catalog::from_coords([
    ///     ("A", [0.0, 0.0, 0.0]),
    ///     ("B", [2.0, 0.0, 0.0]),
    ///     ("C", [1.0, 0.0, 0.0]),
    /// ]).unwrap();
    /// let result = BaselineRunner::run(&["A", "B", "C"], &catalog, "A", &BaselineConfig::default()).unwrap();
    /// assert_eq!(result.solution.path, vec!["A", "C", "B"]);
    /// assert_eq!(result.solution.distance, 2.0);
    /// ```
    pub fn run<S: AsRef<str>>(
        candidates: &[S],
        catalog: &Catalog,
        start: &str,
        config: &BaselineConfig,
    ) -> Result<BaselineResult> {
        let instance = Instance::from_candidates(candidates, catalog, start)?;

        let mut tour = nearest_neighbor(&instance);
        let nearest_neighbor_distance = instance.cost(&tour);

        let (two_opt_passes, two_opt_moves) = if config.two_opt {
            two_opt(&instance, &mut tour, config.max_passes)
        } else {
            (0, 0)
        };

        let solution = instance.solution(&tour);
        log::debug!(
            "baseline: n={} nn_distance={:.3} distance={:.3} two_opt_passes={} two_opt_moves={}",
            instance.len(),
            nearest_neighbor_distance,
            solution.distance,
            two_opt_passes,
            two_opt_moves
        );

        Ok(BaselineResult {
            solution,
            nearest_neighbor_distance,
            two_opt_passes,
            two_opt_moves,
        })
    }
}

/// Greedy nearest-neighbor tour from index 0 over every instance stop.
fn nearest_neighbor(instance: &Instance) -> Vec<usize> {
    let n = instance.len();
    let mut tour = Vec::with_capacity(n);
    tour.push(0);
    let mut unvisited: Vec<usize> = (1..n).collect();

    let mut current = 0;
    while !unvisited.is_empty() {
        let mut best_pos = 0;
        let mut best_dist = instance.dist(current, unvisited[0]);
        for (pos, &candidate) in unvisited.iter().enumerate().skip(1) {
            let d = instance.dist(current, candidate);
            let closer = d < best_dist;
            let tied_lower = d == best_dist && instance.id(candidate) < instance.id(unvisited[best_pos]);
            if closer || tied_lower {
                best_pos = pos;
                best_dist = d;
            }
        }
        current = unvisited.swap_remove(best_pos);
        tour.push(current);
    }

    tour
}

/// First-improvement 2-opt on an open path with a fixed first stop.
///
/// Returns `(passes, moves)`. `max_passes == 0` runs to convergence.
fn two_opt(instance: &Instance, tour: &mut [usize], max_passes: usize) -> (usize, usize) {
    let n = tour.len();
    let mut passes = 0;
    let mut moves = 0;

    loop {
        if max_passes > 0 && passes >= max_passes {
            break;
        }
        passes += 1;
        let mut improved = false;

        for i in 1..n.saturating_sub(1) {
            let mut j = i + 1;
            while j < n {
                let (a, b) = (tour[i - 1], tour[i]);
                let (c, d) = (tour[j - 1], tour[j]);
                let removed = instance.dist(a, b) + instance.dist(c, d);
                let added = instance.dist(a, c) + instance.dist(b, d);

                if added < removed * (1.0 - MIN_RELATIVE_GAIN) {
                    reverse_segment(tour, i, j - 1);
                    improved = true;
                    moves += 1;
                    j = i + 1;
                    continue;
                }
                j += 1;
            }
        }

        log::trace!("two_opt: pass={passes} moves={moves} cost={:.3}", instance.cost(tour));

        if !improved {
            break;
        }
    }

    (passes, moves)
}
