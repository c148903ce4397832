//! Annealing pass execution loop.

use std::time::Duration;

use rand::Rng;

use super::config::AnnealConfig;
use crate::catalog::Catalog;
use crate::clock::Stopwatch;
use crate::error::Result;
use crate::instance::Instance;
use crate::moves::{distinct_pair, relocate, reverse_segment};
use crate::random::{create_rng, resolve_seed};
use crate::solution::Solution;

/// Result of one annealing pass.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// Best route observed during the pass, distance recomputed.
    pub solution: Solution,

    /// Iterations (candidate evaluations) executed.
    pub iterations: usize,

    /// Accepted moves, including improving ones.
    pub accepted_moves: usize,

    /// Strictly improving moves.
    pub improving_moves: usize,

    /// Temperature after perturbation (mean edge length).
    pub initial_temperature: f64,

    /// Temperature when the pass stopped.
    pub final_temperature: f64,

    /// Wall-clock time spent in the walk.
    pub elapsed: Duration,

    /// Seed the pass ran with, when the runner created the RNG.
    pub seed: Option<u64>,
}

/// Executes annealing passes.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs one pass with an RNG seeded from `config.seed` (or a fresh
    /// seed, reported in [`AnnealResult::seed`]).
    pub fn run<S: AsRef<str>>(
        path: &[S],
        catalog: &Catalog,
        config: &AnnealConfig,
    ) -> Result<AnnealResult> {
        let seed = resolve_seed(config.seed);
        let mut rng = create_rng(seed);
        let mut result = Self::run_with_rng(path, catalog, config, &mut rng)?;
        result.seed = Some(seed);
        Ok(result)
    }

    /// Runs one pass drawing randomness from `rng`.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`](crate::Error::Validation) for an invalid
    ///   config, an empty path or a repeated identifier
    /// - [`Error::Lookup`](crate::Error::Lookup) for an identifier with
    ///   no catalog entry
    pub fn run_with_rng<S: AsRef<str>, R: Rng>(
        path: &[S],
        catalog: &Catalog,
        config: &AnnealConfig,
        rng: &mut R,
    ) -> Result<AnnealResult> {
        config.validate()?;
        let instance = Instance::from_path(path, catalog)?;
        Ok(anneal(&instance, config, rng))
    }
}

fn anneal<R: Rng>(instance: &Instance, config: &AnnealConfig, rng: &mut R) -> AnnealResult {
    let n = instance.len();
    let mut current: Vec<usize> = (0..n).collect();

    // Exploration kick: reverse p[i..j) a few times.
    if n > 4 {
        for _ in 0..config.perturbation_kicks {
            let (i, j) = distinct_pair(1..n, rng);
            reverse_segment(&mut current, i, j - 1);
        }
    }

    let watch = Stopwatch::start();
    let mut current_cost = instance.cost(&current);
    let mut best = current.clone();
    let mut best_cost = current_cost;

    let initial_temperature = if n > 1 {
        current_cost / (n - 1) as f64
    } else {
        1.0
    };
    let mut temperature = initial_temperature;

    let mut iterations = 0usize;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;

    while !watch.expired(config.time_budget)
        && (config.max_iterations == 0 || iterations < config.max_iterations)
    {
        let mut candidate = current.clone();

        if rng.random::<f64>() < config.reversal_probability && n > 3 {
            let (i, j) = distinct_pair(1..n, rng);
            reverse_segment(&mut candidate, i, j);
        } else if n > 2 {
            let from = rng.random_range(1..n);
            let to = rng.random_range(1..n);
            relocate(&mut candidate, from, to);
        }

        let candidate_cost = instance.cost(&candidate);
        let delta = candidate_cost - current_cost;

        // Metropolis acceptance criterion
        let accept = if delta < 0.0 {
            improving_moves += 1;
            true
        } else if temperature > config.min_temperature {
            rng.random::<f64>() < (-delta / temperature).exp()
        } else {
            false
        };

        if accept {
            current = candidate;
            current_cost = candidate_cost;
            accepted_moves += 1;

            if current_cost < best_cost {
                best.clone_from(&current);
                best_cost = current_cost;
            }
        }

        temperature *= config.cooling_rate;
        iterations += 1;
    }

    let solution = instance.solution(&best);
    let elapsed = watch.elapsed();
    log::debug!(
        "anneal: n={n} iterations={iterations} accepted={accepted_moves} improving={improving_moves} \
         t0={initial_temperature:.3} t={temperature:.3e} distance={:.3} elapsed_ms={}",
        solution.distance,
        elapsed.as_millis()
    );

    AnnealResult {
        solution,
        iterations,
        accepted_moves,
        improving_moves,
        initial_temperature,
        final_temperature: temperature,
        elapsed,
        seed: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::path_cost;
    use proptest::prelude::*;

    /// Twelve stops on a line, visited in a scrambled order.
    fn line() -> (Catalog, Vec<String>) {
        let catalog = Catalog::from_coords((0..12).map(|k| (format!("L{k:02}"), [k as f64, 0.0, 0.0]))).unwrap();
        let order = [0, 7, 2, 11, 4, 9, 1, 6, 10, 3, 8, 5];
        let path = order.iter().map(|k| format!("L{k:02}")).collect();
        (catalog, path)
    }

    fn long_run(seed: u64) -> AnnealConfig {
        AnnealConfig::default()
            .with_time_budget(Duration::from_secs(60))
            .with_max_iterations(5_000)
            .with_seed(seed)
    }

    #[test]
    fn test_improves_scrambled_route() {
        let (catalog, path) = line();
        let before = path_cost(&path, &catalog).unwrap();

        let result = AnnealRunner::run(&path, &catalog, &long_run(42)).unwrap();

        assert_eq!(result.iterations, 5_000);
        assert_eq!(result.seed, Some(42));
        assert_eq!(result.solution.path[0], "L00");
        assert!(
            result.solution.distance < before,
            "expected improvement over {before}, got {}",
            result.solution.distance
        );
        assert!(result.improving_moves > 0);
        assert!(result.accepted_moves >= result.improving_moves);
        assert!(result.final_temperature < result.initial_temperature);
    }

    #[test]
    fn test_reported_distance_matches_recomputation() {
        let (catalog, path) = line();
        let result = AnnealRunner::run(&path, &catalog, &long_run(7)).unwrap();
        let recomputed = path_cost(&result.solution.path, &catalog).unwrap();
        assert_eq!(result.solution.distance, recomputed);
    }

    #[test]
    fn test_same_seed_same_route() {
        let (catalog, path) = line();
        let a = AnnealRunner::run(&path, &catalog, &long_run(2024)).unwrap();
        let b = AnnealRunner::run(&path, &catalog, &long_run(2024)).unwrap();
        assert_eq!(a.solution, b.solution);
        assert_eq!(a.accepted_moves, b.accepted_moves);
    }

    #[test]
    fn test_injected_rng_matches_seeded_run() {
        let (catalog, path) = line();
        let config = long_run(5);
        let seeded = AnnealRunner::run(&path, &catalog, &config).unwrap();
        let mut rng = create_rng(5);
        let injected = AnnealRunner::run_with_rng(&path, &catalog, &config, &mut rng).unwrap();
        assert_eq!(seeded.solution, injected.solution);
        assert!(injected.seed.is_none());
    }

    #[test]
    fn test_zero_budget_on_trivial_paths_is_identity() {
        let catalog = Catalog::from_coords([("A", [0.0, 0.0, 0.0]), ("B", [1.0, 2.0, 2.0])]).unwrap();
        let config = AnnealConfig::default().with_time_budget(Duration::ZERO);

        for path in [vec!["A"], vec!["A", "B"], vec!["B", "A"]] {
            let result = AnnealRunner::run(&path, &catalog, &config).unwrap();
            assert_eq!(result.solution.path, path);
            assert_eq!(result.solution.distance, path_cost(&path, &catalog).unwrap());
            assert_eq!(result.iterations, 0);
        }
    }

    fn short_line(n: usize) -> Catalog {
        Catalog::from_coords((0..n).map(|k| (format!("p{k}"), [k as f64, 0.0, 0.0]))).unwrap()
    }

    #[test]
    fn test_zero_budget_four_stops_unperturbed() {
        let catalog = short_line(4);
        let path = ["p0", "p3", "p1", "p2"];
        let config = AnnealConfig::default().with_time_budget(Duration::ZERO);

        for seed in 0..20 {
            let result = AnnealRunner::run(&path, &catalog, &config.clone().with_seed(seed)).unwrap();
            assert_eq!(result.solution.path, path);
            assert_eq!(result.solution.distance, 6.0);
            assert_eq!(result.iterations, 0);
            assert!((result.initial_temperature - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_five_stops_are_kicked() {
        let catalog = short_line(5);
        let path = ["p0", "p3", "p1", "p4", "p2"];
        let config = AnnealConfig::default().with_time_budget(Duration::ZERO);

        let mut perturbed = 0;
        for seed in 0..20 {
            let result = AnnealRunner::run(&path, &catalog, &config.clone().with_seed(seed)).unwrap();
            assert_eq!(result.iterations, 0);
            assert_eq!(result.solution.path[0], "p0");
            let mut ids = result.solution.path.clone();
            ids.sort();
            assert_eq!(ids, vec!["p0", "p1", "p2", "p3", "p4"]);
            if result.solution.path != path {
                perturbed += 1;
            }
        }
        assert!(perturbed > 0, "no seed changed the five-stop route");
    }

    #[test]
    fn test_initial_temperature_is_mean_edge_length() {
        let (catalog, path) = line();
        let config = long_run(8).with_perturbation_kicks(0).with_max_iterations(10);
        let result = AnnealRunner::run(&path, &catalog, &config).unwrap();

        let expected = path_cost(&path, &catalog).unwrap() / (path.len() - 1) as f64;
        assert!(
            (result.initial_temperature - expected).abs() < 1e-9,
            "t0 {} != {expected}",
            result.initial_temperature
        );
    }

    #[test]
    fn test_cold_walk_accepts_only_improvements() {
        let (catalog, path) = line();
        let config = long_run(13).with_min_temperature(f64::MAX);
        let result = AnnealRunner::run(&path, &catalog, &config).unwrap();

        assert_eq!(result.iterations, 5_000);
        assert_eq!(result.accepted_moves, result.improving_moves);
        assert!(result.solution.distance <= path_cost(&path, &catalog).unwrap());
    }

    #[test]
    fn test_two_stops_unchanged_by_iterations() {
        let catalog = Catalog::from_coords([("A", [0.0, 0.0, 0.0]), ("B", [3.0, 4.0, 0.0])]).unwrap();
        let result = AnnealRunner::run(&["A", "B"], &catalog, &long_run(1).with_max_iterations(200)).unwrap();
        assert_eq!(result.solution.path, vec!["A", "B"]);
        assert_eq!(result.solution.distance, 5.0);
        assert_eq!(result.iterations, 200);
        assert_eq!(result.accepted_moves, 200);
        assert_eq!(result.improving_moves, 0);
    }

    #[test]
    fn test_three_stops_keep_start() {
        let catalog = Catalog::from_coords([
            ("A", [0.0, 0.0, 0.0]),
            ("B", [5.0, 0.0, 0.0]),
            ("C", [1.0, 0.0, 0.0]),
        ])
        .unwrap();
        let result = AnnealRunner::run(&["A", "B", "C"], &catalog, &long_run(9).with_max_iterations(300)).unwrap();
        assert_eq!(result.solution.path, vec!["A", "C", "B"]);
        assert_eq!(result.solution.distance, 5.0);
    }

    #[test]
    fn test_time_budget_stops_the_walk() {
        let (catalog, path) = line();
        let config = AnnealConfig::default()
            .with_time_budget(Duration::from_millis(30))
            .with_seed(3);
        let result = AnnealRunner::run(&path, &catalog, &config).unwrap();
        assert!(result.elapsed >= Duration::from_millis(30));
        assert!(result.iterations > 0);
    }

    #[test]
    fn test_errors() {
        let (catalog, _) = line();
        let config = long_run(0);
        let empty: [&str; 0] = [];
        assert!(AnnealRunner::run(&empty, &catalog, &config)
            .unwrap_err()
            .is_validation());
        assert!(AnnealRunner::run(&["L00", "L01", "L00"], &catalog, &config)
            .unwrap_err()
            .is_validation());
        assert!(AnnealRunner::run(&["L00", "nope"], &catalog, &config)
            .unwrap_err()
            .is_lookup());
        assert!(AnnealRunner::run(&["L00"], &catalog, &config.clone().with_cooling_rate(2.0))
            .unwrap_err()
            .is_validation());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_pass_returns_consistent_permutation(
            points in prop::collection::vec((-50.0..50.0f64, -50.0..50.0f64, -50.0..50.0f64), 1..20),
            seed in any::<u64>(),
        ) {
            let ids: Vec<String> = (0..points.len()).map(|k| format!("p{k}")).collect();
            let catalog = Catalog::from_coords(
                ids.iter().cloned().zip(points.iter().map(|&(x, y, z)| [x, y, z])),
            ).unwrap();
            let config = AnnealConfig::default()
                .with_time_budget(Duration::from_secs(60))
                .with_max_iterations(300)
                .with_seed(seed);

            let result = AnnealRunner::run(&ids, &catalog, &config).unwrap();

            prop_assert_eq!(&result.solution.path[0], &ids[0]);
            let mut got = result.solution.path.clone();
            got.sort();
            let mut want = ids.clone();
            want.sort();
            prop_assert_eq!(got, want);
            prop_assert_eq!(result.solution.distance, path_cost(&result.solution.path, &catalog).unwrap());
        }
    }
}
