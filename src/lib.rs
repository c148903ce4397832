//! Anytime open-path route optimization over 3D points.
//!
//! Finds a short visiting order through a set of labeled points with a
//! fixed start and no return leg (an open-path TSP variant):
//!
//! - **Baseline** ([`baseline`]): nearest-neighbor construction followed
//!   by first-improvement 2-opt. Fast and deterministic.
//! - **Refinement** ([`anneal`]): one time-boxed pass of perturbation
//!   plus simulated annealing over reversal and relocation moves.
//! - **Anytime driver** ([`anytime`]): baseline once, then repeated
//!   refinement rounds that never give back ground.
//!
//! Points come from an external provider as a [`Catalog`]. Every entry
//! point validates its inputs up front and returns a [`Result`]; the
//! [`Outcome`] type turns that into a tagged value for hosts that only
//! observe return values (see the `wasm` feature).
//!
//! # Features
//!
//! - `serde`: (de)serialization of points and solutions,
//!   `Catalog::from_json`
//! - `parallel`: rayon worker pool in the anytime driver
//! - `wasm`: `computeBaseline` / `runPass` bindings for a web worker
//!
//! # Example
//!
//! ```
//! use u_route::{compute_baseline, run_pass, Catalog};
//!
//! let catalog = Catalog::from_coords([
//!     ("Jita", [0.0, 0.0, 0.0]),
//!     ("Perimeter", [1.0, 0.5, 0.0]),
//!     ("Urlen", [2.0, 2.0, 1.0]),
//!     ("Sobaseki", [0.5, 3.0, 0.0]),
//! ]).unwrap();
//!
//! let mut best = compute_baseline(&["Jita", "Urlen", "Sobaseki", "Perimeter"], &catalog, "Jita").unwrap();
//! for _ in 0..3 {
//!     let candidate = run_pass(&best.path, &catalog, 0.01).unwrap();
//!     if candidate.distance < best.distance {
//!         best = candidate;
//!     }
//! }
//! assert_eq!(best.path[0], "Jita");
//! ```

pub mod anneal;
pub mod anytime;
pub mod baseline;
pub mod moves;
pub mod random;

mod api;
mod catalog;
mod clock;
mod error;
mod geometry;
mod instance;
mod solution;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use api::{compute_baseline, run_pass, run_pass_with_rng};
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use geometry::{distance, path_cost, Point};
pub use solution::{Outcome, Solution};
