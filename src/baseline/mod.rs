//! Baseline route construction.
//!
//! A fast, deterministic first route: greedy nearest-neighbor
//! construction from the fixed start, followed by first-improvement
//! 2-opt until no improving segment reversal remains.
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several
//!   Heuristics for the Traveling Salesman Problem"
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems"

mod config;
mod runner;

pub use config::BaselineConfig;
pub use runner::{BaselineResult, BaselineRunner};
