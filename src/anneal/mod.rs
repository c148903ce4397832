//! Time-boxed simulated annealing refinement.
//!
//! One pass takes an existing route, kicks it out of its local minimum
//! with a few random segment reversals, then runs a Metropolis walk of
//! reversal and relocation moves under geometric cooling until the
//! wall-clock budget runs out. The best route observed is returned.
//!
//! Passes are independent: callers iterate them, feeding the best route
//! back in (see [`anytime`](crate::anytime)).
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::AnnealConfig;
pub(crate) use config::budget_from_secs;
pub use runner::{AnnealResult, AnnealRunner};
