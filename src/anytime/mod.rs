//! Anytime optimization driver.
//!
//! Builds the baseline once, then runs rounds of independent annealing
//! passes from the incumbent route, keeping a new route only when it is
//! strictly shorter. The incumbent is valid after every round, so the
//! driver can stop at any round boundary.
//!
//! With the `parallel` feature each round's passes run on rayon; every
//! pass owns its copy of the route and its own RNG.

mod config;
mod runner;

pub use config::AnytimeConfig;
pub use runner::{AnytimeResult, AnytimeRunner};
