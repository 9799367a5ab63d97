//! Stochastic mutate-and-select route search.
//!
//! A search runs in generations. The first generation walks the maze at
//! random; every later one perturbs the previous winner step by step. All
//! candidates are scored by [`score`] (distance left to the goal plus length,
//! lower is better) and the best one seeds the next generation, until a
//! winner ends on the goal.
//!
//! | Piece | Entry point |
//! |---|---|
//! | Direction sampling | [`sample_valid_direction`] |
//! | Fresh routes | [`generate_random_route`] |
//! | Perturbed routes | [`mutate`] |
//! | Scoring | [`score`], [`won`] |
//! | Generation loop | [`RouteSearch`], [`solve`] |
//!
//! Every piece draws from an explicit `rand::Rng`, so a seeded generator
//! makes a run reproducible.

mod config;
mod distance;
mod error;
mod generator;
mod mutator;
mod sampler;
mod score;
mod search;

pub use config::{ConfigError, SearchConfig};
pub use distance::manhattan;
pub use error::SearchError;
pub use generator::generate_random_route;
pub use mutator::{Mutation, mutate};
pub use sampler::sample_valid_direction;
pub use score::{Candidate, score, select_best, won};
pub use search::{GenerationReport, Outcome, RouteSearch, SearchState, solve};

#[cfg(test)]
mod testutil;
