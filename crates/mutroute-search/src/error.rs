use mutroute_core::Point;

use crate::config::ConfigError;

/// Errors raised while searching.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A walk reached a passable cell with no passable neighbour.
    #[error("no passable neighbour to step into from {0}")]
    ImpossibleCell(Point),
    /// The generation budget ran out before a route reached the goal.
    #[error("goal not reached after {generations} generations")]
    NotFound { generations: u64 },
    #[error("invalid search configuration: {0}")]
    Config(#[from] ConfigError),
}
