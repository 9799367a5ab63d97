use mutroute_core::{Maze, Route};
use rand::Rng;

use crate::error::SearchError;
use crate::sampler::sample_valid_direction;

/// Walk from the maze start in uniformly random valid directions.
///
/// Stops as soon as the goal is reached or the route holds `max_length`
/// steps, whichever comes first, so the result may fall short of the goal.
pub fn generate_random_route(
    maze: &Maze,
    max_length: usize,
    rng: &mut impl Rng,
) -> Result<Route, SearchError> {
    let mut route = Route::with_capacity(maze.start(), max_length);
    let mut pos = maze.start();
    while pos != maze.end() && route.len() < max_length {
        let d = sample_valid_direction(maze, pos, rng)?;
        pos = route.step(d);
    }
    Ok(route)
}
