use mutroute_core::{Direction, Maze, Route};
use rand::{Rng, RngExt};

use crate::error::SearchError;
use crate::sampler::sample_valid_direction;

/// A mutated route and how much of its seed it kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub route: Route,
    /// Steps copied from the seed's direction at the same index.
    pub inherited: usize,
    /// Steps drawn fresh from [`sample_valid_direction`].
    pub resampled: usize,
}

/// Follow `seed` from the maze start, perturbing it step by step.
///
/// Step `i` reuses the direction the seed took at step `i`, unless a
/// `mutation_probability` coin flip says otherwise or that direction would
/// walk into a wall; then a fresh valid direction is sampled. Once the
/// seed's directions run out every step is sampled. The walk stops on the
/// goal or after `max_length` steps.
///
/// # Panics
///
/// If `mutation_probability` lies outside `[0, 1]`.
pub fn mutate(
    maze: &Maze,
    seed: &Route,
    mutation_probability: f64,
    max_length: usize,
    rng: &mut impl Rng,
) -> Result<Mutation, SearchError> {
    let mut route = Route::with_capacity(maze.start(), max_length);
    let mut intended = seed.directions().map(Direction::from_delta);
    let mut inherited = 0;
    let mut resampled = 0;
    let mut pos = maze.start();

    while pos != maze.end() && route.len() < max_length {
        let kept = match intended.next() {
            Some(Some(d)) if !rng.random_bool(mutation_probability) => {
                Some(d).filter(|&d| maze.is_passable(pos + d))
            }
            _ => None,
        };
        let d = match kept {
            Some(d) => {
                inherited += 1;
                d
            }
            None => {
                resampled += 1;
                sample_valid_direction(maze, pos, rng)?
            }
        };
        pos = route.step(d);
    }

    log::trace!(
        "mutated {}-step seed into {} steps ({inherited} inherited, {resampled} resampled)",
        seed.len(),
        route.len()
    );
    Ok(Mutation {
        route,
        inherited,
        resampled,
    })
}
