//! The generation loop.
//!
//! ```text
//!            step()
//! Searching ───────► Searching ─ ─ ─► Won
//!    (winner misses the goal)   (winner ends on it)
//! ```

use mutroute_core::{Maze, Route};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::generator::generate_random_route;
use crate::mutator::mutate;
use crate::score::{Candidate, select_best, won};

/// Where a [`RouteSearch`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Searching,
    Won,
}

/// What happened during one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// 1-based generation number.
    pub generation: u64,
    /// Score of every candidate, in production order.
    pub scores: Vec<i32>,
    /// Index into `scores` of the candidate kept as the next seed.
    pub winner: usize,
    pub best_score: i32,
    pub won: bool,
}

/// A finished search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub route: Route,
    pub score: i32,
    pub generations: u64,
}

/// Mutate-and-select search over a borrowed maze.
///
/// The first generation is made of fresh random walks; each later one
/// mutates the previous winner. Only the winner of the latest generation is
/// kept, so a generation may well be worse than the one before it.
pub struct RouteSearch<'m, R: Rng> {
    maze: &'m Maze,
    config: SearchConfig,
    rng: R,
    best: Option<Candidate>,
    generation: u64,
    state: SearchState,
}

impl<'m, R: Rng> RouteSearch<'m, R> {
    /// Create a search in the `Searching` state with no seed route.
    pub fn new(maze: &'m Maze, config: SearchConfig, rng: R) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            maze,
            config,
            rng,
            best: None,
            generation: 0,
            state: SearchState::Searching,
        })
    }

    pub fn maze(&self) -> &'m Maze {
        self.maze
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Generations completed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Winner of the latest generation, which seeds the next one.
    pub fn best(&self) -> Option<&Candidate> {
        self.best.as_ref()
    }

    /// The result, once the goal has been reached.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.state != SearchState::Won {
            return None;
        }
        self.best.as_ref().map(|c| Outcome {
            route: c.route.clone(),
            score: c.score,
            generations: self.generation,
        })
    }

    fn candidate_route(&mut self) -> Result<Route, SearchError> {
        let max = self.config.max_route_length;
        match &self.best {
            None => generate_random_route(self.maze, max, &mut self.rng),
            Some(seed) => mutate(
                self.maze,
                &seed.route,
                self.config.mutation_probability,
                max,
                &mut self.rng,
            )
            .map(|m| m.route),
        }
    }

    /// Run one generation. Returns `None` without doing anything once the
    /// search has been won.
    pub fn step(&mut self) -> Result<Option<GenerationReport>, SearchError> {
        if self.state == SearchState::Won {
            return Ok(None);
        }

        let n = self.config.candidates_per_generation;
        let mut candidates = Vec::with_capacity(n);
        for _ in 0..n {
            let route = self.candidate_route()?;
            candidates.push(Candidate::new(self.maze, route));
        }

        let Some(winner) = select_best(&candidates) else {
            return Err(crate::config::ConfigError::NoCandidates.into());
        };
        let scores: Vec<i32> = candidates.iter().map(|c| c.score).collect();
        let best = candidates.swap_remove(winner);
        let won = won(self.maze, &best.route);
        self.generation += 1;

        log::debug!(
            "generation {}: best score {} ({} steps, ends at {})",
            self.generation,
            best.score,
            best.route.len(),
            best.route.last()
        );
        if won {
            self.state = SearchState::Won;
            log::info!(
                "goal reached after {} generations with a {}-step route",
                self.generation,
                best.route.len()
            );
        }

        let report = GenerationReport {
            generation: self.generation,
            scores,
            winner,
            best_score: best.score,
            won,
        };
        self.best = Some(best);
        Ok(Some(report))
    }

    /// Step until won. With `max_generations` set, gives up with
    /// [`SearchError::NotFound`] once that many generations have run;
    /// without it this may never return.
    pub fn run(&mut self) -> Result<Outcome, SearchError> {
        while self.state == SearchState::Searching {
            if self
                .config
                .max_generations
                .is_some_and(|max| self.generation >= max)
            {
                log::warn!("giving up after {} generations", self.generation);
                return Err(SearchError::NotFound {
                    generations: self.generation,
                });
            }
            self.step()?;
        }
        self.outcome().ok_or(SearchError::NotFound {
            generations: self.generation,
        })
    }
}

/// Search `maze` with a [`StdRng`] seeded from `config.seed`, or from the
/// thread RNG when no seed is given.
pub fn solve(maze: &Maze, config: SearchConfig) -> Result<Outcome, SearchError> {
    let seed = config.seed.unwrap_or_else(rand::random);
    log::debug!("searching with seed {seed}");
    RouteSearch::new(maze, config, StdRng::seed_from_u64(seed))?.run()
}
