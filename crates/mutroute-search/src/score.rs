//! Candidate scoring and selection.
//!
//! The score is the Manhattan distance still left to the goal plus the
//! number of steps taken. It ignores walls, so a route hugging the wrong
//! side of a wall can look better than one that detours around it.

use mutroute_core::{Maze, Route};

use crate::distance::manhattan;

/// Cost of a route, lower is better. An empty route is measured from the
/// maze start.
pub fn score(maze: &Maze, route: &Route) -> i32 {
    manhattan(route.last(), maze.end()) + route.len() as i32
}

/// Whether `route` took at least one step and stopped on the goal.
pub fn won(maze: &Maze, route: &Route) -> bool {
    route.ends_at(maze.end())
}

/// A route paired with its score, compared within one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub score: i32,
    pub route: Route,
}

impl Candidate {
    /// Score `route` against `maze`.
    pub fn new(maze: &Maze, route: Route) -> Self {
        Self {
            score: score(maze, &route),
            route,
        }
    }
}

/// Index of the lowest-scoring candidate. Ties go to the earliest one.
pub fn select_best(candidates: &[Candidate]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, c) in candidates.iter().enumerate() {
        match best {
            Some(b) if candidates[b].score <= c.score => {}
            _ => best = Some(i),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use mutroute_core::{Direction, Point};

    // Start at x = 0, goal at x = 10.
    const LANE: &str = "S.........G";

    fn east(maze: &Maze, steps: usize) -> Route {
        let mut r = Route::new(maze.start());
        for _ in 0..steps {
            r.step(Direction::Right);
        }
        r
    }

    #[test]
    fn arrival_beats_near_miss() {
        let maze = Maze::parse(LANE).unwrap();
        let arrived = east(&maze, 10);
        // Only the length and the last cell matter: 8 cells ending 3 short.
        let cells = (0..8).map(|x| Point::new(x, 0)).collect();
        let near_miss = Route::from_cells(maze.start(), cells);

        assert_eq!(score(&maze, &arrived), 10);
        assert_eq!(near_miss.len(), 8);
        assert_eq!(score(&maze, &near_miss), 3 + 8);

        let candidates = vec![
            Candidate::new(&maze, near_miss),
            Candidate::new(&maze, arrived.clone()),
        ];
        let best = select_best(&candidates).unwrap();
        assert_eq!(candidates[best].route, arrived);
        assert!(won(&maze, &candidates[best].route));
    }

    #[test]
    fn empty_route_is_scored_from_start() {
        let maze = Maze::parse(LANE).unwrap();
        let empty = Route::new(maze.start());
        assert_eq!(score(&maze, &empty), 10);
        assert!(!won(&maze, &empty));
    }

    #[test]
    fn scoring_is_pure() {
        let maze = Maze::parse(LANE).unwrap();
        let r = east(&maze, 4);
        assert_eq!(score(&maze, &r), score(&maze, &r));
        assert_eq!(score(&maze, &r), 6 + 4);
    }

    #[test]
    fn won_needs_last_cell_on_goal() {
        let maze = Maze::parse(LANE).unwrap();
        assert!(won(&maze, &east(&maze, 10)));
        assert!(!won(&maze, &east(&maze, 9)));
    }

    #[test]
    fn ties_go_to_first() {
        let maze = Maze::parse(LANE).unwrap();
        let a = Candidate {
            score: 5,
            route: east(&maze, 1),
        };
        let b = Candidate {
            score: 3,
            route: east(&maze, 2),
        };
        let c = Candidate {
            score: 3,
            route: east(&maze, 3),
        };
        assert_eq!(select_best(&[a.clone(), b.clone(), c.clone()]), Some(1));
        assert_eq!(select_best(&[c, b, a]), Some(0));
        assert_eq!(select_best(&[]), None);
    }
}
