use mutroute_core::{Direction, Maze, Point};
use rand::{Rng, RngExt};

use crate::error::SearchError;

/// Draw a uniformly random cardinal direction from `from` that lands on a
/// passable cell.
///
/// Directions are drawn from all four until one is passable. A cell with no
/// passable neighbour at all is reported as
/// [`SearchError::ImpossibleCell`] instead of looping forever.
pub fn sample_valid_direction(
    maze: &Maze,
    from: Point,
    rng: &mut impl Rng,
) -> Result<Direction, SearchError> {
    if maze.exits(from).next().is_none() {
        return Err(SearchError::ImpossibleCell(from));
    }
    loop {
        let d = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        if maze.is_passable(from + d) {
            return Ok(d);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{level, rng};
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn only_exits_are_sampled() {
        let maze = Maze::parse("#####\n#S..#\n#.#G#\n#####").unwrap();
        let mut rng = rng(1);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(sample_valid_direction(&maze, maze.start(), &mut rng).unwrap());
        }
        let expected: HashSet<_> = [Direction::Right, Direction::Down].into_iter().collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn enclosed_cell_is_an_error() {
        let maze = Maze::parse("###\n#S#\n###\n.G.").unwrap();
        let err = sample_valid_direction(&maze, maze.start(), &mut rng(0)).unwrap_err();
        assert!(matches!(err, SearchError::ImpossibleCell(p) if p == Point::new(1, 1)));
    }

    proptest! {
        #[test]
        fn sampled_step_is_passable(seed in any::<u64>(), idx in 0usize..150) {
            let maze = level();
            let cells: Vec<Point> = maze
                .bounds()
                .iter()
                .filter(|&p| maze.is_passable(p))
                .collect();
            let from = cells[idx % cells.len()];
            let d = sample_valid_direction(&maze, from, &mut rng(seed)).unwrap();
            prop_assert!(maze.is_passable(from + d));
        }
    }
}
