//! [`Route`]: a stepwise walk through a maze.
//!
//! The walk's origin is held explicitly but is not one of the route's cells:
//! `cells()[0]` is the first cell stepped *into*, and `len()` counts steps.

use crate::geom::{Direction, Point};

/// An ordered walk of cells starting from an explicit origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    origin: Point,
    cells: Vec<Point>,
}

impl Route {
    /// An empty route standing on `origin`.
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            cells: Vec::new(),
        }
    }

    /// An empty route with room for `capacity` steps.
    pub fn with_capacity(origin: Point, capacity: usize) -> Self {
        Self {
            origin,
            cells: Vec::with_capacity(capacity),
        }
    }

    /// Build a route from an existing cell list. No adjacency check is made;
    /// see [`is_contiguous`](Self::is_contiguous).
    pub fn from_cells(origin: Point, cells: Vec<Point>) -> Self {
        Self { origin, cells }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The visited cells, origin excluded.
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Number of steps taken.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Current position: the last cell, or the origin if no step was taken.
    pub fn last(&self) -> Point {
        self.cells.last().copied().unwrap_or(self.origin)
    }

    /// The last cell stepped into, if any.
    pub fn last_step(&self) -> Option<Point> {
        self.cells.last().copied()
    }

    /// Whether at least one step was taken and the walk stopped on `p`.
    pub fn ends_at(&self, p: Point) -> bool {
        self.last_step() == Some(p)
    }

    /// Append a cell.
    pub fn push(&mut self, p: Point) {
        self.cells.push(p);
    }

    /// Move one step from the current position and return the new position.
    pub fn step(&mut self, d: Direction) -> Point {
        let next = self.last() + d;
        self.cells.push(next);
        next
    }

    /// Origin followed by every cell.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.origin).chain(self.cells.iter().copied())
    }

    /// The delta between each pair of consecutive positions, origin included.
    /// Yields exactly `len()` items.
    pub fn directions(&self) -> impl Iterator<Item = Point> + '_ {
        self.positions()
            .zip(self.cells.iter().copied())
            .map(|(from, to)| from.direction_to(to))
    }

    /// Whether every step is a single cardinal move.
    pub fn is_contiguous(&self) -> bool {
        self.directions()
            .all(|d| Direction::from_delta(d).is_some())
    }

    /// The first `n` steps of this route (the whole route if `n >= len()`).
    pub fn prefix(&self, n: usize) -> Route {
        Route {
            origin: self.origin,
            cells: self.cells[..n.min(self.cells.len())].to_vec(),
        }
    }
}
