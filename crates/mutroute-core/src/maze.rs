//! The [`Maze`]: an immutable grid of passable and blocked tiles with a
//! start and a goal, parsed from an ASCII description.
//!
//! ```text
//! #######
//! #S..#.#
//! #.#...#
//! #...#G#
//! #######
//! ```
//!
//! `#` is a wall, `.` is floor, `S` marks the start and `G` the goal. Both
//! markers are stored as floor in the tile array and remembered apart.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::geom::{Direction, Point, Range};
use crate::route::Route;

/// Blocked cell marker.
pub const WALL: char = '#';
/// Passable cell marker.
pub const FLOOR: char = '.';
/// Start marker (exactly one per maze).
pub const START: char = 'S';
/// Goal marker (exactly one per maze).
pub const END: char = 'G';

/// The state of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Floor,
    Wall,
}

impl Tile {
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Tile::Floor)
    }
}

/// Errors that can occur when loading a maze description.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("maze description is empty")]
    Empty,
    #[error("maze has no start marker 'S'")]
    MissingStart,
    #[error("maze has no goal marker 'G'")]
    MissingEnd,
    #[error("second start marker at {0}")]
    DuplicateStart(Point),
    #[error("second goal marker at {0}")]
    DuplicateEnd(Point),
    #[error("line {line} is {found} cells wide, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    #[error("failed to read maze: {0}")]
    Io(#[from] std::io::Error),
}

/// A rectangular maze. Immutable once built; share it by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    tiles: Vec<Tile>,
    bounds: Range,
    start: Point,
    end: Point,
}

impl Maze {
    /// Parse a maze from its textual description.
    ///
    /// Leading and trailing whitespace of the whole string is ignored, but
    /// every line must have the same width and contain only `# . S G`.
    pub fn parse(s: &str) -> Result<Self, LoadError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut tiles = Vec::with_capacity(s.len());
        let mut start = None;
        let mut end = None;
        let mut width = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let mut found = 0;
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let tile = match ch {
                    WALL => Tile::Wall,
                    FLOOR => Tile::Floor,
                    START => {
                        if start.replace(pos).is_some() {
                            return Err(LoadError::DuplicateStart(pos));
                        }
                        Tile::Floor
                    }
                    END => {
                        if end.replace(pos).is_some() {
                            return Err(LoadError::DuplicateEnd(pos));
                        }
                        Tile::Floor
                    }
                    _ => return Err(LoadError::InvalidChar { ch, pos }),
                };
                tiles.push(tile);
                found += 1;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(LoadError::InconsistentWidth {
                        line: y + 1,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        let start = start.ok_or(LoadError::MissingStart)?;
        let end = end.ok_or(LoadError::MissingEnd)?;
        log::debug!("parsed {width}x{height} maze, start {start}, goal {end}");

        Ok(Self {
            tiles,
            bounds: Range::new(0, 0, width as i32, height),
            start,
            end,
        })
    }

    /// Read and parse a maze description from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        log::debug!("loading maze from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// The bounding range of the maze.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Returns the size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Where every route begins.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The goal cell.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Get the tile at a point, or `None` if out of bounds.
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.bounds.index_of(p).map(|i| self.tiles[i])
    }

    /// False outside the maze or on a wall, true otherwise.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.tile(p).is_some_and(Tile::is_passable)
    }

    /// Directions leading from `p` onto a passable cell.
    pub fn exits(&self, p: Point) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&d| self.is_passable(p + d))
    }

    /// Passable cells with no passable neighbour. A route can never leave
    /// such a cell.
    pub fn isolated_cells(&self) -> Vec<Point> {
        self.bounds
            .iter()
            .filter(|&p| self.is_passable(p) && self.exits(p).next().is_none())
            .collect()
    }

    /// Whether `route` is a legal walk here: it starts from the maze start,
    /// moves one cardinal step at a time and only visits passable cells.
    pub fn is_valid_route(&self, route: &Route) -> bool {
        route.origin() == self.start
            && route.is_contiguous()
            && route.cells().iter().all(|&p| self.is_passable(p))
    }
}

impl FromStr for Maze {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width() {
                let p = Point::new(x, y);
                let ch = if p == self.start {
                    START
                } else if p == self.end {
                    END
                } else if self.is_passable(p) {
                    FLOOR
                } else {
                    WALL
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
