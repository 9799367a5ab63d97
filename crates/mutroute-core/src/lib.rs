//! **mutroute-core** — grid maze model and route types.
//!
//! This crate provides the foundational types used across the *mutroute*
//! workspace: geometry primitives, the immutable [`Maze`] parsed from text,
//! the [`Route`] walked through it, and the [`Frame`] / [`Renderer`] pair used
//! to draw a route on top of its maze.

pub mod geom;
pub mod maze;
pub mod render;
pub mod route;

pub use geom::{Direction, Point, Range};
pub use maze::{LoadError, Maze, Tile};
pub use render::{Clock, Frame, Renderer, SystemClock, TextRenderer, animate};
pub use route::Route;
