//! Drawing a [`Route`] on top of its [`Maze`].
//!
//! [`Frame`] is the character picture; a [`Renderer`] puts frames somewhere
//! (a writer, a terminal). [`animate`] replays a route step by step, pacing
//! itself through a [`Clock`].

use std::error::Error;
use std::fmt;
use std::io::Write;
use std::time::Duration;

use crate::geom::Point;
use crate::maze::{END, FLOOR, Maze, START, WALL};
use crate::route::Route;

/// Glyph for a cell visited by the route.
pub const ROUTE: char = '+';

/// Pause between animation frames.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(200);

/// A maze-shaped grid of glyphs with a route drawn in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    glyphs: Vec<char>,
}

impl Frame {
    /// Draw `route` over `maze`. Start and goal markers are drawn last so
    /// they stay visible when the route passes over them.
    pub fn new(maze: &Maze, route: &Route) -> Self {
        let bounds = maze.bounds();
        let mut glyphs: Vec<char> = bounds
            .iter()
            .map(|p| if maze.is_passable(p) { FLOOR } else { WALL })
            .collect();
        for &p in route.cells() {
            if let Some(i) = bounds.index_of(p) {
                glyphs[i] = ROUTE;
            }
        }
        for (p, ch) in [(maze.start(), START), (maze.end(), END)] {
            if let Some(i) = bounds.index_of(p) {
                glyphs[i] = ch;
            }
        }
        Self {
            width: bounds.width() as usize,
            height: bounds.height() as usize,
            glyphs,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Glyph at `p`, or `None` outside the frame.
    pub fn at(&self, p: Point) -> Option<char> {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.width || p.y as usize >= self.height {
            return None;
        }
        Some(self.glyphs[p.y as usize * self.width + p.x as usize])
    }

    /// Rows of glyphs, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.glyphs.chunks(self.width.max(1))
    }
}

impl fmt::Display for Frame {
    /// Glyphs separated by single spaces, one maze row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, ch) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Something that can show a frame.
pub trait Renderer {
    fn render(&mut self, frame: &Frame) -> Result<(), Box<dyn Error>>;
}

/// Writes frames as plain text, each followed by a blank line.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, frame: &Frame) -> Result<(), Box<dyn Error>> {
        writeln!(self.out, "{frame}\n")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Source of delays for animation.
pub trait Clock {
    fn sleep(&mut self, d: Duration);
}

/// Wall-clock [`Clock`] backed by [`std::thread::sleep`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, d: Duration) {
        std::thread::sleep(d);
    }
}

/// Render every prefix of `route`, from no steps to the full walk, waiting
/// `delay` between frames.
pub fn animate<R, C>(
    renderer: &mut R,
    clock: &mut C,
    maze: &Maze,
    route: &Route,
    delay: Duration,
) -> Result<(), Box<dyn Error>>
where
    R: Renderer + ?Sized,
    C: Clock + ?Sized,
{
    for n in 0..=route.len() {
        if n > 0 {
            clock.sleep(delay);
        }
        renderer.render(&Frame::new(maze, &route.prefix(n)))?;
    }
    Ok(())
}
