//! Crossterm terminal renderer for mutroute.
//!
//! [`TerminalRenderer`] implements [`mutroute_core::Renderer`]: each frame
//! clears the screen and redraws the maze in place, with the route and the
//! start/goal markers coloured.

use std::error::Error;
use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, queue,
    style::{Color as CtColor, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use mutroute_core::{
    Frame, Renderer,
    maze::{END, START, WALL},
    render::ROUTE,
};

/// Colour used for a glyph, `None` for the terminal default.
fn glyph_color(ch: char) -> Option<CtColor> {
    match ch {
        ROUTE => Some(CtColor::Cyan),
        START => Some(CtColor::Green),
        END => Some(CtColor::Yellow),
        WALL => Some(CtColor::DarkGrey),
        _ => None,
    }
}

/// Draws frames to a terminal through crossterm.
pub struct TerminalRenderer<W: Write = Stdout> {
    out: W,
    clear: bool,
    colors: bool,
}

impl TerminalRenderer<Stdout> {
    /// Render to standard output, clearing between frames, with colours.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Render to an arbitrary writer.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            clear: true,
            colors: true,
        }
    }

    /// Configure whether the screen is cleared before each frame.
    pub fn with_clear(mut self, enabled: bool) -> Self {
        self.clear = enabled;
        self
    }

    /// Configure whether glyphs are coloured.
    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &Frame) -> Result<(), Box<dyn Error>> {
        if self.clear {
            queue!(
                self.out,
                terminal::Clear(ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
        }
        for row in frame.rows() {
            for (x, &ch) in row.iter().enumerate() {
                if x > 0 {
                    queue!(self.out, Print(' '))?;
                }
                match glyph_color(ch).filter(|_| self.colors) {
                    Some(c) => queue!(self.out, SetForegroundColor(c), Print(ch), ResetColor)?,
                    None => queue!(self.out, Print(ch))?,
                }
            }
            queue!(self.out, Print('\n'))?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mutroute_core::{Direction, Maze, Route};

    fn sample_frame() -> Frame {
        let maze = Maze::parse("#####\n#S..#\n#.#G#\n#####").unwrap();
        let mut route = Route::new(maze.start());
        route.step(Direction::Right);
        Frame::new(&maze, &route)
    }

    #[test]
    fn plain_output_matches_frame_text() {
        let frame = sample_frame();
        let mut r = TerminalRenderer::with_writer(Vec::new())
            .with_clear(false)
            .with_colors(false);
        r.render(&frame).unwrap();
        let out = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(out, format!("{frame}\n"));
    }

    #[test]
    fn clears_before_drawing() {
        let mut r = TerminalRenderer::with_writer(Vec::new()).with_colors(false);
        r.render(&sample_frame()).unwrap();
        let out = String::from_utf8(r.into_inner()).unwrap();
        assert!(out.starts_with("\x1b[2J"));
        assert!(out.contains("# S + . #"));
    }

    #[test]
    fn colours_route_and_markers() {
        let mut r = TerminalRenderer::with_writer(Vec::new()).with_clear(false);
        r.render(&sample_frame()).unwrap();
        let out = String::from_utf8(r.into_inner()).unwrap();
        assert!(out.contains('\x1b'));
        assert!(out.contains('+'));
        assert!(out.contains('S'));
        assert!(out.contains('G'));
        assert_eq!(glyph_color('.'), None);
        assert_eq!(glyph_color(ROUTE), Some(CtColor::Cyan));
    }
}
