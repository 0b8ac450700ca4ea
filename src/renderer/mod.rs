pub mod ascii;

use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{style, Color, PrintStyledContent, Stylize as _},
    terminal::{Clear, ClearType},
};
use mazecore::{Dims, Renderer, Walls};

use ascii::{canvas_size, cell_center, wall_char, wall_pos, walls_of, AsciiCanvas, PATH};

const MOVE_COLOR: Color = Color::Red;
const UNDO_COLOR: Color = Color::DarkGrey;

/// Draws the maze into the terminal as it is being carved and solved.
///
/// Terminal errors can't travel through [`Renderer`], so the first one is kept, all
/// drawing stops, and [`TerminalRenderer::finish`] returns it.
pub struct TerminalRenderer<W: Write> {
    out: W,
    size: Dims,
    delay: Duration,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    /// Clears the screen and draws a fully walled grid of `size` cells.
    pub fn new(mut out: W, size: Dims, delay: Duration) -> io::Result<Self> {
        queue!(out, Clear(ClearType::All), Hide)?;
        for (y, line) in AsciiCanvas::new(size).lines().enumerate() {
            let Ok(y) = u16::try_from(y) else { break };
            queue!(out, MoveTo(0, y), PrintStyledContent(style(line)))?;
        }
        out.flush()?;

        Ok(Self {
            out,
            size,
            delay,
            error: None,
        })
    }

    /// Terminal coordinates are `u16`, characters past that are not drawn.
    fn put(&mut self, pos: Dims, c: char, color: Option<Color>) {
        if self.error.is_some() {
            return;
        }
        let (Ok(x), Ok(y)) = (u16::try_from(pos.0), u16::try_from(pos.1)) else {
            return;
        };

        let content = match color {
            Some(color) => style(c).with(color),
            None => style(c),
        };
        if let Err(err) = queue!(
            self.out,
            MoveTo(x, y),
            PrintStyledContent(content)
        ) {
            self.error = Some(err);
        }
    }

    /// Moves the cursor under the maze and shows it again.
    pub fn finish(mut self) -> io::Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }

        let below = u16::try_from(canvas_size(self.size).1).unwrap_or(u16::MAX);
        queue!(self.out, MoveTo(0, below), Show)?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn on_cell_drawn(&mut self, pos: Dims, walls: Walls) {
        for (wall, present) in walls_of(walls) {
            self.put(wall_pos(pos, wall), wall_char(wall, present), None);
        }
    }

    fn on_move(&mut self, from: Dims, to: Dims, undo: bool) {
        let color = if undo { UNDO_COLOR } else { MOVE_COLOR };
        let (a, b) = (cell_center(from), cell_center(to));
        for pos in [a, Dims((a.0 + b.0) / 2, (a.1 + b.1) / 2), b] {
            self.put(pos, PATH, Some(color));
        }
    }

    fn on_frame(&mut self) {
        if self.error.is_some() {
            return;
        }

        if let Err(err) = self.out.flush() {
            self.error = Some(err);
            return;
        }

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}
