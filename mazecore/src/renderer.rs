//! Hooks for whoever wants to watch the maze being carved and solved.
//!
//! None of the methods may change the outcome of generation or solving, and all of
//! them default to doing nothing.

use crate::{dims::Dims, grid::Walls};

pub trait Renderer {
    /// A cell reached its current wall configuration.
    fn on_cell_drawn(&mut self, _pos: Dims, _walls: Walls) {}

    /// The solver stepped from `from` to `to`, or took that step back if `undo` is set.
    fn on_move(&mut self, _from: Dims, _to: Dims, _undo: bool) {}

    /// Called after every structural change. Hosts can refresh or pace here.
    fn on_frame(&mut self) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {}

/// Renderer recording every notification, handy in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    pub events: Vec<RenderEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEvent {
    CellDrawn(Dims, Walls),
    Move { from: Dims, to: Dims, undo: bool },
    Frame,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moves(&self) -> impl Iterator<Item = (Dims, Dims, bool)> + '_ {
        self.events.iter().filter_map(|e| match *e {
            RenderEvent::Move { from, to, undo } => Some((from, to, undo)),
            _ => None,
        })
    }

    pub fn drawn_cells(&self) -> impl Iterator<Item = (Dims, Walls)> + '_ {
        self.events.iter().filter_map(|e| match *e {
            RenderEvent::CellDrawn(pos, walls) => Some((pos, walls)),
            _ => None,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RenderEvent::Frame))
            .count()
    }
}

impl Renderer for Recorder {
    fn on_cell_drawn(&mut self, pos: Dims, walls: Walls) {
        self.events.push(RenderEvent::CellDrawn(pos, walls));
    }

    fn on_move(&mut self, from: Dims, to: Dims, undo: bool) {
        self.events.push(RenderEvent::Move { from, to, undo });
    }

    fn on_frame(&mut self) {
        self.events.push(RenderEvent::Frame);
    }
}
