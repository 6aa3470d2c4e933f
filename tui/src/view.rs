//! View State
//!
//! Everything the controller tracks besides the cells themselves. Kept as
//! one explicit value so the loop can be driven and inspected in tests.

use tokio::time::Instant;

/// Controller-side state: logical dimensions, pause, and redraw bookkeeping
#[derive(Clone, Debug)]
pub struct ViewState {
    /// Logical grid width (drives `Grid::resize`)
    pub grid_width: usize,
    /// Logical grid height
    pub grid_height: usize,
    /// Simulation is halted
    pub paused: bool,
    /// Something changed since the last frame
    dirty: bool,
    /// When the last generation was computed
    pub last_step_at: Instant,
}

impl ViewState {
    /// Starts paused and dirty, so the first tick draws a frame
    pub fn new(grid_width: usize, grid_height: usize, now: Instant) -> Self {
        Self {
            grid_width,
            grid_height,
            paused: true,
            dirty: true,
            last_step_at: now,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Called after a frame has been shown
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
        self.dirty = true;
    }
}
