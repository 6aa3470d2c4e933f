//! Main Application
//!
//! The App owns the grid and the view state and drives the game loop:
//! - a fixed-period tick that advances the simulation and redraws
//! - one terminal event per iteration otherwise (keyboard, mouse, resize)
//!
//! # Scheduling
//!
//! Everything runs on one task. Each iteration waits for whichever comes
//! first, the render tick or the next input event, with the tick winning
//! ties. A tick may compute a generation (at most once per simulation step)
//! and then draws a frame only if something changed since the last one.
//! Input never waits behind a slow simulation and idle frames cost nothing.

use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::Event;
use futures::{Stream, StreamExt};
use tokio::time::{Instant, MissedTickBehavior};

use crate::config::LifeConfig;
use crate::events::{self, Command};
use crate::grid::Grid;
use crate::layout::{max_grid_size, GridLayout};
use crate::surface::Surface;
use crate::view::ViewState;

/// What the loop should do after an input event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// The window changed size; resync the display
    Resync,
    Exit,
}

/// Main application state
pub struct App {
    /// The cells
    grid: Grid,
    /// Dimensions, pause and redraw bookkeeping
    view: ViewState,
    /// Render tick period
    render_tick: Duration,
    /// Minimum time between generations
    simulation_step: Duration,
    /// Is the loop still running?
    running: bool,
}

impl App {
    /// Create a paused app with an empty grid
    pub fn new(config: &LifeConfig) -> Self {
        Self {
            grid: Grid::new(config.grid_width, config.grid_height),
            view: ViewState::new(config.grid_width, config.grid_height, Instant::now()),
            render_tick: config.render_tick,
            simulation_step: config.simulation_step,
            running: true,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Main event loop
    ///
    /// Returns when the user quits or the event source ends.
    ///
    /// # Errors
    ///
    /// Fails if the surface cannot be drawn to or the event source reports
    /// an I/O error.
    pub async fn run<S, E>(&mut self, surface: &mut S, mut input: E) -> anyhow::Result<()>
    where
        S: Surface,
        E: Stream<Item = io::Result<Event>> + Unpin,
    {
        let mut ticker = tokio::time::interval(self.render_tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::info!(
            width = self.view.grid_width,
            height = self.view.grid_height,
            "Game loop started"
        );

        while self.running {
            tokio::select! {
                biased;

                // Frame tick - advance and render
                _ = ticker.tick() => {
                    if self.on_tick(Instant::now()) {
                        surface.present(&self.grid, &self.view).context("failed to draw frame")?;
                        self.view.mark_clean();
                    }
                }

                maybe_event = input.next() => match maybe_event {
                    Some(Ok(event)) => {
                        let screen = surface.screen_size().context("failed to query terminal size")?;
                        match self.handle_event(&event, screen) {
                            Control::Continue => {}
                            Control::Resync => surface
                                .sync_after_resize()
                                .context("failed to resync after resize")?,
                            Control::Exit => self.running = false,
                        }
                    }
                    Some(Err(e)) => return Err(e).context("failed to read terminal event"),
                    None => {
                        tracing::debug!("Event stream closed");
                        self.running = false;
                    }
                },
            }
        }

        tracing::info!("Game loop stopped");
        Ok(())
    }

    /// Handle one render tick
    ///
    /// Advances one generation if running and a full simulation step has
    /// passed since the last one. Returns `true` if a frame should be drawn.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if !self.view.paused && now.duration_since(self.view.last_step_at) >= self.simulation_step
        {
            if self.grid.step() {
                self.view.mark_dirty();
            }
            self.view.last_step_at = now;
        }
        self.view.is_dirty()
    }

    /// Decode and apply one terminal event
    pub fn handle_event(&mut self, event: &Event, screen: (u16, u16)) -> Control {
        match events::decode(event) {
            Some(command) => self.apply(command, screen),
            None => Control::Continue,
        }
    }

    /// Apply a decoded command against a screen of the given size
    pub fn apply(&mut self, command: Command, screen: (u16, u16)) -> Control {
        let (max_width, max_height) = max_grid_size(screen);

        match command {
            Command::Quit => {
                tracing::debug!("Quit requested");
                return Control::Exit;
            }
            Command::Clear => {
                self.grid.clear();
                self.view.mark_dirty();
            }
            Command::TogglePause => {
                self.view.toggle_paused();
                tracing::debug!(paused = self.view.paused, "Toggled pause");
            }
            Command::ShrinkHeight if self.view.grid_height > 1 => {
                self.view.grid_height -= 1;
                self.resize_grid();
            }
            Command::GrowHeight if self.view.grid_height < max_height => {
                self.view.grid_height += 1;
                self.resize_grid();
            }
            Command::ShrinkWidth if self.view.grid_width > 1 => {
                self.view.grid_width -= 1;
                self.resize_grid();
            }
            Command::GrowWidth if self.view.grid_width < max_width => {
                self.view.grid_width += 1;
                self.resize_grid();
            }
            Command::ShrinkHeight
            | Command::GrowHeight
            | Command::ShrinkWidth
            | Command::GrowWidth => {}
            Command::Click { column, row } => self.toggle_at(column, row, screen),
            Command::Resized => {
                self.view.mark_dirty();
                return Control::Resync;
            }
        }
        Control::Continue
    }

    fn resize_grid(&mut self) {
        self.grid.resize(self.view.grid_width, self.view.grid_height);
        self.view.mark_dirty();
        tracing::debug!(
            width = self.view.grid_width,
            height = self.view.grid_height,
            "Resized grid"
        );
    }

    fn toggle_at(&mut self, column: u16, row: u16, screen: (u16, u16)) {
        let layout = GridLayout::centered(screen, self.view.grid_width, self.view.grid_height);
        if let Some((x, y)) = layout.cell_at(column, row) {
            self.grid.toggle_cell(x, y);
            self.view.mark_dirty();
        }
    }
}
