//! Terminal Surface
//!
//! The game loop talks to the terminal through the small [`Surface`] trait,
//! implemented for any ratatui [`Terminal`]. Production uses crossterm on
//! stdout; tests use ratatui's `TestBackend`.
//!
//! [`TerminalSession`] owns the real terminal's modes (raw mode, alternate
//! screen, mouse capture) and puts them back exactly once when dropped, on
//! every exit path. A panic hook does the same best-effort restore before the
//! panic message is printed.

use std::io::{self, Stdout, Write};
use std::sync::OnceLock;

use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use crate::grid::Grid;
use crate::render;
use crate::view::ViewState;

/// What the game loop needs from a display
pub trait Surface {
    /// Current size in columns and rows
    fn screen_size(&self) -> io::Result<(u16, u16)>;

    /// Draw and flush one full frame
    fn present(&mut self, grid: &Grid, view: &ViewState) -> io::Result<()>;

    /// Re-sync after the window changed size so the next frame repaints fully
    fn sync_after_resize(&mut self) -> io::Result<()>;
}

impl<B: Backend> Surface for Terminal<B> {
    fn screen_size(&self) -> io::Result<(u16, u16)> {
        let size = self.size()?;
        Ok((size.width, size.height))
    }

    fn present(&mut self, grid: &Grid, view: &ViewState) -> io::Result<()> {
        self.draw(|frame| render::draw(frame.buffer_mut(), grid, view))?;
        Ok(())
    }

    fn sync_after_resize(&mut self) -> io::Result<()> {
        self.autoresize()?;
        self.clear()
    }
}

/// The terminal in game mode, restored on drop
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen, and enable mouse capture
    ///
    /// # Errors
    ///
    /// Fails if any terminal mode cannot be set. Modes that were already
    /// changed are put back before returning.
    pub fn start() -> anyhow::Result<Self> {
        install_panic_hook();

        enable_raw_mode().context("failed to enable raw mode")?;
        match Self::enter() {
            Ok(terminal) => {
                tracing::info!("Terminal session started");
                Ok(Self {
                    terminal,
                    active: true,
                })
            }
            Err(e) => {
                best_effort_cleanup();
                Err(e)
            }
        }
    }

    fn enter() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("failed to enter alternate screen")?;

        let mut terminal =
            Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")?;
        terminal.hide_cursor().context("failed to hide cursor")?;
        terminal.clear().context("failed to clear screen")?;
        Ok(terminal)
    }

    /// The live terminal, for the game loop to draw on
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    fn cleanup(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        let _ = execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
        let _ = disable_raw_mode();
        tracing::info!("Terminal session restored");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            // Restore terminal before printing panic
            best_effort_cleanup();
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture);
    let _ = execute!(stdout, crossterm::cursor::Show);
    let _ = execute!(stdout, LeaveAlternateScreen);
    let _ = disable_raw_mode();
    let _ = stdout.flush();
}
