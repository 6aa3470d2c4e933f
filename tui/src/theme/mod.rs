//! Theme and Colors
//!
//! The renderer only ever asks for a [`Tone`]; this module decides what each
//! tone looks like on a real terminal.

use ratatui::style::{Color, Style};

// ============================================================================
// Palette
// ============================================================================

/// Grid lines and plain text
pub const GRID_LINE: Color = Color::White;

/// Live cell fill
pub const CELL_ALIVE: Color = Color::White;

/// Dead cell fill
pub const CELL_DEAD: Color = Color::Black;

/// Hints about controls
pub const INFO_BLUE: Color = Color::Blue;

/// Destructive or stopping actions
pub const WARN_RED: Color = Color::Red;

/// Resume hint
pub const SUCCESS_GREEN: Color = Color::Green;

/// De-emphasized text
pub const DIM_GRAY: Color = Color::Gray;

// ============================================================================
// Tones
// ============================================================================

/// Semantic style set used by the renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Plain text and grid lines
    Default,
    /// A live cell
    Active,
    /// A dead cell
    Inactive,
    Info,
    Warn,
    Success,
    Muted,
}

impl Tone {
    /// Terminal style for this tone
    pub fn style(self) -> Style {
        match self {
            Tone::Default => Style::default().fg(GRID_LINE),
            Tone::Active => Style::default().bg(CELL_ALIVE),
            Tone::Inactive => Style::default().bg(CELL_DEAD),
            Tone::Info => Style::default().fg(INFO_BLUE),
            Tone::Warn => Style::default().fg(WARN_RED),
            Tone::Success => Style::default().fg(SUCCESS_GREEN),
            Tone::Muted => Style::default().fg(DIM_GRAY),
        }
    }

}
