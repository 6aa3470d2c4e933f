//! Input Decoding
//!
//! Turns raw crossterm events into the handful of commands the game
//! understands. Anything else decodes to `None` and is dropped.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// A decoded user action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Leave the loop (Esc or `q`)
    Quit,
    /// Kill every cell (`c`)
    Clear,
    /// Space
    TogglePause,
    /// Up arrow: one row fewer
    ShrinkHeight,
    /// Down arrow: one row more
    GrowHeight,
    /// Left arrow: one column fewer
    ShrinkWidth,
    /// Right arrow: one column more
    GrowWidth,
    /// Primary button pressed at a screen position
    Click { column: u16, row: u16 },
    /// The terminal window changed size
    Resized,
}

/// Decode one terminal event
pub fn decode(event: &Event) -> Option<Command> {
    match event {
        // Only handle Press events (not Release or Repeat)
        Event::Key(key) if key.kind == KeyEventKind::Press => decode_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Command::Click {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        Event::Resize(_, _) => Some(Command::Resized),
        _ => None,
    }
}

fn decode_key(key: &KeyEvent) -> Option<Command> {
    let chord = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    let command = match key.code {
        // Ctrl/Alt + letter is not a binding; Ctrl+C must not clear the grid
        KeyCode::Char(_) if chord => return None,
        KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
        KeyCode::Char('c') => Command::Clear,
        KeyCode::Char(' ') => Command::TogglePause,
        KeyCode::Up => Command::ShrinkHeight,
        KeyCode::Down => Command::GrowHeight,
        KeyCode::Left => Command::ShrinkWidth,
        KeyCode::Right => Command::GrowWidth,
        _ => return None,
    };
    Some(command)
}
