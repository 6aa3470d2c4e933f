//! Frame Renderer
//!
//! Pure drawing rules: given the grid and the view state, paint a full frame
//! into a ratatui [`Buffer`]. Nothing here mutates game state; the caller
//! clears the dirty flag once the frame is on screen.
//!
//! Anything that falls outside the buffer is clipped, which is what happens
//! when the terminal is shrunk below the grid's footprint.

use ratatui::buffer::Buffer;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;

use crate::grid::Grid;
use crate::layout::GridLayout;
use crate::theme::Tone;
use crate::view::ViewState;

const TOP_LEFT: char = '╔';
const TOP_RIGHT: char = '╗';
const BOTTOM_LEFT: char = '╚';
const BOTTOM_RIGHT: char = '╝';
const HORIZONTAL: char = '═';
const VERTICAL: char = '║';
const CROSS: char = '╬';

/// One row of the controls legend
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendLine {
    pub text: &'static str,
    pub tone: Tone,
}

impl LegendLine {
    const fn new(text: &'static str, tone: Tone) -> Self {
        Self { text, tone }
    }
}

/// The controls legend, top to bottom
pub fn legend(paused: bool) -> [LegendLine; 6] {
    let pause_line = if paused {
        LegendLine::new("Space: Resume ▷", Tone::Success)
    } else {
        LegendLine::new("Space: Pause ||", Tone::Warn)
    };

    [
        LegendLine::new("Controls:", Tone::Default),
        LegendLine::new("Arrow keys: Resize grid", Tone::Info),
        LegendLine::new("Left click: Toggle cell", Tone::Info),
        pause_line,
        LegendLine::new("Clear grid: C", Tone::Warn),
        LegendLine::new("Quit: Q or Esc", Tone::Muted),
    ]
}

/// Paint a complete frame
pub fn draw(buf: &mut Buffer, grid: &Grid, view: &ViewState) {
    buf.reset();

    let screen = (buf.area.width, buf.area.height);
    let layout = GridLayout::centered(screen, view.grid_width, view.grid_height);

    draw_grid(buf, grid, &layout);
    draw_legend(buf, view.paused);
}

fn draw_grid(buf: &mut Buffer, grid: &Grid, layout: &GridLayout) {
    for y in 0..=layout.grid_height {
        for x in 0..=layout.grid_width {
            draw_border(buf, layout, x, y);

            if x < layout.grid_width && y < layout.grid_height {
                let tone = if grid.is_alive(x, y) {
                    Tone::Active
                } else {
                    Tone::Inactive
                };
                let (sx, sy) = layout.fill_origin(x, y);
                put(buf, sx, sy, ' ', tone.style());
                put(buf, sx + 1, sy, ' ', tone.style());
            }
        }
    }
}

/// Border glyphs around logical coordinate (x, y)
fn draw_border(buf: &mut Buffer, layout: &GridLayout, x: usize, y: usize) {
    let style = Tone::Default.style();
    let (sx, sy) = layout.corner(x, y);
    let last_x = x == layout.grid_width;

    if y == 0 || y == layout.grid_height {
        let top = y == 0;
        match (x == 0, last_x) {
            (true, _) => put(buf, sx, sy, if top { TOP_LEFT } else { BOTTOM_LEFT }, style),
            (_, true) => put(buf, sx, sy, if top { TOP_RIGHT } else { BOTTOM_RIGHT }, style),
            _ => thick_horizontal(buf, sx, sy, HORIZONTAL, style),
        }
    } else if x == 0 || last_x {
        for dy in -1..=1 {
            put(buf, sx, sy + dy, VERTICAL, style);
        }
    } else {
        thick_horizontal(buf, sx, sy, CROSS, style);
        put(buf, sx, sy - 1, VERTICAL, style);
        put(buf, sx, sy + 1, VERTICAL, style);
    }
}

/// A center glyph with two horizontal segments on each side
fn thick_horizontal(buf: &mut Buffer, sx: i32, sy: i32, center: char, style: Style) {
    put(buf, sx, sy, center, style);
    for dx in [-2, -1, 1, 2] {
        put(buf, sx + dx, sy, HORIZONTAL, style);
    }
}

/// Legend anchored to the bottom-left corner, starting at column 1
fn draw_legend(buf: &mut Buffer, paused: bool) {
    let lines = legend(paused);
    let top = i32::from(buf.area.height) - lines.len() as i32;

    for (i, line) in lines.iter().enumerate() {
        let row = top + i as i32;
        let mut column = 1;
        for ch in line.text.chars() {
            put(buf, column, row, ch, line.tone.style());
            column += ch.width().unwrap_or(0).max(1) as i32;
        }
    }
}

/// Set one cell, silently dropping anything off-screen
fn put(buf: &mut Buffer, x: i32, y: i32, symbol: char, style: Style) {
    let area = buf.area;
    let inside = x >= i32::from(area.left())
        && x < i32::from(area.right())
        && y >= i32::from(area.top())
        && y < i32::from(area.bottom());

    if inside {
        buf[(x as u16, y as u16)].set_char(symbol).set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;

    use super::*;
    use crate::theme::{CELL_ALIVE, CELL_DEAD};

    fn frame(width: u16, height: u16, grid: &Grid, paused: bool) -> Buffer {
        let mut view = ViewState::new(grid.width(), grid.height(), Instant::now());
        view.paused = paused;
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        draw(&mut buf, grid, &view);
        buf
    }

    fn symbol(buf: &Buffer, x: u16, y: u16) -> &str {
        buf[(x, y)].symbol()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| symbol(buf, x, y)).collect()
    }

    #[test]
    fn test_single_cell_frame() {
        // 1x1 grid on 9x8: start = ((9-3)/2, (8-2)/2) = (3, 3)
        let grid = Grid::new(1, 1);
        let buf = frame(9, 8, &grid, true);

        assert_eq!(symbol(&buf, 3, 3), "╔");
        assert_eq!(symbol(&buf, 6, 3), "╗");
        assert_eq!(symbol(&buf, 3, 5), "╚");
        assert_eq!(symbol(&buf, 6, 5), "╝");
        assert_eq!(buf[(3, 3)].fg, crate::theme::GRID_LINE);
        assert_eq!(buf[(4, 4)].bg, CELL_DEAD);
        assert_eq!(buf[(5, 4)].bg, CELL_DEAD);
    }

    #[test]
    fn test_top_row_is_a_thick_double_line() {
        // 3x2 grid on 40x20: start = ((40-9)/2, (20-4)/2) = (15, 8)
        let grid = Grid::new(3, 2);
        let buf = frame(40, 20, &grid, true);

        let top: String = (15..=24).map(|x| symbol(&buf, x, 8)).collect();
        assert_eq!(top, format!("╔{}╗", "═".repeat(8)));
    }

    #[test]
    fn test_interior_intersections() {
        let grid = Grid::new(3, 3);
        // start = ((40-9)/2, (20-6)/2) = (15, 7); intersection (1,1) at (18, 9)
        let buf = frame(40, 20, &grid, true);

        assert_eq!(symbol(&buf, 18, 9), "╬");
        assert_eq!(symbol(&buf, 18, 8), "║");
        assert_eq!(symbol(&buf, 18, 10), "║");
        assert_eq!(symbol(&buf, 20, 9), "═");
    }

    #[test]
    fn test_cell_fill_follows_grid() {
        let mut grid = Grid::new(3, 2);
        grid.toggle_cell(1, 1);
        // start = (15, 8); fill of (1,1) at (15+3+1, 8+2+1) = (19, 11)
        let buf = frame(40, 20, &grid, true);

        assert_eq!(buf[(19, 11)].bg, CELL_ALIVE);
        assert_eq!(buf[(20, 11)].bg, CELL_ALIVE);
        assert_eq!(buf[(16, 9)].bg, CELL_DEAD);
        assert_eq!(symbol(&buf, 19, 11), " ");
    }

    #[test]
    fn test_legend_reflects_pause_state() {
        let grid = Grid::new(2, 2);

        let paused = frame(40, 20, &grid, true);
        assert!(row_text(&paused, 17).starts_with(" Space: Resume ▷"));
        assert_eq!(paused[(1, 17)].fg, crate::theme::SUCCESS_GREEN);

        let running = frame(40, 20, &grid, false);
        assert!(row_text(&running, 17).starts_with(" Space: Pause ||"));
        assert_eq!(running[(1, 17)].fg, crate::theme::WARN_RED);
    }

    #[test]
    fn test_legend_is_bottom_anchored() {
        let grid = Grid::new(1, 1);
        let buf = frame(40, 20, &grid, true);

        assert!(row_text(&buf, 14).starts_with(" Controls:"));
        assert!(row_text(&buf, 19).starts_with(" Quit: Q or Esc"));
    }

    #[test]
    fn test_oversized_grid_is_clipped() {
        let mut grid = Grid::new(30, 15);
        grid.toggle_cell(0, 0);
        // Must not panic even though most of the footprint is off-screen
        let buf = frame(10, 4, &grid, false);
        assert_eq!(buf.area, Rect::new(0, 0, 10, 4));
    }

    #[test]
    fn test_legend_lines() {
        let lines = legend(true);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[3], LegendLine::new("Space: Resume ▷", Tone::Success));
        assert_eq!(legend(false)[3], LegendLine::new("Space: Pause ||", Tone::Warn));
    }
}
