//! Grid Layout
//!
//! Maps logical cells to screen positions and back. Every cell occupies a
//! 3-column by 2-row footprint (one column/row of border plus the fill), and
//! the whole footprint is centered on screen.
//!
//! Screen math is done in `i32` because a grid larger than the terminal has
//! a negative origin.

/// Screen columns per logical cell
pub const CELL_COLUMNS: i32 = 3;

/// Screen rows per logical cell
pub const CELL_ROWS: i32 = 2;

/// Where the grid footprint sits on a screen of a given size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    /// Screen column of the top-left border corner
    pub start_x: i32,
    /// Screen row of the top-left border corner
    pub start_y: i32,
    pub grid_width: usize,
    pub grid_height: usize,
}

impl GridLayout {
    /// Center a `grid_width` x `grid_height` grid on a `screen` sized terminal
    pub fn centered(screen: (u16, u16), grid_width: usize, grid_height: usize) -> Self {
        let (sw, sh) = (i32::from(screen.0), i32::from(screen.1));
        Self {
            start_x: (sw - grid_width as i32 * CELL_COLUMNS) / 2,
            start_y: (sh - grid_height as i32 * CELL_ROWS) / 2,
            grid_width,
            grid_height,
        }
    }

    /// Screen position of the grid-line intersection at the top-left of
    /// logical coordinate (x, y). Valid for `x <= grid_width`,
    /// `y <= grid_height` so the far border can be addressed too.
    pub fn corner(&self, x: usize, y: usize) -> (i32, i32) {
        (
            self.start_x + x as i32 * CELL_COLUMNS,
            self.start_y + y as i32 * CELL_ROWS,
        )
    }

    /// Screen position of the first fill column of cell (x, y)
    pub fn fill_origin(&self, x: usize, y: usize) -> (i32, i32) {
        let (cx, cy) = self.corner(x, y);
        (cx + 1, cy + 1)
    }

    /// Which cell, if any, a screen position falls on
    ///
    /// Positions on or outside the grid footprint that do not map into
    /// `[0, grid_width) x [0, grid_height)` give `None`.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        let cell_x = (i32::from(column) - self.start_x).div_euclid(CELL_COLUMNS);
        let cell_y = (i32::from(row) - self.start_y).div_euclid(CELL_ROWS);

        let x = usize::try_from(cell_x).ok().filter(|&x| x < self.grid_width)?;
        let y = usize::try_from(cell_y).ok().filter(|&y| y < self.grid_height)?;
        Some((x, y))
    }
}

/// Largest grid the user may grow to on a screen of this size
///
/// Leaves room for a one-cell border on every side.
pub fn max_grid_size(screen: (u16, u16)) -> (usize, usize) {
    let width = screen.0.saturating_sub(2) / CELL_COLUMNS as u16;
    let height = screen.1.saturating_sub(2) / CELL_ROWS as u16;
    (usize::from(width), usize::from(height))
}
