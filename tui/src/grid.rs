//! Toroidal Cell Grid
//!
//! Owns the boolean cell matrix and every state transition the simulation
//! needs: neighbor counting, generation stepping, resizing and toggling.
//!
//! The grid wraps in both directions, so every cell has exactly eight
//! neighbors. Coordinates passed in from outside are expected to be clamped
//! by the caller; out-of-range access panics.

/// Offsets of the eight Moore neighbors
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A toroidal Game of Life grid, stored row-major (`cells[y][x]`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<bool>>,
}

impl Grid {
    /// Create a grid with every cell dead
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1, "grid must be at least 1x1, got {width}x{height}");
        Self {
            width,
            height,
            cells: Self::blank(width, height),
        }
    }

    fn blank(width: usize, height: usize) -> Vec<Vec<bool>> {
        vec![vec![false; width]; height]
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Is the cell at (x, y) alive?
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.check_bounds(x, y);
        self.cells[y][x]
    }

    /// Flip the cell at (x, y)
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        self.check_bounds(x, y);
        self.cells[y][x] = !self.cells[y][x];
    }

    /// Number of live cells
    pub fn live_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&alive| alive).count())
            .sum()
    }

    /// Count live cells among the eight wrapped neighbors of (x, y)
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        self.check_bounds(x, y);
        let (w, h) = (self.width as isize, self.height as isize);

        NEIGHBOR_OFFSETS
            .iter()
            .filter(|(dx, dy)| {
                let nx = (x as isize + dx).rem_euclid(w) as usize;
                let ny = (y as isize + dy).rem_euclid(h) as usize;
                self.cells[ny][nx]
            })
            .count() as u8
    }

    /// Advance one generation
    ///
    /// The next generation is computed entirely from the current one into a
    /// fresh matrix before being swapped in. Returns `true` if any cell
    /// changed.
    pub fn step(&mut self) -> bool {
        let mut next = Self::blank(self.width, self.height);
        let mut changed = false;

        for (y, row) in next.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                let alive = self.cells[y][x];
                *cell = next_state(alive, self.neighbor_count(x, y));
                changed |= *cell != alive;
            }
        }

        if changed {
            self.cells = next;
        }
        changed
    }

    /// Resize, keeping the overlapping top-left rectangle
    ///
    /// Newly exposed cells are dead. Cells outside the new bounds are
    /// dropped and do not come back if the grid grows again.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn resize(&mut self, new_width: usize, new_height: usize) {
        assert!(
            new_width >= 1 && new_height >= 1,
            "grid must be at least 1x1, got {new_width}x{new_height}"
        );

        let mut cells = Self::blank(new_width, new_height);
        let keep_w = self.width.min(new_width);
        for (dst, src) in cells.iter_mut().zip(&self.cells) {
            dst[..keep_w].copy_from_slice(&src[..keep_w]);
        }

        self.width = new_width;
        self.height = new_height;
        self.cells = cells;
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(false);
        }
    }

    fn check_bounds(&self, x: usize, y: usize) {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
    }
}

/// The B3/S23 transition rule
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}
