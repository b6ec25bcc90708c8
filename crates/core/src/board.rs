//! Settled-block grid
//!
//! 10 columns by 20 rows stored as one flat row-major array. `x` grows to the
//! right, `y` grows downward with row 0 at the top. Only committed pieces live
//! here; the falling piece is tracked separately by `GameState`.

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Fixed-size grid of committed cells
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Index `y * WIDTH + x`
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    #[inline(always)]
    fn out_of_bounds(x: i8, y: i8) -> bool {
        x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// `None` outside the grid, otherwise the cell contents
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Overwrite one cell. Out-of-range writes are refused.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::out_of_bounds(x, y)
    }

    /// Permanently mark cells as occupied by `kind`.
    ///
    /// Out-of-bounds cells are skipped, so a commit can never create an
    /// occupied cell outside the grid. Returns the number of cells written.
    pub fn commit(&mut self, cells: &[(i8, i8)], kind: PieceKind) -> usize {
        let mut written = 0;
        for &(x, y) in cells {
            if self.set(x, y, Some(kind)) {
                written += 1;
            }
        }
        written
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Empty every cell of row `y`
    pub fn clear_row(&mut self, y: usize) {
        if y >= HEIGHT {
            return;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].fill(None);
    }

    /// Move every row strictly above `above_y` down by one.
    ///
    /// Rows are copied bottom of the shifted range first so no row is read
    /// after it has been overwritten. Row 0 is left empty.
    pub fn shift_rows_down(&mut self, above_y: usize) {
        let above_y = above_y.min(HEIGHT - 1);
        if above_y == 0 {
            return;
        }

        for row in (1..=above_y).rev() {
            let src_start = (row - 1) * WIDTH;
            let dst_start = row * WIDTH;
            self.cells
                .copy_within(src_start..src_start + WIDTH, dst_start);
        }

        self.cells[..WIDTH].fill(None);
    }

    /// Number of occupied cells on the whole board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate over `(x, y, kind)` of every occupied cell
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, PieceKind)> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            cell.map(|kind| ((idx % WIDTH) as i8, (idx / WIDTH) as i8, kind))
        })
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the board as a compact u8 grid (0 = empty, 1..=7 = kind)
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[y * WIDTH + x].map(PieceKind::to_u8).unwrap_or(0);
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), HEIGHT);
        assert!(cells_2d.iter().all(|row| row.len() == WIDTH));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * WIDTH + x] = *cell;
            }
        }
        Self { cells: flat }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
