//! Shape module - tetromino templates and matrix rotation
//!
//! A shape is a small row-major boolean matrix (at most 4x4) describing which
//! cells of a bounding box are filled. Templates are immutable; rotation
//! always produces a new matrix.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest bounding box side of any shape.
pub const MAX_SIDE: usize = 4;

/// Offset of a filled cell relative to the shape's top-left corner, as (dx, dy)
pub type CellOffset = (i8, i8);

/// Filled-cell offsets of a shape.
pub type CellOffsets = ArrayVec<CellOffset, { MAX_SIDE * MAX_SIDE }>;

/// Row-major boolean matrix
///
/// Cells outside `rows x cols` are always `false`, so two shapes compare
/// equal exactly when their dimensions and filled cells match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SIDE]; MAX_SIDE],
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Returns `None` when the matrix is empty, ragged, or larger than 4x4.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height == 0 || width == 0 || height > MAX_SIDE || width > MAX_SIDE {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut bits = [[false; MAX_SIDE]; MAX_SIDE];
        for (r, row) in rows.iter().enumerate() {
            for (c, v) in row.iter().enumerate() {
                bits[r][c] = *v != 0;
            }
        }

        Some(Self {
            rows: height as u8,
            cols: width as u8,
            bits,
        })
    }

    /// Spawn template for a piece kind
    pub fn template(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::fixed(4, 1, [[1, 0, 0], [1, 0, 0], [1, 0, 0], [1, 0, 0]]),
            PieceKind::O => Self::fixed(2, 2, [[1, 1, 0], [1, 1, 0], [0; 3], [0; 3]]),
            PieceKind::T => Self::fixed(2, 3, [[0, 1, 0], [1, 1, 1], [0; 3], [0; 3]]),
            PieceKind::S => Self::fixed(2, 3, [[0, 1, 1], [1, 1, 0], [0; 3], [0; 3]]),
            PieceKind::Z => Self::fixed(2, 3, [[1, 1, 0], [0, 1, 1], [0; 3], [0; 3]]),
            PieceKind::J => Self::fixed(2, 3, [[1, 0, 0], [1, 1, 1], [0; 3], [0; 3]]),
            PieceKind::L => Self::fixed(2, 3, [[0, 0, 1], [1, 1, 1], [0; 3], [0; 3]]),
        }
    }

    /// Templates never exceed 4 rows by 3 columns.
    fn fixed(rows: u8, cols: u8, src: [[u8; 3]; 4]) -> Self {
        let mut bits = [[false; MAX_SIDE]; MAX_SIDE];
        for r in 0..rows as usize {
            for c in 0..cols as usize {
                bits[r][c] = src[r][c] != 0;
            }
        }
        Self { rows, cols, bits }
    }

    /// Number of rows (bounding box height)
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns (bounding box width)
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether cell (row, col) is filled. Out-of-range reads are `false`.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.bits[row][col]
    }

    /// Rotate 90° clockwise.
    ///
    /// An R x C matrix becomes C x R with `out[c][R - 1 - r] = in[r][c]`.
    pub fn rotate_cw(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut bits = [[false; MAX_SIDE]; MAX_SIDE];
        for r in 0..rows {
            for c in 0..cols {
                bits[c][rows - 1 - r] = self.bits[r][c];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }

    /// Offsets `(dx, dy)` of filled cells, row by row
    pub fn filled(&self) -> CellOffsets {
        let mut out = CellOffsets::new();
        for r in 0..self.rows as usize {
            for c in 0..self.cols as usize {
                if self.bits[r][c] {
                    out.push((c as i8, r as i8));
                }
            }
        }
        out
    }
}
