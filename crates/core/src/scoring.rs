//! Scoring module - line clearing and flat per-row scoring
//!
//! Rows are scanned bottom to top. After a full row is removed the rows above
//! shift into its index, so the same index is examined again before the scan
//! moves up; stacked full rows are all cleared in a single pass.

use crate::board::Board;
use crate::types::{BOARD_HEIGHT, LINE_CLEAR_POINTS};

/// Result of one line-clear pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineClear {
    /// Number of rows removed
    pub rows: u32,
    /// Points earned for those rows
    pub points: u32,
}

/// Points for clearing `rows` rows. No multi-line bonus.
pub fn line_clear_points(rows: u32) -> u32 {
    rows * LINE_CLEAR_POINTS
}

/// Remove every full row, compacting the rows above it.
pub fn clear_lines(board: &mut Board) -> LineClear {
    let mut rows = 0;
    let mut y = BOARD_HEIGHT as usize;

    while y > 0 {
        let row = y - 1;
        if board.is_row_full(row) {
            board.clear_row(row);
            board.shift_rows_down(row);
            rows += 1;
            // Re-check `row`: whatever sat above it has just moved in.
            continue;
        }
        y -= 1;
    }

    LineClear {
        rows,
        points: line_clear_points(rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, BOARD_WIDTH};

    fn fill_row(board: &mut Board, y: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(PieceKind::I));
        }
    }

    #[test]
    fn test_no_full_rows() {
        let mut board = Board::new();
        board.set(0, 19, Some(PieceKind::T));
        assert_eq!(clear_lines(&mut board), LineClear::default());
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_single_row_removes_ten_cells() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        board.set(3, 18, Some(PieceKind::S));
        let before = board.occupied_count();

        let result = clear_lines(&mut board);

        assert_eq!(result, LineClear { rows: 1, points: 10 });
        assert_eq!(board.occupied_count(), before - 10);
        assert!(board.is_occupied(3, 19));
        assert!(!board.is_occupied(3, 18));
    }

    #[test]
    fn test_stacked_full_rows_cleared_in_one_pass() {
        let mut board = Board::new();
        fill_row(&mut board, 18);
        fill_row(&mut board, 19);
        board.set(0, 17, Some(PieceKind::Z));

        let result = clear_lines(&mut board);

        assert_eq!(result.rows, 2);
        assert_eq!(result.points, 20);
        assert_eq!(board.occupied_count(), 1);
        assert!(board.is_occupied(0, 19));
    }

    #[test]
    fn test_non_adjacent_full_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        board.set(4, 18, Some(PieceKind::J));
        fill_row(&mut board, 17);

        let result = clear_lines(&mut board);

        assert_eq!(result.rows, 2);
        assert_eq!(board.occupied_count(), 1);
        assert!(board.is_occupied(4, 19));
    }

    #[test]
    fn test_whole_board_full() {
        let mut board = Board::new();
        for y in 0..BOARD_HEIGHT as i8 {
            fill_row(&mut board, y);
        }
        let result = clear_lines(&mut board);
        assert_eq!(result.rows, BOARD_HEIGHT as u32);
        assert_eq!(board.occupied_count(), 0);
    }
}
