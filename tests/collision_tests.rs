//! Movement legality tests

use blocktris::core::{can_move_down, can_move_left, can_move_right, can_rotate_cw, fits, Board, Piece, Shape};
use blocktris::types::PieceKind;

#[test]
fn test_walls_block_sideways_moves() {
    let board = Board::new();
    let left = Piece::new(PieceKind::J, 0, 5);
    assert!(!can_move_left(&board, &left));
    assert!(can_move_right(&board, &left));

    // J is 3 wide, so x = 7 touches the right wall.
    let right = Piece::new(PieceKind::J, 7, 5);
    assert!(can_move_left(&board, &right));
    assert!(!can_move_right(&board, &right));
}

#[test]
fn test_floor_blocks_descent() {
    let board = Board::new();
    assert!(can_move_down(&board, &Piece::new(PieceKind::O, 4, 17)));
    assert!(!can_move_down(&board, &Piece::new(PieceKind::O, 4, 18)));
}

#[test]
fn test_settled_cells_block_moves() {
    let mut board = Board::new();
    board.set(4, 10, Some(PieceKind::Z));

    // O occupying (2..=3, 9..=10): right neighbour at x=4 row 10 is filled.
    let o = Piece::new(PieceKind::O, 2, 9);
    assert!(!can_move_right(&board, &o));
    assert!(can_move_left(&board, &o));

    // O occupying (4..=5, 8..=9) sits directly on top of (4, 10).
    let above = Piece::new(PieceKind::O, 4, 8);
    assert!(!can_move_down(&board, &above));
}

#[test]
fn test_rotation_has_no_wall_kick() {
    let board = Board::new();
    // Vertical I against the right wall would need 4 columns once rotated.
    let i = Piece::new(PieceKind::I, 8, 0);
    assert!(!can_rotate_cw(&board, &i));
    assert!(can_rotate_cw(&board, &Piece::new(PieceKind::I, 6, 0)));
}

#[test]
fn test_rotation_blocked_by_settled_cell() {
    let mut board = Board::new();
    // T at (3, 5) rotated occupies (3,5), (3,6), (4,6), (3,7).
    board.set(3, 7, Some(PieceKind::L));
    assert!(!can_rotate_cw(&board, &Piece::new(PieceKind::T, 3, 5)));
}

#[test]
fn test_cells_above_top_edge_count_as_empty() {
    let board = Board::new();
    let shape = Shape::template(PieceKind::I);
    assert!(fits(&board, &shape, 0, -2));
    assert!(!fits(&board, &shape, 0, 17));
}

#[test]
fn test_extreme_anchors_are_illegal_not_a_panic() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let shape = Shape::template(kind);
        assert!(!fits(&board, &shape, i8::MAX, 0));
        assert!(!fits(&board, &shape, i8::MIN, 0));
        assert!(!fits(&board, &shape, 0, i8::MAX));
        assert!(!can_move_right(&board, &Piece::new(kind, i8::MAX, 0)));
        assert!(!can_move_down(&board, &Piece::new(kind, 0, i8::MAX)));
    }
}
