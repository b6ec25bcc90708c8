//! Shape template and rotation tests

use proptest::prelude::*;

use blocktris::core::{Piece, Shape};
use blocktris::types::PieceKind;

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    (0..PieceKind::ALL.len()).prop_map(|i| PieceKind::ALL[i])
}

#[test]
fn test_templates_have_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(Shape::template(kind).filled().len(), 4, "{:?}", kind);
    }
}

#[test]
fn test_template_dimensions() {
    let dims = |k| {
        let s = Shape::template(k);
        (s.rows(), s.cols())
    };
    assert_eq!(dims(PieceKind::I), (4, 1));
    assert_eq!(dims(PieceKind::O), (2, 2));
    for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        assert_eq!(dims(kind), (2, 3));
    }
}

#[test]
fn test_rotate_t() {
    // .#.      #.
    // ###  ->  ##
    //          #.
    let rotated = Shape::template(PieceKind::T).rotate_cw();
    let expected = Shape::from_rows(&[&[1, 0], &[1, 1], &[1, 0]]).unwrap();
    assert_eq!(rotated, expected);
}

#[test]
fn test_rotate_i_becomes_horizontal() {
    let rotated = Shape::template(PieceKind::I).rotate_cw();
    assert_eq!((rotated.rows(), rotated.cols()), (1, 4));
    assert_eq!(rotated.filled().as_slice(), &[(0, 0), (1, 0), (2, 0), (3, 0)]);
}

#[test]
fn test_rotate_o_is_unchanged() {
    let o = Shape::template(PieceKind::O);
    assert_eq!(o.rotate_cw(), o);
}

#[test]
fn test_from_rows_rejects_bad_input() {
    assert!(Shape::from_rows(&[]).is_none());
    assert!(Shape::from_rows(&[&[1, 0], &[1]]).is_none());
    assert!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());
}

#[test]
fn test_piece_cells_are_offsets_plus_origin() {
    let piece = Piece::new(PieceKind::S, 4, 7);
    assert_eq!(piece.cells().as_slice(), &[(5, 7), (6, 7), (4, 8), (5, 8)]);
}

proptest! {
    #[test]
    fn four_rotations_are_identity(kind in kind_strategy()) {
        let shape = Shape::template(kind);
        let back = shape.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
        prop_assert_eq!(back, shape);
    }

    #[test]
    fn rotation_swaps_dimensions_and_keeps_cell_count(kind in kind_strategy(), turns in 0usize..4) {
        let mut shape = Shape::template(kind);
        for _ in 0..turns {
            shape = shape.rotate_cw();
        }
        let rotated = shape.rotate_cw();
        prop_assert_eq!((rotated.rows(), rotated.cols()), (shape.cols(), shape.rows()));
        prop_assert_eq!(rotated.filled().len(), shape.filled().len());
    }
}
