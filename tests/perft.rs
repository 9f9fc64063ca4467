use isobot::board::{Board, MoveRule};
use isobot::perft::perft;

#[test]
fn perft_step_3x3() {
    let b = Board::with_rule(3, 3, MoveRule::Step);
    assert_eq!(perft(&b, 1), 9);
    assert_eq!(perft(&b, 2), 72);
    // Each first square with k neighbours: 8 placements for Two, k moves unless Two sits on one.
    assert_eq!(perft(&b, 3), 168);
}

#[test]
fn perft_knight_7x7_placements() {
    let b = Board::new(7, 7);
    assert_eq!(perft(&b, 1), 49);
    assert_eq!(perft(&b, 2), 49 * 48);
}
