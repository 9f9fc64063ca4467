//! Board interface consumed by the search core, plus the concrete Isolation board.
use std::fmt::Debug;

pub mod isolation;

pub use isolation::{Board, BoardError, Cell, MoveRule, PlayerId};

/// Immutable-per-ply game state. The search never mutates a state in place;
/// successors are produced with `forecast`.
pub trait GameState: Clone {
    type Move: Copy + PartialEq + Debug;
    type Player: Copy + PartialEq + Debug;

    fn active_player(&self) -> Self::Player;
    fn inactive_player(&self) -> Self::Player;

    /// Legal moves for `player` in enumeration order. Empty means that side cannot move.
    fn legal_moves(&self, player: Self::Player) -> Vec<Self::Move>;

    /// Successor state with `mv` applied for the active player and the turn passed.
    fn forecast(&self, mv: Self::Move) -> Self;

    fn active_moves(&self) -> Vec<Self::Move> { self.legal_moves(self.active_player()) }
}
