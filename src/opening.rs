//! Opening-book shortcuts that skip the search on the widest plies.
use crate::board::{Board, Cell, GameState};

pub trait OpeningBook<S: GameState> {
    /// A move to play without searching, or `None` to fall through to the search.
    fn lookup(&self, state: &S, legal: &[S::Move]) -> Option<S::Move>;
}

/// First ply takes the centre; the reply takes the centre if still open and
/// otherwise the top-left corner.
#[derive(Clone, Copy, Debug, Default)]
pub struct CenterOpening;

impl OpeningBook<Board> for CenterOpening {
    fn lookup(&self, state: &Board, legal: &[Cell]) -> Option<Cell> {
        let center = state.center();
        let corner = Cell::new(0, 0);
        // Only while the side to move has not placed its token yet.
        if state.player_location(state.active_player()).is_some() { return None; }
        if legal.contains(&center) { return Some(center); }
        match state.player_location(state.inactive_player()) {
            Some(_) if legal.contains(&corner) => Some(corner),
            _ => None,
        }
    }
}
