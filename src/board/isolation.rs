use std::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::board::GameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self { Self { row, col } }

    fn offset(self, dr: isize, dc: isize) -> Option<Cell> {
        Some(Cell { row: self.row.checked_add_signed(dr)?, col: self.col.checked_add_signed(dc)? })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "({}, {})", self.row, self.col) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> Self {
        match self { PlayerId::One => PlayerId::Two, PlayerId::Two => PlayerId::One }
    }

    fn index(self) -> usize {
        match self { PlayerId::One => 0, PlayerId::Two => 1 }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { PlayerId::One => write!(f, "player 1"), PlayerId::Two => write!(f, "player 2") }
    }
}

/// How a placed token moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveRule {
    /// L-shaped jumps, as in classic Isolation.
    #[default]
    Knight,
    /// One orthogonal step.
    Step,
}

const KNIGHT_DIRS: [(isize, isize); 8] = [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];
const STEP_DIRS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

impl MoveRule {
    fn directions(self) -> &'static [(isize, isize)] {
        match self { MoveRule::Knight => &KNIGHT_DIRS, MoveRule::Step => &STEP_DIRS }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell {0} is outside the board")]
    OutOfBounds(Cell),
    #[error("cell {0} is already blocked")]
    Blocked(Cell),
    #[error("{player} cannot move to {cell}")]
    IllegalMove { player: PlayerId, cell: Cell },
}

/// Isolation board: two tokens, every visited cell stays blocked, and the
/// side to move with no legal destination loses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    rule: MoveRule,
    blocked: Vec<bool>,
    locations: [Option<Cell>; 2],
    active: PlayerId,
    move_count: usize,
}

impl Default for Board {
    fn default() -> Self { Self::new(7, 7) }
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self { Self::with_rule(width, height, MoveRule::Knight) }

    pub fn with_rule(width: usize, height: usize, rule: MoveRule) -> Self {
        Self {
            width,
            height,
            rule,
            blocked: vec![false; width * height],
            locations: [None, None],
            active: PlayerId::One,
            move_count: 0,
        }
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn rule(&self) -> MoveRule { self.rule }
    pub fn move_count(&self) -> usize { self.move_count }

    pub fn center(&self) -> Cell { Cell::new(self.height / 2, self.width / 2) }

    pub fn in_bounds(&self, cell: Cell) -> bool { cell.row < self.height && cell.col < self.width }

    fn idx(&self, cell: Cell) -> usize { cell.row * self.width + cell.col }

    pub fn is_blank(&self, cell: Cell) -> bool { self.in_bounds(cell) && !self.blocked[self.idx(cell)] }

    pub fn player_location(&self, player: PlayerId) -> Option<Cell> { self.locations[player.index()] }

    /// Puts `player`'s token on `cell` without passing the turn. Used to set up positions.
    pub fn place(&mut self, player: PlayerId, cell: Cell) -> Result<(), BoardError> {
        self.block(cell)?;
        self.locations[player.index()] = Some(cell);
        Ok(())
    }

    /// Marks `cell` as visited.
    pub fn block(&mut self, cell: Cell) -> Result<(), BoardError> {
        if !self.in_bounds(cell) { return Err(BoardError::OutOfBounds(cell)); }
        let i = self.idx(cell);
        if self.blocked[i] { return Err(BoardError::Blocked(cell)); }
        self.blocked[i] = true;
        Ok(())
    }

    pub fn blank_cells(&self) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.blocked.len());
        for row in 0..self.height {
            for col in 0..self.width {
                let c = Cell::new(row, col);
                if self.is_blank(c) { cells.push(c); }
            }
        }
        cells
    }

    pub fn move_is_legal(&self, cell: Cell) -> bool { self.legal_moves(self.active).contains(&cell) }

    pub fn is_loser(&self, player: PlayerId) -> bool {
        player == self.active && self.legal_moves(player).is_empty()
    }

    pub fn is_winner(&self, player: PlayerId) -> bool {
        player != self.active && self.legal_moves(self.active).is_empty()
    }

    /// +inf for a won position, -inf for a lost one, 0 while the game is open.
    pub fn utility(&self, player: PlayerId) -> f64 {
        if self.is_winner(player) { f64::INFINITY } else if self.is_loser(player) { f64::NEG_INFINITY } else { 0.0 }
    }

    /// Checked version of `forecast`.
    pub fn apply_move(&self, cell: Cell) -> Result<Board, BoardError> {
        if !self.move_is_legal(cell) { return Err(BoardError::IllegalMove { player: self.active, cell }); }
        Ok(self.forecast(cell))
    }
}

impl GameState for Board {
    type Move = Cell;
    type Player = PlayerId;

    fn active_player(&self) -> PlayerId { self.active }
    fn inactive_player(&self) -> PlayerId { self.active.opponent() }

    fn legal_moves(&self, player: PlayerId) -> Vec<Cell> {
        let Some(from) = self.player_location(player) else { return self.blank_cells(); };
        self.rule.directions().iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|&c| self.is_blank(c))
            .collect()
    }

    fn forecast(&self, mv: Cell) -> Board {
        let mut next = self.clone();
        let i = next.idx(mv);
        next.blocked[i] = true;
        next.locations[self.active.index()] = Some(mv);
        next.active = self.active.opponent();
        next.move_count += 1;
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let c = Cell::new(row, col);
                let glyph = if self.locations[0] == Some(c) { '1' }
                    else if self.locations[1] == Some(c) { '2' }
                    else if self.blocked[self.idx(c)] { '-' }
                    else { '.' };
                write!(f, " {}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
