use crate::board::GameState;

// Leaf count of the move tree below `state`; a side with no moves ends the line.
pub fn perft<S: GameState>(state: &S, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let mut nodes = 0u64;
    for m in state.active_moves() {
        let child = state.forecast(m);
        nodes += perft(&child, depth - 1);
    }
    nodes
}
