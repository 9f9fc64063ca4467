use isobot::board::{Board, GameState, MoveRule};
use isobot::search::SearchMethod;
use isobot::selfplay::{play_game, EndReason, MatchParams, RandomPlayer};
use isobot::{Agent, AgentConfig};
use std::time::Duration;

fn params() -> MatchParams { MatchParams { time_limit: Duration::from_secs(2), max_plies: 100 } }

#[test]
fn random_games_are_deterministic_by_seed() {
    let (g1, _) = play_game(Board::new(5, 5), [&mut RandomPlayer::new(1), &mut RandomPlayer::new(2)], &params()).unwrap();
    let (g2, _) = play_game(Board::new(5, 5), [&mut RandomPlayer::new(1), &mut RandomPlayer::new(2)], &params()).unwrap();
    assert_eq!(g1.moves, g2.moves);
    assert_eq!(g1.reason, EndReason::NoMoves);
    assert!(g1.winner.is_some());
}

#[test]
fn agent_game_replays_legally_to_the_final_board() {
    let cfg = AgentConfig::fixed_depth(SearchMethod::AlphaBeta, 3);
    let mut agent: Agent<Board> = Agent::from_config(cfg).unwrap();
    let mut random = RandomPlayer::new(9);
    let start = Board::with_rule(4, 4, MoveRule::Step);
    let (record, final_board) = play_game(start.clone(), [&mut agent, &mut random], &params()).unwrap();
    assert_eq!(record.reason, EndReason::NoMoves);

    let mut replay = start;
    for &m in &record.moves {
        replay = replay.apply_move(m).expect("recorded move must be legal");
    }
    assert_eq!(replay, final_board);
    assert!(final_board.active_moves().is_empty());
    assert_eq!(record.winner, Some(final_board.inactive_player()));
}
