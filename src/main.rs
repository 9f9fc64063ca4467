use anyhow::{Context, Result};
use clap::Parser;
use isobot::board::{Board, MoveRule};
use isobot::opening::CenterOpening;
use isobot::search::{Heuristic, SearchMethod};
use isobot::selfplay::{play_game, MatchParams, MovePicker, RandomPlayer};
use isobot::{Agent, AgentConfig, GameState};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "isobot", version, about = "Play one game of Isolation between two agents", long_about = None)]
struct Args {
    /// Board width
    #[arg(long, default_value_t = 7)]
    width: usize,

    /// Board height
    #[arg(long, default_value_t = 7)]
    height: usize,

    /// Token movement: 'knight' or 'step'
    #[arg(long, default_value = "knight")]
    rule: String,

    /// Per-move time limit in milliseconds
    #[arg(long, default_value_t = 150)]
    time_limit_ms: u64,

    /// JSON agent config for player 1
    #[arg(long)]
    config1: Option<PathBuf>,

    /// JSON agent config for player 2
    #[arg(long)]
    config2: Option<PathBuf>,

    /// Override search method for player 1: 'minimax' or 'alphabeta'
    #[arg(long)]
    method1: Option<String>,

    /// Override search method for player 2
    #[arg(long)]
    method2: Option<String>,

    /// Fixed search depth for player 1 (turns off iterative deepening)
    #[arg(long)]
    depth1: Option<u32>,

    /// Fixed search depth for player 2
    #[arg(long)]
    depth2: Option<u32>,

    /// Override heuristic for player 1: mobility, open_move, null, weighted:<w>
    #[arg(long)]
    heuristic1: Option<String>,

    /// Override heuristic for player 2
    #[arg(long)]
    heuristic2: Option<String>,

    /// Player 2 plays uniformly random moves
    #[arg(long)]
    random_opponent: bool,

    /// Place both tokens randomly before the agents take over
    #[arg(long)]
    random_start: bool,

    /// Seed for random placements and the random opponent
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Print the game record as JSON
    #[arg(long)]
    json: bool,

    /// Print the board after every move, not just the final one
    #[arg(long)]
    verbose: bool,
}

fn parse_rule(s: &str) -> Result<MoveRule> {
    match s.to_lowercase().as_str() {
        "knight" | "k" => Ok(MoveRule::Knight),
        "step" | "s" => Ok(MoveRule::Step),
        _ => anyhow::bail!("Invalid rule {s:?}: use 'knight' or 'step'"),
    }
}

fn parse_method(s: &str) -> Result<SearchMethod> {
    match s.to_lowercase().as_str() {
        "minimax" => Ok(SearchMethod::Minimax),
        "alphabeta" | "ab" => Ok(SearchMethod::AlphaBeta),
        _ => anyhow::bail!("Invalid method {s:?}: use 'minimax' or 'alphabeta'"),
    }
}

fn build_agent(path: Option<&PathBuf>, method: Option<&str>, depth: Option<u32>, heuristic: Option<&str>) -> Result<Agent<Board>> {
    let mut cfg = match path {
        Some(p) => AgentConfig::load(p).with_context(|| format!("loading {}", p.display()))?,
        None => AgentConfig::default(),
    };
    if let Some(m) = method { cfg.method = parse_method(m)?; }
    if let Some(d) = depth {
        cfg.search_depth = d;
        cfg.iterative = false;
    }
    if let Some(h) = heuristic { cfg.heuristic = h.parse::<Heuristic>().map_err(|e| anyhow::anyhow!(e))?; }
    Ok(Agent::from_config(cfg)?.with_opening_book(CenterOpening))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.width == 0 || args.height == 0 { anyhow::bail!("board must be at least 1x1"); }

    let rule = parse_rule(&args.rule)?;
    let mut board = Board::with_rule(args.width, args.height, rule);
    if args.random_start {
        let mut placer = RandomPlayer::new(args.seed);
        let unlimited = isobot::search::Unlimited;
        for _ in 0..2 {
            if let Some(c) = placer.pick(&board, &unlimited)? { board = board.forecast(c); }
        }
    }
    let start = board.clone();

    let mut p1 = build_agent(args.config1.as_ref(), args.method1.as_deref(), args.depth1, args.heuristic1.as_deref())?;
    let mut random = RandomPlayer::new(args.seed.wrapping_add(1));
    let mut agent2;
    let p2: &mut dyn MovePicker = if args.random_opponent {
        &mut random
    } else {
        agent2 = build_agent(args.config2.as_ref(), args.method2.as_deref(), args.depth2, args.heuristic2.as_deref())?;
        &mut agent2
    };

    let params = MatchParams { time_limit: Duration::from_millis(args.time_limit_ms), max_plies: args.max_plies };
    let (record, final_board) = play_game(board, [&mut p1, p2], &params)?;

    let mut replay = start;
    if args.verbose { println!("{}", replay); }
    for (i, &m) in record.moves.iter().enumerate() {
        println!("ply {}: {} -> {}", i + 1, replay.active_player(), m);
        replay = replay.forecast(m);
        if args.verbose { println!("{}", replay); }
    }
    if !args.verbose { println!("{}", final_board); }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        match record.winner {
            Some(w) => println!("{} wins after {} plies ({:?})", w, record.moves.len(), record.reason),
            None => println!("no winner after {} plies ({:?})", record.moves.len(), record.reason),
        }
    }
    Ok(())
}
