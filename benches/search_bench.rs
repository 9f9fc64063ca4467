use criterion::{criterion_group, criterion_main, Criterion, black_box};
use isobot::board::{Board, Cell, PlayerId};
use isobot::search::eval::MobilityEval;
use isobot::search::{Governor, SearchContext, SearchMethod, Searcher, Unlimited};

fn midgame() -> Board {
    let mut b = Board::new(7, 7);
    b.place(PlayerId::One, Cell::new(3, 3)).unwrap();
    b.place(PlayerId::Two, Cell::new(0, 0)).unwrap();
    b
}

fn bench_search(c: &mut Criterion) {
    let b = midgame();
    let s = Searcher::new(MobilityEval);
    for (name, method) in [("alphabeta_depth_5", SearchMethod::AlphaBeta), ("minimax_depth_5", SearchMethod::Minimax)] {
        c.bench_function(name, |ben| {
            ben.iter(|| {
                let d = Unlimited;
                let mut ctx = SearchContext::new(PlayerId::One, Governor::bare(&d));
                let r = s.search(&mut ctx, black_box(&b), method, 5, true).unwrap();
                black_box((r, ctx.nodes()))
            })
        });
    }
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
