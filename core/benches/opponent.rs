use criterion::{Criterion, criterion_group, criterion_main};
use redblue_core::*;
use std::hint::black_box;

fn opening_reply(c: &mut Criterion) {
    let state = GameState::new(Seed(42))
        .apply(Action::PlayerMove(CENTER))
        .0;

    c.bench_function("opening reply", |b| {
        b.iter(|| black_box(&state).apply(Action::OpponentReply { epoch: 0 }))
    });
}

fn full_game(c: &mut Criterion) {
    c.bench_function("full game", |b| {
        b.iter(|| {
            let mut state = GameState::new(Seed(black_box(7)));
            while !state.outcome().is_finished() {
                let action = match state.pending_reply() {
                    Some(ticket) => ticket.action(),
                    None => {
                        let empty = state.board().empty_cells();
                        Action::PlayerMove(empty[0])
                    }
                };
                state = state.apply(action).0;
            }
            state
        })
    });
}

criterion_group!(benches, opening_reply, full_game);
criterion_main!(benches);
