//! Browser tests, run with `wasm-pack test --headless --firefox web`.
#![cfg(target_arch = "wasm32")]

use gloo::timers::future::TimeoutFuture;
use redblue_core::{Action, GameOutcome, MoveOutcome, Seed};
use redblue_web::GameHandle;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn player_move_updates_queries() {
    let handle = GameHandle::new();

    assert!(handle.player_move(1, 1));
    assert_eq!(handle.cell(1, 1).unwrap(), "blue");
    assert_eq!(handle.status_message(), "Their turn.");
    assert!(!handle.player_move(1, 1));
}

#[wasm_bindgen_test]
fn out_of_range_cell_is_an_error() {
    let handle = GameHandle::new();

    assert!(handle.cell(3, 0).is_err());
    assert!(!handle.player_move(0, 7));
}

#[wasm_bindgen_test]
fn reset_discards_scheduled_reply() {
    let handle = GameHandle::new();
    handle.dispatch(Action::PlayerMove((0, 0)));
    let ticket = handle.state().pending_reply().unwrap();

    handle.dispatch(Action::Reset { seed: Seed(5) });

    assert_eq!(handle.dispatch(ticket.action()), MoveOutcome::NoChange);
    assert_eq!(handle.state().outcome(), GameOutcome::BlueTurn);
    assert!(handle.snapshot().unwrap().contains("Your turn."));
}

#[wasm_bindgen_test]
async fn opponent_reply_fires_after_pacing_delay() {
    let handle = GameHandle::new();
    let calls = Rc::new(Cell::new(0u32));
    let listener = {
        let calls = calls.clone();
        Closure::<dyn FnMut()>::new(move || calls.set(calls.get() + 1))
    };
    handle.on_change(listener.as_ref().unchecked_ref::<js_sys::Function>().clone());

    assert!(handle.player_move(1, 1));
    assert_eq!(calls.get(), 1);
    assert_eq!(handle.state().outcome(), GameOutcome::RedTurn);

    TimeoutFuture::new(handle.state().pacing().max_delay_ms + 200).await;

    assert_eq!(calls.get(), 2);
    assert_eq!(handle.state().board().count_of(redblue_core::Cell::Red), 1);
    assert_eq!(handle.status_message(), "Your turn.");
    drop(listener);
}
