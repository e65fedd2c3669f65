use gloo::timers::callback::Timeout;
use redblue_core as game;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use crate::settings::Args;

struct Session {
    state: game::GameState,
    pending_reply: Option<Timeout>,
    listener: Option<js_sys::Function>,
}

type SharedSession = Rc<RefCell<Session>>;

/// Applies `action`, then schedules Red's reply and tells the page to redraw.
fn dispatch(session: &SharedSession, action: game::Action) -> game::MoveOutcome {
    let outcome = {
        let mut session = session.borrow_mut();
        let (next, outcome) = session.state.apply(action);
        session.state = next;
        outcome
    };

    if outcome.has_update() {
        schedule_reply(session);
        notify(session);
    }
    outcome
}

/// Replacing the pending timer cancels it; the epoch check in the core drops
/// any reply that still slips through.
fn schedule_reply(session: &SharedSession) {
    let ticket = session.borrow().state.pending_reply();
    let timeout = ticket.map(|ticket| {
        log::trace!("opponent reply in {}ms", ticket.delay_ms);
        let weak = Rc::downgrade(session);
        Timeout::new(ticket.delay_ms, move || {
            if let Some(session) = weak.upgrade() {
                dispatch(&session, ticket.action());
            }
        })
    });
    session.borrow_mut().pending_reply = timeout;
}

fn notify(session: &SharedSession) {
    let listener = session.borrow().listener.clone();
    if let Some(listener) = listener {
        if let Err(err) = listener.call0(&JsValue::NULL) {
            log::error!("change listener failed: {:?}", err);
        }
    }
}

const fn cell_name(cell: game::Cell) -> &'static str {
    match cell {
        game::Cell::Empty => "empty",
        game::Cell::Blue => "blue",
        game::Cell::Red => "red",
    }
}

/// Handle the page keeps for the lifetime of one view.
#[wasm_bindgen]
pub struct GameHandle {
    session: SharedSession,
}

impl GameHandle {
    pub(crate) fn with_state(state: game::GameState) -> Self {
        let session = Session {
            state,
            pending_reply: None,
            listener: None,
        };
        Self {
            session: Rc::new(RefCell::new(session)),
        }
    }

    pub fn state(&self) -> game::GameState {
        self.session.borrow().state.clone()
    }

    pub fn dispatch(&self, action: game::Action) -> game::MoveOutcome {
        dispatch(&self.session, action)
    }
}

#[wasm_bindgen]
impl GameHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GameHandle {
        let (seed, rules) = Args::with_startup(|args| (args.first_seed(), args.rules()));
        log::debug!("seed: {:?}, rules: {:?}", seed, rules);
        Self::with_state(game::GameState::with_rules(seed, rules))
    }

    /// Registers a callback fired after every change, including Red's delayed reply.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, listener: js_sys::Function) {
        self.session.borrow_mut().listener = Some(listener);
    }

    /// Returns whether the click changed the board.
    #[wasm_bindgen(js_name = playerMove)]
    pub fn player_move(&self, x: u8, y: u8) -> bool {
        self.dispatch(game::Action::PlayerMove((x, y))).has_update()
    }

    pub fn reset(&self) {
        let seed = game::Seed::from_clock();
        self.dispatch(game::Action::Reset { seed });
    }

    pub fn cell(&self, x: u8, y: u8) -> Result<String, JsError> {
        let cell = self.session.borrow().state.cell((x, y))?;
        Ok(cell_name(cell).to_string())
    }

    pub fn outcome(&self) -> String {
        format!("{:?}", self.session.borrow().state.outcome())
    }

    #[wasm_bindgen(js_name = statusMessage)]
    pub fn status_message(&self) -> String {
        self.session.borrow().state.status_message().to_string()
    }

    /// Board, outcome and status as JSON.
    pub fn snapshot(&self) -> Result<String, JsError> {
        let snapshot = game::Snapshot::from_state(&self.session.borrow().state);
        Ok(serde_json::to_string(&snapshot)?)
    }
}

impl Default for GameHandle {
    fn default() -> Self {
        Self::new()
    }
}
