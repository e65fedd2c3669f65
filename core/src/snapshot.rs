use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a renderer needs to draw the current game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells as `cells[y][x]`.
    pub cells: [[Cell; 3]; 3],
    pub outcome: GameOutcome,
    pub status: String,
    pub epoch: u32,
    pub pending_reply: Option<ReplyTicket>,
}

impl Snapshot {
    pub fn from_state(state: &GameState) -> Self {
        let outcome = state.outcome();
        Self {
            cells: state.board().rows(),
            outcome,
            status: outcome.status_message().to_string(),
            epoch: state.epoch(),
            pending_reply: state.pending_reply(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::parse_board;

    #[test]
    fn snapshot_reflects_state() {
        let state = GameState::from_board(
            parse_board(["B..", "...", "..."]),
            Seed(1),
            Rules::default(),
        );

        let snapshot = Snapshot::from_state(&state);

        assert_eq!(snapshot.cells[0][0], Cell::Blue);
        assert_eq!(snapshot.outcome, GameOutcome::RedTurn);
        assert_eq!(snapshot.status, "Their turn.");
        assert_eq!(snapshot.pending_reply, state.pending_reply());
    }

    #[test]
    fn snapshot_serializes_for_the_page() {
        let snapshot = Snapshot::from_state(&GameState::new(Seed(1)));

        let json = serde_json::to_string(&snapshot).unwrap();

        assert!(json.contains(r#""outcome":"BlueTurn""#));
        assert!(json.contains(r#""status":"Your turn.""#));
        assert!(json.contains(r#""pending_reply":null"#));
    }
}
