use serde::{Deserialize, Serialize};

use crate::*;

/// Derived game status, recomputed from the board on every query.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    BlueTurn,
    RedTurn,
    BlueWins,
    RedWins,
    Draw,
}

impl GameOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::BlueWins | Self::RedWins | Self::Draw)
    }

    /// The colour expected to move next, if the game is still running.
    pub const fn active_player(self) -> Option<Cell> {
        match self {
            Self::BlueTurn => Some(Cell::Blue),
            Self::RedTurn => Some(Cell::Red),
            _ => None,
        }
    }

    pub const fn winner(self) -> Option<Cell> {
        match self {
            Self::BlueWins => Some(Cell::Blue),
            Self::RedWins => Some(Cell::Red),
            _ => None,
        }
    }

    /// Status line shown to the (Blue) player.
    pub const fn status_message(self) -> &'static str {
        use GameOutcome::*;
        match self {
            BlueTurn => "Your turn.",
            RedTurn => "Their turn.",
            BlueWins => "You win.",
            RedWins => "You lose.",
            Draw => "Draw.",
        }
    }
}

impl Board {
    pub fn has_line_of(&self, color: Cell) -> bool {
        LINES
            .into_iter()
            .any(|line| self.is_line_full_of(line, color))
    }

    /// True once every line holds at least one Blue and one Red.
    ///
    /// This can end the game before the board fills up.
    pub fn is_blocked_everywhere(&self) -> bool {
        LINES.into_iter().all(|line| {
            self.line_contains(line, Cell::Blue) && self.line_contains(line, Cell::Red)
        })
    }

    pub fn outcome(&self) -> GameOutcome {
        if self.has_line_of(Cell::Blue) {
            GameOutcome::BlueWins
        } else if self.has_line_of(Cell::Red) {
            GameOutcome::RedWins
        } else if self.is_blocked_everywhere() {
            GameOutcome::Draw
        } else if self.empty_count() % 2 == 0 {
            GameOutcome::RedTurn
        } else {
            GameOutcome::BlueTurn
        }
    }

    pub fn status_message(&self) -> &'static str {
        self.outcome().status_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::parse_board;

    #[test]
    fn empty_board_is_blue_turn() {
        let board = Board::new();

        assert_eq!(board.outcome(), GameOutcome::BlueTurn);
        assert_eq!(board.status_message(), "Your turn.");
    }

    #[test]
    fn turn_follows_empty_count_parity() {
        let board = Board::new().place((1, 1), Cell::Blue).unwrap();
        assert_eq!(board.outcome(), GameOutcome::RedTurn);
        assert_eq!(board.status_message(), "Their turn.");

        let board = board.place((0, 0), Cell::Red).unwrap();
        assert_eq!(board.outcome(), GameOutcome::BlueTurn);
    }

    #[test]
    fn blue_completing_column_wins() {
        let board = parse_board(["B..", "BR.", "..."]);
        assert_eq!(board.outcome(), GameOutcome::RedTurn);

        let board = board.place((0, 2), Cell::Blue).unwrap();

        assert_eq!(board.outcome(), GameOutcome::BlueWins);
        assert_eq!(board.status_message(), "You win.");
    }

    #[test]
    fn red_diagonal_wins() {
        let board = parse_board(["RBB", "BR.", "B.R"]);

        assert_eq!(board.outcome(), GameOutcome::RedWins);
        assert_eq!(board.status_message(), "You lose.");
    }

    #[test]
    fn full_board_with_every_line_mixed_is_draw() {
        let board = parse_board(["BRB", "BRR", "RBB"]);

        assert_eq!(board.empty_count(), 0);
        assert_eq!(board.outcome(), GameOutcome::Draw);
        assert_eq!(board.status_message(), "Draw.");
    }

    // Draw is declared as soon as every line is blocked, even with empty cells left.
    #[test]
    fn draw_is_declared_before_board_is_full() {
        let board = parse_board(["BRB", "BRR", "RB."]);

        assert_eq!(board.empty_count(), 1);
        assert_eq!(board.outcome(), GameOutcome::Draw);
    }

    #[test]
    fn one_unblocked_line_keeps_game_running() {
        let board = parse_board(["BR.", "RB.", "..."]);

        assert!(!board.is_blocked_everywhere());
        assert_eq!(board.outcome(), GameOutcome::BlueTurn);
    }

    #[test]
    fn outcome_helpers() {
        assert!(GameOutcome::Draw.is_finished());
        assert!(!GameOutcome::RedTurn.is_finished());
        assert_eq!(GameOutcome::RedTurn.active_player(), Some(Cell::Red));
        assert_eq!(GameOutcome::BlueWins.winner(), Some(Cell::Blue));
        assert_eq!(GameOutcome::Draw.winner(), None);
    }
}
