use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates out of range")]
    OutOfRange,
    #[error("Cell is already occupied")]
    OccupiedCell,
    #[error("No candidate cells to choose from")]
    EmptyCandidateSet,
    #[error("It is not this player's turn")]
    WrongTurn,
    #[error("Board shape does not match 3x3")]
    InvalidBoardShape,
    #[error("Piece counts cannot come from alternating play")]
    InvalidPieceCounts,
}

pub type Result<T> = core::result::Result<T, GameError>;
