use serde::{Deserialize, Serialize};

/// State of one board slot.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Cell {
    #[default]
    Empty,
    Blue,
    Red,
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The other colour, `Empty` stays `Empty`.
    pub const fn opponent(self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Blue => Self::Red,
            Self::Red => Self::Blue,
        }
    }

    pub(crate) const fn to_word(self) -> u64 {
        match self {
            Self::Empty => 0,
            Self::Blue => 1,
            Self::Red => 2,
        }
    }
}
