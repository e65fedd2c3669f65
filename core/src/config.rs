use serde::{Deserialize, Serialize};

/// Gameplay switches that differ between variants of the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Move Blue elsewhere when it tries to take a cell that would complete
    /// or block a two-in-a-line.
    pub redirect_double_threats: bool,
}

impl Rules {
    pub const fn fair() -> Self {
        Self {
            redirect_double_threats: false,
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            redirect_double_threats: true,
        }
    }
}

/// Bounds for the pause before the opponent answers, purely cosmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyPacing {
    pub min_delay_ms: u32,
    pub max_delay_ms: u32,
}

impl Default for ReplyPacing {
    fn default() -> Self {
        Self {
            min_delay_ms: 200,
            max_delay_ms: 500,
        }
    }
}
