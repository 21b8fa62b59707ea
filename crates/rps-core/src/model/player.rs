use core::fmt;
use serde::{Deserialize, Serialize};

/// The two sides at the table: the human operator and the automated opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Side {
    Own = 0,
    Opponent = 1,
}

impl Side {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn other(self) -> Side {
        match self {
            Side::Own => Side::Opponent,
            Side::Opponent => Side::Own,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Side::Own => "User",
            Side::Opponent => "Bot",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Side;

    #[test]
    fn other_flips_side() {
        assert_eq!(Side::Own.other(), Side::Opponent);
        assert_eq!(Side::Opponent.other(), Side::Own);
    }

    #[test]
    fn index_selects_score_slot() {
        assert_eq!(Side::Own.index(), 0);
        assert_eq!(Side::Opponent.index(), 1);
    }

    #[test]
    fn display_uses_table_labels() {
        assert_eq!(Side::Own.to_string(), "User");
        assert_eq!(Side::Opponent.to_string(), "Bot");
    }
}
