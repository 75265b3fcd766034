//! A single playing card.

use serde::{Deserialize, Serialize};

/// A `(rank, suit)` pair.
///
/// Ranks run `1..=max_rank` and suits `1..=suits`. The all-zero card
/// [`Card::EMPTY`] marks a slot that has been played, or a seat that has not
/// played yet in the current trick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: u8,
    pub suit: u8,
}

impl Card {
    /// The "no card" sentinel.
    pub const EMPTY: Card = Card { rank: 0, suit: 0 };

    #[must_use]
    pub const fn new(rank: u8, suit: u8) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.rank == 0
    }

    /// Is this a real card of `suit`?
    #[must_use]
    pub fn is_suit(self, suit: u8) -> bool {
        !self.is_empty() && self.suit == suit
    }

    /// The `(rank, suit)` pair as exposed in observations.
    #[must_use]
    pub const fn as_pair(self) -> (u8, u8) {
        (self.rank, self.suit)
    }
}

impl From<(u8, u8)> for Card {
    fn from((rank, suit): (u8, u8)) -> Self {
        Self { rank, suit }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "--")
        } else {
            write!(f, "{}/{}", self.rank, self.suit)
        }
    }
}
