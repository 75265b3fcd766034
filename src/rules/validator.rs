//! Legality checks for the agent's play.
//!
//! Scripted seats always choose from their legal slots, so only the agent's
//! action goes through validation.

use serde::{Deserialize, Serialize};

use super::trick::Trick;
use crate::cards::{Card, Hand};

/// An illegal play by the agent. Ends the episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Violation {
    /// The chosen slot was already played.
    ReplayedCard,
    /// A different suit was played while holding the called suit.
    SuitNotFollowed,
}

impl Violation {
    /// Human-readable reason reported in the step info.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Violation::ReplayedCard => "played card that was played before",
            Violation::SuitNotFollowed => "did not play suite called for",
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// Check that playing `slot` from `hand` into `trick` is legal.
///
/// Returns the card that would be played. Nothing is mutated, so a rejected
/// play leaves hand and trick untouched.
pub fn validate_play(hand: &Hand, slot: usize, trick: &Trick) -> Result<Card, Violation> {
    let card = match hand.get(slot) {
        Some(card) if !card.is_empty() => card,
        _ => return Err(Violation::ReplayedCard),
    };

    if let Some(called) = trick.called_suit() {
        if card.suit != called && hand.has_suit(called) {
            return Err(Violation::SuitNotFollowed);
        }
    }

    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SeatId;

    fn hand() -> Hand {
        Hand::from_cards(&[Card::new(2, 1), Card::new(4, 2), Card::EMPTY])
    }

    #[test]
    fn test_leading_any_card_is_legal() {
        let trick = Trick::new(2);
        assert_eq!(validate_play(&hand(), 1, &trick), Ok(Card::new(4, 2)));
        assert_eq!(validate_play(&hand(), 0, &trick), Ok(Card::new(2, 1)));
    }

    #[test]
    fn test_replayed_slot_rejected() {
        let trick = Trick::new(2);
        assert_eq!(validate_play(&hand(), 2, &trick), Err(Violation::ReplayedCard));
    }

    #[test]
    fn test_must_follow_suit_when_able() {
        let mut trick = Trick::new(2);
        trick.play(SeatId::new(1), Card::new(5, 1));

        assert_eq!(
            validate_play(&hand(), 1, &trick),
            Err(Violation::SuitNotFollowed)
        );
        assert_eq!(validate_play(&hand(), 0, &trick), Ok(Card::new(2, 1)));
    }

    #[test]
    fn test_void_in_called_suit_may_discard() {
        let mut trick = Trick::new(2);
        trick.play(SeatId::new(1), Card::new(5, 3));

        assert_eq!(validate_play(&hand(), 1, &trick), Ok(Card::new(4, 2)));
    }

    #[test]
    fn test_reason_strings() {
        assert_eq!(
            Violation::ReplayedCard.to_string(),
            "played card that was played before"
        );
        assert_eq!(
            Violation::SuitNotFollowed.to_string(),
            "did not play suite called for"
        );
    }
}
