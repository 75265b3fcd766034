//! Seat behaviour: who decides each seat's play.
//!
//! - `SeatPolicy`: the agent's seat takes its play from outside, every other
//!   seat is scripted. Chosen by seat index alone.
//! - `OpponentPolicy`: how a scripted seat picks a slot.
//! - `LeftmostLegal`: the default script, the lowest-indexed legal slot.

use tracing::debug;

use crate::cards::{Card, Hand};
use crate::core::SeatId;
use crate::rules::Trick;

// =============================================================================
// Seat Policy
// =============================================================================

/// Where a seat's play comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeatPolicy {
    /// Play is the action passed to `step`.
    External,
    /// Play is computed by the opponent policy.
    Scripted,
}

impl SeatPolicy {
    /// The policy for `seat`.
    #[must_use]
    pub const fn for_seat(seat: SeatId) -> Self {
        if seat.is_agent() {
            SeatPolicy::External
        } else {
            SeatPolicy::Scripted
        }
    }
}

// =============================================================================
// Opponent Policy
// =============================================================================

/// Policy for choosing a scripted seat's play.
pub trait OpponentPolicy: Send + Sync {
    /// Choose a slot from `hand` given the trick's called suit.
    ///
    /// Must return a slot from `hand.legal_slots(called_suit)`, or `None` if
    /// the hand is exhausted.
    fn choose_slot(&self, hand: &Hand, called_suit: Option<u8>) -> Option<usize>;
}

/// Always plays the lowest-indexed legal slot.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeftmostLegal;

impl OpponentPolicy for LeftmostLegal {
    fn choose_slot(&self, hand: &Hand, called_suit: Option<u8>) -> Option<usize> {
        hand.legal_slots(called_suit).first().copied()
    }
}

/// Let `seat` play from `hand` into `trick` using `policy`.
///
/// Empties the chosen slot and records the card. If the trick was empty the
/// card's suit becomes the called suit. Returns `None` when the hand has
/// nothing left to play.
pub fn play_scripted<P: OpponentPolicy + ?Sized>(
    policy: &P,
    seat: SeatId,
    hand: &mut Hand,
    trick: &mut Trick,
) -> Option<Card> {
    let slot = policy.choose_slot(hand, trick.called_suit())?;
    let card = hand.take(slot)?;
    trick.play(seat, card);
    debug!(%seat, slot, %card, called_suit = ?trick.called_suit(), "scripted play");
    Some(card)
}
