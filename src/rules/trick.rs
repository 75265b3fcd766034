//! Trick state and trick resolution.
//!
//! A trick holds one slot per seat. The first card played sets the called
//! suit and the trick leader. Any card of the called suit outranks any card
//! of another suit; within a suit the higher rank wins.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{SeatId, SeatMap};

/// Ranking value of `card` in a trick whose called suit is `called_suit`.
///
/// `rank + max_rank` for cards of the called suit, plain `rank` otherwise.
#[must_use]
pub fn card_value(card: Card, called_suit: u8, max_rank: u8) -> u16 {
    let bonus = if card.suit == called_suit { max_rank as u16 } else { 0 };
    card.rank as u16 + bonus
}

/// The cards played so far in the current trick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    cards: SeatMap<Card>,
    called_suit: Option<u8>,
    leader: Option<SeatId>,
}

impl Trick {
    /// An empty trick for `seat_count` seats.
    #[must_use]
    pub fn new(seat_count: usize) -> Self {
        Self {
            cards: SeatMap::with_value(seat_count, Card::EMPTY),
            called_suit: None,
            leader: None,
        }
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.cards.seat_count()
    }

    /// Per-seat plays; `Card::EMPTY` for seats that have not played.
    #[must_use]
    pub fn cards(&self) -> &SeatMap<Card> {
        &self.cards
    }

    /// The suit that must be followed, once someone has played.
    #[must_use]
    pub fn called_suit(&self) -> Option<u8> {
        self.called_suit
    }

    /// The seat that played first in this trick.
    #[must_use]
    pub fn leader(&self) -> Option<SeatId> {
        self.leader
    }

    #[must_use]
    pub fn has_played(&self, seat: SeatId) -> bool {
        !self.cards[seat].is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leader.is_none()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.values().all(|c| !c.is_empty())
    }

    /// The seat whose turn it is, or `None` once the trick is complete.
    ///
    /// `default_leader` leads an empty trick.
    #[must_use]
    pub fn next_to_act(&self, default_leader: SeatId) -> Option<SeatId> {
        let start = self.leader.unwrap_or(default_leader);
        start
            .turn_order(self.seat_count())
            .find(|&seat| !self.has_played(seat))
    }

    /// Record `card` for `seat`. The first play sets the called suit.
    pub fn play(&mut self, seat: SeatId, card: Card) {
        debug_assert!(!card.is_empty(), "cannot play the empty card");
        debug_assert!(!self.has_played(seat), "{seat} already played this trick");

        if self.leader.is_none() {
            self.leader = Some(seat);
            self.called_suit = Some(card.suit);
        }
        self.cards[seat] = card;
    }

    /// The winning seat, or `None` if nobody has played.
    ///
    /// Ties are broken in favour of the seat that played earliest. With a
    /// deck of distinct cards a tie can only occur between off-suit cards,
    /// which never beat the leader's card.
    #[must_use]
    pub fn winner(&self, max_rank: u8) -> Option<SeatId> {
        let leader = self.leader?;
        let called = self.called_suit?;

        let mut best: Option<(SeatId, u16)> = None;
        for seat in leader.turn_order(self.seat_count()) {
            let card = self.cards[seat];
            if card.is_empty() {
                continue;
            }
            let value = card_value(card, called, max_rank);
            if best.map_or(true, |(_, top)| value > top) {
                best = Some((seat, value));
            }
        }
        best.map(|(seat, _)| seat)
    }

    /// Trick state as seen from the first seat (lowest index) that has
    /// played; unrotated when nobody has played.
    #[must_use]
    pub fn rotated_view(&self) -> Vec<Card> {
        let first = self
            .cards
            .iter()
            .find(|(_, c)| !c.is_empty())
            .map_or(SeatId::AGENT, |(seat, _)| seat);
        self.cards.rotated_from(first)
    }

    /// Empty the trick for the next round of play.
    pub fn clear(&mut self) {
        self.cards.fill(Card::EMPTY);
        self.called_suit = None;
        self.leader = None;
    }
}
