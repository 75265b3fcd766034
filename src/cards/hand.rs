//! Fixed-slot hands.
//!
//! A hand has exactly `cards_per_player` slots for the lifetime of an
//! episode. Playing a card empties its slot in place, so slot indices (the
//! agent's action space) never shift.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;

/// Slot storage; hands of up to 16 cards stay inline.
pub type Slots = SmallVec<[Card; 16]>;

/// One seat's hand.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    slots: Slots,
}

impl Hand {
    /// A hand of `size` empty slots.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            slots: SmallVec::from_elem(Card::EMPTY, size),
        }
    }

    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            slots: SmallVec::from_slice(cards),
        }
    }

    /// Number of slots, played or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The card in `slot`, `None` if the index is out of range.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Card> {
        self.slots.get(slot).copied()
    }

    /// Take the card out of `slot`, leaving the sentinel behind.
    ///
    /// Returns `None` if the slot is out of range or already played.
    pub fn take(&mut self, slot: usize) -> Option<Card> {
        let entry = self.slots.get_mut(slot)?;
        if entry.is_empty() {
            return None;
        }
        Some(std::mem::replace(entry, Card::EMPTY))
    }

    /// All slots, in slot order.
    #[must_use]
    pub fn slots(&self) -> &[Card] {
        &self.slots
    }

    /// Cards still to be played.
    pub fn remaining(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().copied().filter(|c| !c.is_empty())
    }

    /// Number of cards still to be played.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining().count()
    }

    /// True once every slot has been played.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.slots.iter().all(|c| c.is_empty())
    }

    /// Does the hand still hold a card of `suit`?
    #[must_use]
    pub fn has_suit(&self, suit: u8) -> bool {
        self.slots.iter().any(|c| c.is_suit(suit))
    }

    /// Slots that may legally be played when `called_suit` must be followed.
    ///
    /// With no called suit, or when the hand is void in it, every unplayed
    /// slot is legal.
    #[must_use]
    pub fn legal_slots(&self, called_suit: Option<u8>) -> SmallVec<[usize; 16]> {
        let following: SmallVec<[usize; 16]> = match called_suit {
            Some(suit) => self.indices_where(|c| c.is_suit(suit)),
            None => SmallVec::new(),
        };
        if following.is_empty() {
            self.indices_where(|c| !c.is_empty())
        } else {
            following
        }
    }

    fn indices_where(&self, pred: impl Fn(&Card) -> bool) -> SmallVec<[usize; 16]> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, c)| pred(*c))
            .map(|(i, _)| i)
            .collect()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand() -> Hand {
        Hand::from_cards(&[Card::new(3, 1), Card::new(1, 2), Card::new(5, 1)])
    }

    #[test]
    fn test_take_empties_slot_in_place() {
        let mut h = hand();
        assert_eq!(h.take(1), Some(Card::new(1, 2)));
        assert_eq!(h.len(), 3);
        assert_eq!(h.get(1), Some(Card::EMPTY));
        assert_eq!(h.take(1), None);
        assert_eq!(h.take(9), None);
        assert_eq!(h.remaining_count(), 2);
    }

    #[test]
    fn test_exhaustion() {
        let mut h = hand();
        assert!(!h.is_exhausted());
        for slot in 0..3 {
            h.take(slot);
        }
        assert!(h.is_exhausted());
        assert!(Hand::empty(4).is_exhausted());
    }

    #[test]
    fn test_legal_slots_follow_suit() {
        let h = hand();
        assert_eq!(h.legal_slots(Some(1)).as_slice(), &[0, 2]);
        assert_eq!(h.legal_slots(Some(2)).as_slice(), &[1]);
    }

    #[test]
    fn test_legal_slots_when_void_or_leading() {
        let mut h = hand();
        h.take(1);
        assert_eq!(h.legal_slots(Some(2)).as_slice(), &[0, 2]);
        assert_eq!(h.legal_slots(None).as_slice(), &[0, 2]);
        assert!(!h.has_suit(2));
    }

    #[test]
    fn test_display() {
        let mut h = hand();
        h.take(0);
        assert_eq!(h.to_string(), "[-- 1/2 5/1]");
    }
}
