//! Deck construction and dealing.

use tracing::debug;

use super::card::Card;
use super::hand::Hand;
use crate::core::{GameRng, SeatMap, WizardsConfig};

/// The full, ordered deck for a table: every `(rank, suit)` pair, rank-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the unshuffled deck for `config`.
    ///
    /// ```
    /// use wizards_env::cards::{Card, Deck};
    /// use wizards_env::core::WizardsConfig;
    ///
    /// let deck = Deck::new(&WizardsConfig::new(2, 2, 2).unwrap());
    /// assert_eq!(
    ///     deck.cards(),
    ///     &[Card::new(1, 1), Card::new(1, 2), Card::new(2, 1), Card::new(2, 2)]
    /// );
    /// ```
    #[must_use]
    pub fn new(config: &WizardsConfig) -> Self {
        let cards = (1..=config.max_rank())
            .flat_map(|rank| (1..=config.suits()).map(move |suit| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Permute the deck uniformly at random.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Deal `cards_per_player` cards to each seat, row-major.
    ///
    /// Seat 0 gets the first `cards_per_player` cards, seat 1 the next, and
    /// so on. Cards past the dealt portion are discarded. The deck is
    /// consumed so no hand shares storage with it.
    #[must_use]
    pub fn deal(self, config: &WizardsConfig) -> SeatMap<Hand> {
        let per_seat = config.cards_per_player();
        let hands = SeatMap::new(config.players(), |seat| {
            let start = seat.index() * per_seat;
            Hand::from_cards(&self.cards[start..start + per_seat])
        });
        debug!(
            players = config.players(),
            cards_per_player = per_seat,
            discarded = self.cards.len() - config.dealt_cards(),
            "dealt hands"
        );
        hands
    }
}

/// Build, shuffle and deal a fresh set of hands.
pub fn deal_hands(config: &WizardsConfig, rng: &mut GameRng) -> SeatMap<Hand> {
    let mut deck = Deck::new(config);
    deck.shuffle(rng);
    deck.deal(config)
}
