//! Cards, the deck and fixed-slot hands.

pub mod card;
pub mod deck;
pub mod hand;

pub use card::Card;
pub use deck::{deal_hands, Deck};
pub use hand::Hand;
