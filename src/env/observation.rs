//! What a step hands back to the harness.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::SeatId;
use crate::rules::Violation;

/// The agent's view of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// The agent's hand slots, played slots as `Card::EMPTY`.
    pub hand: Vec<Card>,
    /// Current trick, rotated to start at the first seat that has played.
    pub trick: Vec<Card>,
    /// Tricks won per seat, in seat order.
    pub scores: Vec<u32>,
}

impl Observation {
    /// Hand as `[rank, suit, rank, suit, ...]`.
    #[must_use]
    pub fn flatten_hand(&self) -> Vec<u32> {
        flatten(&self.hand)
    }

    /// Trick as `[rank, suit, rank, suit, ...]`.
    #[must_use]
    pub fn flatten_trick(&self) -> Vec<u32> {
        flatten(&self.trick)
    }
}

fn flatten(cards: &[Card]) -> Vec<u32> {
    cards
        .iter()
        .flat_map(|c| [c.rank as u32, c.suit as u32])
        .collect()
}

/// A trick resolved during a step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickRecord {
    pub leader: SeatId,
    pub called_suit: u8,
    /// Cards in seat order.
    pub cards: Vec<Card>,
    pub winner: SeatId,
}

/// Diagnostics attached to a step.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    /// Set when the agent broke a rule.
    pub reason: Option<Violation>,
    /// Tricks completed during this step, oldest first.
    pub tricks: Vec<TrickRecord>,
}

/// Result of one `step`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult<O> {
    pub observation: O,
    pub reward: i64,
    pub done: bool,
    pub info: StepInfo,
}
