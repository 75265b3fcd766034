//! Action and observation space declarations.
//!
//! These describe the numeric bounds a learning harness needs to size its
//! inputs and outputs. They are derived from the table config and never
//! influence the rules.

use serde::{Deserialize, Serialize};

use super::observation::Observation;
use crate::core::WizardsConfig;

/// `n` choices, `0..n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrete {
    pub n: usize,
}

impl Discrete {
    #[must_use]
    pub fn contains(&self, x: usize) -> bool {
        x < self.n
    }
}

/// A vector of independent discrete values; entry `i` lies in `0..nvec[i]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiDiscrete {
    pub nvec: Vec<u32>,
}

impl MultiDiscrete {
    /// `[max_rank + 1, suits + 1]` repeated once per card.
    fn cards(config: &WizardsConfig, count: usize) -> Self {
        let pair = [config.max_rank() as u32 + 1, config.suits() as u32 + 1];
        Self {
            nvec: pair.iter().copied().cycle().take(2 * count).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, values: &[u32]) -> bool {
        values.len() == self.nvec.len() && values.iter().zip(&self.nvec).all(|(v, n)| v < n)
    }
}

/// The three parts of an observation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationSpace {
    pub hand: MultiDiscrete,
    pub trick: MultiDiscrete,
    pub scores: MultiDiscrete,
}

impl ObservationSpace {
    #[must_use]
    pub fn new(config: &WizardsConfig) -> Self {
        Self {
            hand: MultiDiscrete::cards(config, config.cards_per_player()),
            trick: MultiDiscrete::cards(config, config.players()),
            scores: MultiDiscrete {
                nvec: vec![config.cards_per_player() as u32 + 1; config.players()],
            },
        }
    }

    #[must_use]
    pub fn contains(&self, obs: &Observation) -> bool {
        self.hand.contains(&obs.flatten_hand())
            && self.trick.contains(&obs.flatten_trick())
            && self.scores.contains(&obs.scores)
    }
}

/// One choice per hand slot.
#[must_use]
pub fn action_space(config: &WizardsConfig) -> Discrete {
    Discrete {
        n: config.cards_per_player(),
    }
}
