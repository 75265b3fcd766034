//! Table configuration.
//!
//! A table is described by the number of suits, the highest rank and the
//! number of seats. The whole deck must split evenly across the seats, which
//! is checked once when the config is built.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Validated table configuration.
///
/// Construct with [`WizardsConfig::builder`]; the fields are only readable
/// so a built config always satisfies the deal invariant. Deserializing goes
/// through the same validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WizardsConfigBuilder")]
pub struct WizardsConfig {
    suits: u8,
    max_rank: u8,
    players: usize,
}

impl WizardsConfig {
    /// Start building a config from the default table (2 suits, ranks 1-5, 2 players).
    pub fn builder() -> WizardsConfigBuilder {
        WizardsConfigBuilder::default()
    }

    /// Build a config directly from its three parameters.
    pub fn new(suits: u8, max_rank: u8, players: usize) -> Result<Self, ConfigError> {
        WizardsConfigBuilder::new()
            .suits(suits)
            .max_rank(max_rank)
            .players(players)
            .build()
    }

    /// Number of suits, labelled `1..=suits`.
    #[must_use]
    pub fn suits(&self) -> u8 {
        self.suits
    }

    /// Highest rank; ranks are `1..=max_rank`.
    #[must_use]
    pub fn max_rank(&self) -> u8 {
        self.max_rank
    }

    /// Number of seats, including the agent.
    #[must_use]
    pub fn players(&self) -> usize {
        self.players
    }

    /// Total number of distinct cards in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.suits as usize * self.max_rank as usize
    }

    /// Hand slots per seat.
    #[must_use]
    pub fn cards_per_player(&self) -> usize {
        self.deck_size() / self.players
    }

    /// Cards dealt at reset across all seats.
    #[must_use]
    pub fn dealt_cards(&self) -> usize {
        self.cards_per_player() * self.players
    }
}

impl Default for WizardsConfig {
    fn default() -> Self {
        Self {
            suits: 2,
            max_rank: 5,
            players: 2,
        }
    }
}

/// Builder for [`WizardsConfig`].
#[derive(Clone, Debug, Deserialize)]
pub struct WizardsConfigBuilder {
    suits: u8,
    max_rank: u8,
    players: usize,
}

impl Default for WizardsConfigBuilder {
    fn default() -> Self {
        let defaults = WizardsConfig::default();
        Self {
            suits: defaults.suits,
            max_rank: defaults.max_rank,
            players: defaults.players,
        }
    }
}

impl WizardsConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suits(mut self, suits: u8) -> Self {
        self.suits = suits;
        self
    }

    pub fn max_rank(mut self, max_rank: u8) -> Self {
        self.max_rank = max_rank;
        self
    }

    pub fn players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Validate and build the config.
    pub fn build(self) -> Result<WizardsConfig, ConfigError> {
        if self.suits == 0 {
            return Err(ConfigError::Zero("suits"));
        }
        if self.max_rank == 0 {
            return Err(ConfigError::Zero("max_rank"));
        }
        if self.players == 0 {
            return Err(ConfigError::Zero("players"));
        }
        if self.players > 255 {
            return Err(ConfigError::TooManyPlayers(self.players));
        }

        let deck_size = self.suits as usize * self.max_rank as usize;
        if deck_size < self.players {
            return Err(ConfigError::EmptyHands {
                deck_size,
                players: self.players,
            });
        }
        if deck_size % self.players != 0 {
            return Err(ConfigError::UnevenDeal {
                suits: self.suits,
                max_rank: self.max_rank,
                players: self.players,
            });
        }

        Ok(WizardsConfig {
            suits: self.suits,
            max_rank: self.max_rank,
            players: self.players,
        })
    }
}

impl TryFrom<WizardsConfigBuilder> for WizardsConfig {
    type Error = ConfigError;

    fn try_from(builder: WizardsConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
