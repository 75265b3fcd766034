//! Error types.
//!
//! Rule violations by the agent are not errors: they end the episode and are
//! reported through `StepInfo`. These types cover invalid configuration and
//! misuse of the environment by the harness.

use thiserror::Error;

/// Invalid table parameters, detected when the config is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be at least 1")]
    Zero(&'static str),

    #[error("at most 255 players supported, got {0}")]
    TooManyPlayers(usize),

    #[error("{suits} suits x {max_rank} ranks cannot be dealt evenly to {players} players")]
    UnevenDeal {
        suits: u8,
        max_rank: u8,
        players: usize,
    },

    #[error("deck of {deck_size} cards leaves nothing to deal to {players} players")]
    EmptyHands { deck_size: usize, players: usize },
}

/// Misuse of the environment interface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("action {action} is outside the action space (0..{slots})")]
    ActionOutOfRange { action: usize, slots: usize },

    #[error("episode has finished; call reset before stepping again")]
    EpisodeFinished,
}
