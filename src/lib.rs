//! # wizards-env
//!
//! A Wizards-style trick-taking card game environment for a single learning
//! agent playing against scripted opponents.
//!
//! ## Rules
//!
//! - The deck holds every `(rank, suit)` pair and is dealt evenly to all seats.
//! - The first card of a trick sets the called suit. Seats must follow the
//!   called suit when they can.
//! - A card of the called suit beats any other card; within a suit the higher
//!   rank wins. The winner scores a point and leads the next trick.
//! - The episode ends when the agent's hand is empty, or immediately when the
//!   agent breaks a rule.
//!
//! ## Modules
//!
//! - `core`: Seats, configuration, RNG, errors
//! - `cards`: Cards, the deck and fixed-slot hands
//! - `rules`: Trick state, suit-following validation, trick resolution
//! - `policy`: Scripted opponents and per-seat policy selection
//! - `env`: The reset/step environment and its spaces

pub mod core;
pub mod cards;
pub mod rules;
pub mod policy;
pub mod env;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, EnvError, GameRng, SeatId, SeatMap, WizardsConfig, WizardsConfigBuilder,
};

pub use crate::cards::{Card, Deck, Hand};

pub use crate::rules::{card_value, validate_play, Trick, Violation};

pub use crate::policy::{LeftmostLegal, OpponentPolicy, SeatPolicy};

pub use crate::env::{
    Discrete, Environment, MultiDiscrete, Observation, ObservationSpace, StepInfo, StepResult,
    TrickRecord, WizardsEnv,
};
