//! Core types: seats, configuration, RNG and errors.
//!
//! These are the building blocks shared by the card, rules and environment
//! layers.

pub mod config;
pub mod error;
pub mod rng;
pub mod seat;

pub use config::{WizardsConfig, WizardsConfigBuilder};
pub use error::{ConfigError, EnvError};
pub use rng::GameRng;
pub use seat::{SeatId, SeatMap};
