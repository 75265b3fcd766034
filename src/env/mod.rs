//! Environment interface for training harnesses.
//!
//! `Environment` is the reset/step contract a harness drives. `WizardsEnv`
//! implements it for the trick-taking game.

pub mod observation;
pub mod spaces;
pub mod wizards;

pub use observation::{Observation, StepInfo, StepResult, TrickRecord};
pub use spaces::{action_space, Discrete, MultiDiscrete, ObservationSpace};
pub use wizards::{WizardsEnv, VIOLATION_PENALTY, VIOLATION_TRICK_WEIGHT};

use crate::core::EnvError;

/// Reset/step contract for a single-agent environment.
///
/// ## Implementation Notes
///
/// - `reset`: re-seed first when a seed is given, then start a new episode
/// - `step`: consume one action; `Err` only for harness misuse, rule
///   breaking by the agent is reported through a terminal `StepResult`
/// - `render`: diagnostic text dump, not part of the learning contract
pub trait Environment {
    type Observation;

    /// Start a new episode and return its first observation.
    fn reset(&mut self, seed: Option<u64>) -> Self::Observation;

    /// Apply the agent's action.
    fn step(&mut self, action: usize) -> Result<StepResult<Self::Observation>, EnvError>;

    /// Print the table state.
    fn render(&self);

    /// Release resources. Nothing to release by default.
    fn close(&mut self) {}
}
