//! Game rules: trick state, suit-following and trick resolution.
//!
//! These are pure functions over hands and tricks; sequencing of seats
//! lives in the environment.

pub mod trick;
pub mod validator;

pub use trick::{card_value, Trick};
pub use validator::{validate_play, Violation};
