//! Python bindings for the Wizards environment.
//!
//! Exposes a gym-style interface returning plain tuples, so a Python training
//! loop can drive the Rust engine directly.
//!
//! # Quick Start
//!
//! ```python
//! import wizards_env
//!
//! env = wizards_env.WizardsEnv(suits=2, max_card=5, players=2, seed=42)
//! hand, trick, scores = env.reset()
//!
//! done = False
//! while not done:
//!     action = env.legal_actions()[0]
//!     (hand, trick, scores), reward, done, info = env.step(action)
//! ```

use pyo3::prelude::*;

mod py_env;

pub use py_env::*;

/// wizards_env: a trick-taking card game environment for RL training.
#[pymodule]
fn wizards_env(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyWizardsEnv>()?;
    Ok(())
}
