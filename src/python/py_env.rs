//! Environment bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{EnvError, WizardsConfig};
use crate::env::{Environment, Observation, WizardsEnv};

/// `(hand, trick, scores)` with cards as `(rank, suit)` tuples.
pub type PyObservation = (Vec<(u8, u8)>, Vec<(u8, u8)>, Vec<u32>);

fn to_py(obs: &Observation) -> PyObservation {
    (
        obs.hand.iter().map(|c| c.as_pair()).collect(),
        obs.trick.iter().map(|c| c.as_pair()).collect(),
        obs.scores.clone(),
    )
}

fn to_py_err(err: EnvError) -> PyErr {
    match err {
        EnvError::ActionOutOfRange { .. } => PyValueError::new_err(err.to_string()),
        EnvError::EpisodeFinished => PyRuntimeError::new_err(err.to_string()),
    }
}

/// Python wrapper for WizardsEnv.
#[pyclass(name = "WizardsEnv")]
pub struct PyWizardsEnv {
    env: WizardsEnv,
}

#[pymethods]
impl PyWizardsEnv {
    /// Create a new environment and deal the first episode.
    ///
    /// # Arguments
    /// - suits: Number of suits
    /// - max_card: Highest rank in each suit
    /// - players: Number of seats, including the agent
    /// - seed: RNG seed; drawn from the OS when omitted
    #[new]
    #[pyo3(signature = (suits = 2, max_card = 5, players = 2, seed = None))]
    fn new(suits: u8, max_card: u8, players: usize, seed: Option<u64>) -> PyResult<Self> {
        let config = WizardsConfig::new(suits, max_card, players)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let env = match seed {
            Some(seed) => WizardsEnv::with_seed(config, seed),
            None => WizardsEnv::new(config),
        };
        Ok(Self { env })
    }

    /// Re-seed the generator; returns the seed in use as a one-element list.
    #[pyo3(signature = (seed = None))]
    fn seed(&mut self, seed: Option<u64>) -> Vec<u64> {
        vec![self.env.seed(seed)]
    }

    /// Start a new episode.
    #[pyo3(signature = (seed = None))]
    fn reset(&mut self, seed: Option<u64>) -> PyObservation {
        to_py(&self.env.reset(seed))
    }

    /// Play the hand slot `action`.
    ///
    /// Returns `(observation, reward, done, info)`. `info["reason"]` is set
    /// when the agent broke a rule.
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: usize,
    ) -> PyResult<(PyObservation, i64, bool, Bound<'py, PyDict>)> {
        let result = self.env.step(action).map_err(to_py_err)?;

        let info = PyDict::new_bound(py);
        if let Some(violation) = result.info.reason {
            info.set_item("reason", violation.reason())?;
        }
        let winners: Vec<u8> = result.info.tricks.iter().map(|t| t.winner.0).collect();
        info.set_item("trick_winners", winners)?;

        Ok((to_py(&result.observation), result.reward, result.done, info))
    }

    /// Slots the agent may currently play.
    fn legal_actions(&self) -> Vec<usize> {
        self.env.legal_actions()
    }

    /// Print scores, hands and the current trick.
    fn render(&self) {
        self.env.render();
    }

    fn close(&mut self) {
        self.env.close();
    }

    #[getter]
    fn cards_per_player(&self) -> usize {
        self.env.config().cards_per_player()
    }

    #[getter]
    fn players(&self) -> usize {
        self.env.config().players()
    }

    fn __repr__(&self) -> String {
        let config = self.env.config();
        format!(
            "WizardsEnv(suits={}, max_card={}, players={}, finished={})",
            config.suits(),
            config.max_rank(),
            config.players(),
            self.env.is_finished()
        )
    }
}
