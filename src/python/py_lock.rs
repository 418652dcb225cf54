//! Lock game bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{BitColoring, LockConfig, TupleColoring, ValidationError};
use crate::graph::LocationSet;
use crate::lock::LockGame;

fn to_py_err(e: ValidationError) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

/// Python wrapper for LockConfig.
#[pyclass(name = "LockConfig")]
#[derive(Clone, Debug)]
pub struct PyLockConfig(pub LockConfig);

#[pymethods]
impl PyLockConfig {
    #[new]
    #[pyo3(signature = (holes = 4, hand = 2, colors = 2, seed = 42))]
    fn new(holes: usize, hand: usize, colors: usize, seed: u64) -> Self {
        Self(LockConfig { holes, hand, colors, seed })
    }

    /// Raise ValueError if the sizes are out of range.
    fn validate(&self) -> PyResult<()> {
        self.0.validate().map_err(to_py_err)
    }

    #[getter]
    fn holes(&self) -> usize {
        self.0.holes
    }

    #[getter]
    fn hand(&self) -> usize {
        self.0.hand
    }

    #[getter]
    fn colors(&self) -> usize {
        self.0.colors
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed
    }

    fn __repr__(&self) -> String {
        format!(
            "LockConfig(holes={}, hand={}, colors={}, seed={})",
            self.0.holes, self.0.hand, self.0.colors, self.0.seed
        )
    }
}

enum Model {
    Binary(LockGame<BitColoring>),
    Colored(LockGame<TupleColoring>),
}

/// Python wrapper for an expanded lock game.
#[pyclass(name = "LockGame")]
pub struct PyLockGame {
    model: Model,
}

impl PyLockGame {
    fn winning(&self) -> LocationSet {
        match &self.model {
            Model::Binary(game) => game.compute_winning_set(),
            Model::Colored(game) => game.compute_winning_set(),
        }
    }
}

#[pymethods]
impl PyLockGame {
    /// Expand a two-color lock.
    #[staticmethod]
    #[pyo3(signature = (holes, hand, seed = 42))]
    fn binary(holes: usize, hand: usize, seed: u64) -> PyResult<Self> {
        let game = LockGame::binary(LockConfig::binary(holes, hand).with_seed(seed)).map_err(to_py_err)?;
        Ok(Self {
            model: Model::Binary(game),
        })
    }

    /// Expand a lock over `colors` colors.
    #[staticmethod]
    #[pyo3(signature = (holes, hand, colors, seed = 42))]
    fn colored(holes: usize, hand: usize, colors: usize, seed: u64) -> PyResult<Self> {
        let config = LockConfig::colored(holes, hand, colors).with_seed(seed);
        let game = LockGame::colored(config).map_err(to_py_err)?;
        Ok(Self {
            model: Model::Colored(game),
        })
    }

    /// Build from a LockConfig; two colors selects the bit-packed model.
    #[staticmethod]
    fn from_config(config: &PyLockConfig) -> PyResult<Self> {
        let config = config.0.clone();
        let model = if config.colors == 2 {
            Model::Binary(LockGame::binary(config).map_err(to_py_err)?)
        } else {
            Model::Colored(LockGame::colored(config).map_err(to_py_err)?)
        };
        Ok(Self { model })
    }

    fn location_count(&self) -> usize {
        match &self.model {
            Model::Binary(game) => game.graph().len(),
            Model::Colored(game) => game.graph().len(),
        }
    }

    fn transition_count(&self) -> usize {
        match &self.model {
            Model::Binary(game) => game.graph().transition_count(),
            Model::Colored(game) => game.graph().transition_count(),
        }
    }

    /// True iff the adversary's winning set is empty.
    fn can_player_win(&self) -> bool {
        self.winning().is_empty()
    }

    /// Winning-set membership per location id, as a numpy bool array.
    fn winning_mask<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<bool>> {
        let winning = self.winning();
        let mask: Vec<bool> = (0..winning.universe() as u32)
            .map(|i| winning.contains(crate::graph::LocationId(i)))
            .collect();
        PyArray1::from_vec_bound(py, mask)
    }

    /// Human-readable location for an id.
    fn location(&self, id: u32) -> PyResult<String> {
        let id = crate::graph::LocationId(id);
        let out_of_range = || PyErr::new::<PyValueError, _>(format!("no location {id}"));
        match &self.model {
            Model::Binary(game) if id.index() < game.graph().len() => Ok(game.graph().location(id).to_string()),
            Model::Colored(game) if id.index() < game.graph().len() => Ok(game.graph().location(id).to_string()),
            _ => Err(out_of_range()),
        }
    }

    fn __repr__(&self) -> String {
        let config = match &self.model {
            Model::Binary(game) => game.config(),
            Model::Colored(game) => game.config(),
        };
        format!(
            "LockGame(holes={}, hand={}, colors={}, locations={})",
            config.holes,
            config.hand,
            config.colors,
            self.location_count()
        )
    }
}
