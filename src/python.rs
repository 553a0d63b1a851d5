//! Python bindings, built with `maturin develop --features python`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::HashMap;

use crate::cup::Cup;
use crate::distribution;
use crate::draw::{DrawResult, Drawer};
use crate::error::DrawError;
use crate::presentation::{presentation_steps, Slideshow};

fn to_py_err(err: DrawError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Draw games for a cup and return the JSON record.
#[pyfunction]
#[pyo3(name = "draw_games", signature = (cup, seed = None))]
fn py_draw_games(cup: &str, seed: Option<u64>) -> PyResult<String> {
    let result = Drawer::new(seed).draw_named(cup).map_err(to_py_err)?;
    serde_json::to_string(&result).map_err(|e| to_py_err(e.into()))
}

/// Internal cup names mapped to their display labels.
#[pyfunction]
#[pyo3(name = "cup_labels")]
fn py_cup_labels() -> HashMap<String, String> {
    Cup::ALL
        .into_iter()
        .map(|cup| (cup.name().to_string(), cup.label().to_string()))
        .collect()
}

/// Exact per-pool count probabilities as `[((c1, c2, c3), p), ...]`.
#[pyfunction]
#[pyo3(name = "pool_count_distribution")]
fn py_pool_count_distribution(cup: &str) -> PyResult<Vec<((usize, usize, usize), f64)>> {
    let cup: Cup = cup.parse().map_err(to_py_err)?;
    Ok(distribution::pool_count_distribution(cup)
        .into_iter()
        .map(|([c1, c2, c3], p)| ((c1, c2, c3), p))
        .collect())
}

/// Monte Carlo frequency of each game over `n_draws` draws.
#[pyfunction]
#[pyo3(name = "simulate_game_frequencies", signature = (cup, n_draws, seed = None))]
fn py_simulate_game_frequencies(cup: &str, n_draws: usize, seed: Option<u64>) -> PyResult<HashMap<String, f64>> {
    let cup: Cup = cup.parse().map_err(to_py_err)?;
    distribution::simulate_game_frequencies(cup, n_draws, seed).map_err(to_py_err)
}

/// Slides for a JSON draw record, as JSON. A bad record yields the error slide.
#[pyfunction]
#[pyo3(name = "presentation_steps")]
fn py_presentation_steps(record: &str) -> PyResult<String> {
    let steps = match serde_json::from_str::<DrawResult>(record).map_err(DrawError::from) {
        Ok(draw) => match draw.validate() {
            Ok(()) => presentation_steps(&draw),
            Err(e) => Slideshow::failed(&e).steps().to_vec(),
        },
        Err(e) => Slideshow::failed(&e).steps().to_vec(),
    };
    serde_json::to_string(&steps).map_err(|e| to_py_err(e.into()))
}

/// Python module definition
#[pymodule]
fn cup_draw(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Cup>()?;

    m.add_function(wrap_pyfunction!(py_draw_games, m)?)?;
    m.add_function(wrap_pyfunction!(py_cup_labels, m)?)?;
    m.add_function(wrap_pyfunction!(py_pool_count_distribution, m)?)?;
    m.add_function(wrap_pyfunction!(py_simulate_game_frequencies, m)?)?;
    m.add_function(wrap_pyfunction!(py_presentation_steps, m)?)?;

    m.add("DRAW_DATA_KEY", crate::constants::DRAW_DATA_KEY)?;
    m.add("FINAL_DRAW_COUNT", crate::constants::FINAL_DRAW_COUNT)?;

    Ok(())
}
