//! Python bindings, built with the `python` feature.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::aggregation::Aggregation;
use crate::config::EngineConfig;
use crate::error::{ConfigError, OddsError};
use crate::odds::OddsEngine;

impl From<OddsError> for PyErr {
    fn from(e: OddsError) -> Self {
        PyValueError::new_err(e.to_string())
    }
}

impl From<ConfigError> for PyErr {
    fn from(e: ConfigError) -> Self {
        PyValueError::new_err(e.to_string())
    }
}

fn engine(aggregation: &str) -> PyResult<OddsEngine> {
    let aggregation: Aggregation = aggregation.parse().map_err(PyValueError::new_err)?;
    Ok(OddsEngine::new(EngineConfig::with_aggregation(aggregation))?)
}

/// Win probability of each team, given each team's member ratings.
#[pyfunction]
#[pyo3(name = "calculate_odds", signature = (roster, aggregation = "sum"))]
fn py_calculate_odds(roster: Vec<Vec<f64>>, aggregation: &str) -> PyResult<Vec<f64>> {
    Ok(engine(aggregation)?.odds(&roster)?)
}

/// Classical two-player Elo expected score.
#[pyfunction]
#[pyo3(name = "expected_score")]
fn py_expected_score(rating: f64, opponent: f64) -> f64 {
    crate::odds::expected_score(rating, opponent)
}

/// Percentage string with one decimal place.
#[pyfunction]
#[pyo3(name = "format_probability")]
fn py_format_probability(prob: f64) -> String {
    crate::matchup::format_probability(prob)
}

/// Simulated win counts per team.
#[pyfunction]
#[pyo3(name = "simulate_matchups", signature = (roster, n_simulations, seed = None, aggregation = "sum"))]
fn py_simulate_matchups(
    roster: Vec<Vec<f64>>,
    n_simulations: usize,
    seed: Option<u64>,
    aggregation: &str,
) -> PyResult<Vec<u64>> {
    let engine = engine(aggregation)?;
    Ok(crate::simulation::simulate_matchups(&engine, &roster, n_simulations, seed)?)
}

/// Python module definition
#[pymodule]
fn matchup_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    crate::logging::init_tracing();

    m.add_function(wrap_pyfunction!(py_calculate_odds, m)?)?;
    m.add_function(wrap_pyfunction!(py_expected_score, m)?)?;
    m.add_function(wrap_pyfunction!(py_format_probability, m)?)?;
    m.add_function(wrap_pyfunction!(py_simulate_matchups, m)?)?;

    m.add("ELO_BASE", crate::constants::ELO_BASE)?;
    m.add("ELO_SCALE", crate::constants::ELO_SCALE)?;
    m.add("DEFAULT_SLOTS", crate::constants::DEFAULT_SLOTS)?;

    Ok(())
}
