//! Grid search maximization
//!
//! Grid search exhaustively evaluates an objective at every sample of a
//! fixed grid. It is guaranteed to find the best sampled point, so the
//! returned maximizer is within half a grid spacing of the continuous one
//! for unimodal objectives.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::profit::profit_for;

/// The best sampled point found by a grid search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMaximum {
    /// Index of the maximizer within the grid
    pub index: usize,

    /// Grid value at `index`
    pub e_i: f64,

    /// Objective value at `index`
    pub profit: f64,
}

/// Index of the largest value, or `None` if there is no comparable value.
///
/// Ties resolve to the lowest index. NaN entries are never selected.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, &value) in values.iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((index, value)),
        }
    }

    best.map(|(index, _)| index)
}

/// Evaluate `objective` at every grid point and return the best one.
pub fn maximize<F>(grid: &Grid, objective: F) -> Option<GridMaximum>
where
    F: Fn(f64) -> f64,
{
    let values: Vec<f64> = grid.iter().map(|&x| objective(x)).collect();
    let index = argmax(&values)?;

    Some(GridMaximum {
        index,
        e_i: grid[index],
        profit: values[index],
    })
}

/// The e_i on `grid` that maximizes π(e_i, e_j).
pub fn best_response(grid: &Grid, e_j: f64) -> Option<GridMaximum> {
    maximize(grid, profit_for(e_j))
}
