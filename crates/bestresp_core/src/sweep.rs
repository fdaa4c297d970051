//! Best-response sweep over e_j
//!
//! For each e_j in ascending order the e_i grid is searched for the profit
//! maximizer, and the result is reported and appended to the sweep result.

use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::SweepConfig;
use crate::error::{Result, SweepError};
use crate::grid::Grid;
use crate::grid_search::{GridMaximum, best_response};

/// One row of a sweep: the best response e_i to a given e_j
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub e_j: f64,
    pub e_i: f64,
    /// Profit at (e_i, e_j)
    pub profit: f64,
    /// Index of e_i within the searched grid
    pub index: usize,
}

impl SweepPoint {
    fn new(e_j: f64, maximum: GridMaximum) -> Self {
        Self {
            e_j,
            e_i: maximum.e_i,
            profit: maximum.profit,
            index: maximum.index,
        }
    }
}

impl fmt::Display for SweepPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "argmax for e_j={}: e_i={}", self.e_j, self.e_i)
    }
}

/// Ordered best responses, one per sweep value
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    grid: Grid,
    points: Vec<SweepPoint>,
}

impl SweepResult {
    fn with_capacity(grid: Grid, capacity: usize) -> Self {
        Self {
            grid,
            points: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, point: SweepPoint) {
        self.points.push(point);
    }

    /// The e_i grid every sweep value was searched over
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Swept e_j values in sweep order
    pub fn e_j_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.e_j).collect()
    }

    /// Best-response e_i values, index-aligned with [`Self::e_j_values`]
    pub fn best_responses(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.e_i).collect()
    }

    /// `(e_j, e_i*)` pairs of the best-response curve
    pub fn best_response_curve(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.e_j, p.e_i)).collect()
    }

    /// `(e_j, e_j)` pairs of the identity line over the same x values
    pub fn identity(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.e_j, p.e_j)).collect()
    }
}

/// Run a full sweep, calling `on_point` once per e_j in ascending order.
pub fn run_sweep<F>(config: &SweepConfig, on_point: F) -> Result<SweepResult>
where
    F: FnMut(&SweepPoint),
{
    config.validate()?;
    let (grid, sweep) = config.build()?;

    tracing::debug!(
        grid_points = grid.len(),
        sweep_points = sweep.len(),
        spacing = grid.spacing(),
        "Starting best-response sweep"
    );

    let result = sweep_grid(grid, &sweep, on_point)?;

    tracing::info!(points = result.len(), "Sweep complete");
    Ok(result)
}

/// Sweep explicit e_j values over an existing grid.
#[cfg(not(feature = "parallel"))]
pub fn sweep_grid<F>(grid: Grid, sweep: &Grid, mut on_point: F) -> Result<SweepResult>
where
    F: FnMut(&SweepPoint),
{
    let mut result = SweepResult::with_capacity(grid, sweep.len());

    for &e_j in sweep {
        let maximum =
            best_response(result.grid(), e_j).ok_or(SweepError::NoFeasiblePoint { e_j })?;
        let point = SweepPoint::new(e_j, maximum);
        tracing::debug!(e_j, e_i = point.e_i, profit = point.profit, "Best response");
        on_point(&point);
        result.push(point);
    }

    Ok(result)
}

/// Sweep explicit e_j values over an existing grid.
///
/// Maximizations run on the rayon pool; `on_point` still sees the points
/// sequentially in sweep order once all of them are available.
#[cfg(feature = "parallel")]
pub fn sweep_grid<F>(grid: Grid, sweep: &Grid, mut on_point: F) -> Result<SweepResult>
where
    F: FnMut(&SweepPoint),
{
    let maxima: Vec<Option<GridMaximum>> = sweep
        .as_slice()
        .par_iter()
        .map(|&e_j| best_response(&grid, e_j))
        .collect();

    let mut result = SweepResult::with_capacity(grid, sweep.len());

    for (&e_j, maximum) in sweep.iter().zip(maxima) {
        let maximum = maximum.ok_or(SweepError::NoFeasiblePoint { e_j })?;
        let point = SweepPoint::new(e_j, maximum);
        tracing::debug!(e_j, e_i = point.e_i, profit = point.profit, "Best response");
        on_point(&point);
        result.push(point);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSpec;

    #[test]
    fn test_point_display() {
        let point = SweepPoint {
            e_j: 0.0001,
            e_i: 0.5,
            profit: 0.457,
            index: 1,
        };
        assert_eq!(point.to_string(), "argmax for e_j=0.0001: e_i=0.5");
    }

    #[test]
    fn test_observer_sees_every_point_in_order() {
        let mut seen = Vec::new();
        let result = run_sweep(&SweepConfig::default(), |p| seen.push(p.e_j)).unwrap();

        assert_eq!(seen.len(), 100);
        assert_eq!(seen, result.e_j_values());
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_curves_are_aligned() {
        let result = run_sweep(&SweepConfig::default(), |_| {}).unwrap();
        let curve = result.best_response_curve();
        let identity = result.identity();

        assert_eq!(curve.len(), result.len());
        assert_eq!(identity.len(), result.len());
        for ((x, y), (ix, iy)) in curve.iter().zip(&identity) {
            assert_eq!(x, ix);
            assert_eq!(ix, iy);
            assert!(y.is_finite());
        }
    }

    #[test]
    fn test_invalid_config_fails_before_observer() {
        let config = SweepConfig {
            grid: GridSpec::new(1.0, 0.0, 10),
            ..Default::default()
        };
        let mut calls = 0;
        let err = run_sweep(&config, |_| calls += 1).unwrap_err();

        assert!(matches!(err, SweepError::InvalidGrid { name: "e_i", .. }));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_negative_sweep_value_has_no_feasible_point() {
        let config = SweepConfig {
            sweep: GridSpec::new(-5.0, -4.0, 3),
            ..Default::default()
        };
        let err = run_sweep(&config, |_| {}).unwrap_err();
        assert_eq!(err, SweepError::NoFeasiblePoint { e_j: -5.0 });
    }

    #[test]
    fn test_partially_negative_sweep_skips_undefined_points() {
        // For e_j = -0.5 only e_i >= 0.5 has a defined profit
        let config = SweepConfig {
            sweep: GridSpec::new(-0.5, -0.5, 1),
            ..Default::default()
        };
        let result = run_sweep(&config, |_| {}).unwrap();
        let point = result.points()[0];
        assert!(point.e_i >= 0.5);
        assert!(point.profit.is_finite());
    }
}
