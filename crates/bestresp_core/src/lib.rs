//! Best-response sampling for the profit function π(e_i, e_j) = √(e_i + e_j) − e_i²
//!
//! For each value of the exogenous parameter e_j, the decision variable e_i is
//! searched over a fixed, evenly spaced grid and the sampled maximizer is
//! recorded. Sweeping e_j yields the best-response curve e_i*(e_j).
//!
//! ```ignore
//! use bestresp_core::{SweepConfig, run_sweep};
//!
//! let result = run_sweep(&SweepConfig::default(), |point| println!("{point}"))?;
//! assert_eq!(result.len(), 100);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod config;
pub mod error;
pub mod grid;
pub mod grid_search;
pub mod profit;
pub mod sweep;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::SweepConfig;
pub use error::SweepError;
pub use grid::{Grid, GridSpec, linspace};
pub use grid_search::{GridMaximum, argmax, best_response, maximize};
pub use profit::{profit, profit_curve, profit_for};
pub use sweep::{SweepPoint, SweepResult, run_sweep, sweep_grid};
