//! Sweep configuration

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::{Grid, GridSpec};

/// Ranges for one best-response sweep.
///
/// The default is the e_i grid of 1000 samples over [0.0001, 1.0] searched
/// for each of 100 e_j values over [0.0001, 1.0001].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Grid of e_i values searched for every e_j
    pub grid: GridSpec,

    /// e_j values, iterated in ascending order
    pub sweep: GridSpec,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            grid: GridSpec::e_i_default(),
            sweep: GridSpec::e_j_default(),
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<()> {
        self.grid.validate("e_i")?;
        self.sweep.validate("e_j")
    }

    /// Build the e_i grid and the e_j sweep values.
    pub fn build(&self) -> Result<(Grid, Grid)> {
        Ok((self.grid.build("e_i")?, self.sweep.build("e_j")?))
    }
}
