//! Evenly spaced sample grids
//!
//! A [`GridSpec`] is the serializable description of a range; a [`Grid`] is
//! the validated, immutable sequence of samples built from it.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SweepError};

/// Lower bound shared by both default ranges
pub const DEFAULT_START: f64 = 0.0001;

/// Default e_i grid: 1000 samples over [0.0001, 1.0]
pub const E_I_END: f64 = 1.0;
pub const E_I_COUNT: usize = 1000;

/// Default e_j sweep: 100 samples over [0.0001, 1.0001]
pub const E_J_END: f64 = 1.0001;
pub const E_J_COUNT: usize = 100;

/// Description of `count` evenly spaced samples over `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl GridSpec {
    pub const fn new(start: f64, end: f64, count: usize) -> Self {
        Self { start, end, count }
    }

    /// The e_i grid searched for every sweep value
    pub const fn e_i_default() -> Self {
        Self::new(DEFAULT_START, E_I_END, E_I_COUNT)
    }

    /// The e_j values swept by the orchestrator
    pub const fn e_j_default() -> Self {
        Self::new(DEFAULT_START, E_J_END, E_J_COUNT)
    }

    /// Distance between consecutive samples, `(end - start) / (count - 1)`.
    ///
    /// Zero for grids with fewer than two samples.
    pub fn spacing(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            (self.end - self.start) / (self.count - 1) as f64
        }
    }

    /// Check that this range can produce a grid. `name` labels the error.
    pub fn validate(&self, name: &'static str) -> Result<()> {
        let invalid = |reason| SweepError::InvalidGrid {
            name,
            start: self.start,
            end: self.end,
            count: self.count,
            reason,
        };

        if self.count == 0 {
            return Err(invalid("count must be at least 1"));
        }
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(invalid("bounds must be finite"));
        }
        if self.end < self.start {
            return Err(invalid("end is below start"));
        }
        Ok(())
    }

    /// Validate and build the sample sequence.
    pub fn build(&self, name: &'static str) -> Result<Grid> {
        self.validate(name)?;
        Ok(Grid {
            spec: *self,
            values: linspace(self.start, self.end, self.count),
        })
    }
}

/// `count` evenly spaced values from `start` to `end`, both inclusive.
///
/// Sample `k` is `start + k * step`; the final sample is pinned to `end` so
/// rounding never moves the upper bound. A single sample is `start`.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|k| start + k as f64 * step).collect();
            values[count - 1] = end;
            values
        }
    }
}

/// Immutable, non-empty, ascending sequence of samples
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    spec: GridSpec,
    values: Vec<f64>,
}

impl Grid {
    /// Wrap explicit samples. Returns an error if `values` is empty.
    pub fn from_values(name: &'static str, values: Vec<f64>) -> Result<Self> {
        let (Some(&start), Some(&end)) = (values.first(), values.last()) else {
            return Err(SweepError::InvalidGrid {
                name,
                start: f64::NAN,
                end: f64::NAN,
                count: 0,
                reason: "count must be at least 1",
            });
        };
        Ok(Self {
            spec: GridSpec::new(start, end, values.len()),
            values,
        })
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first(&self) -> f64 {
        self.values[0]
    }

    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    pub fn spacing(&self) -> f64 {
        self.spec.spacing()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }
}

impl std::ops::Index<usize> for Grid {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
