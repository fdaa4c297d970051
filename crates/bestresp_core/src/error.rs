use std::fmt;

/// Errors raised while building grids or running a sweep
#[derive(Debug, Clone, PartialEq)]
pub enum SweepError {
    /// A grid description cannot produce a usable sample range
    InvalidGrid {
        name: &'static str,
        start: f64,
        end: f64,
        count: usize,
        reason: &'static str,
    },
    /// Every profit value on the grid was NaN for this e_j
    NoFeasiblePoint { e_j: f64 },
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::InvalidGrid {
                name,
                start,
                end,
                count,
                reason,
            } => {
                write!(
                    f,
                    "invalid {name} grid (start={start}, end={end}, count={count}): {reason}"
                )
            }
            SweepError::NoFeasiblePoint { e_j } => {
                write!(f, "no grid point has a defined profit for e_j={e_j}")
            }
        }
    }
}

impl std::error::Error for SweepError {}

pub type Result<T> = std::result::Result<T, SweepError>;
