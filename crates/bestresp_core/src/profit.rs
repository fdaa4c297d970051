//! The profit function π(e_i, e_j) = √(e_i + e_j) − e_i²

/// Profit for a single pair of inputs.
///
/// Returns NaN when `e_i + e_j < 0`; callers let it propagate.
#[inline]
pub fn profit(e_i: f64, e_j: f64) -> f64 {
    (e_i + e_j).sqrt() - e_i * e_i
}

/// Partially apply `e_j`, giving π(·, e_j) as a one-argument objective.
pub fn profit_for(e_j: f64) -> impl Fn(f64) -> f64 + Copy {
    move |e_i| profit(e_i, e_j)
}

/// Evaluate π(·, e_j) elementwise over `e_i` values, preserving order and length.
pub fn profit_curve(e_i: &[f64], e_j: f64) -> Vec<f64> {
    e_i.iter().map(|&x| profit(x, e_j)).collect()
}
