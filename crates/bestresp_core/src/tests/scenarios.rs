//! Scenario tests with hand-checked expectations

use crate::config::SweepConfig;
use crate::grid::{Grid, GridSpec};
use crate::grid_search::best_response;
use crate::profit::profit_curve;
use crate::sweep::run_sweep;

/// Three-point grid at the smallest e_j picks the middle sample
#[test]
fn test_three_point_grid() {
    let grid = Grid::from_values("e_i", vec![0.0001, 0.5, 1.0]).unwrap();
    let e_j = 0.0001;

    let values = profit_curve(grid.as_slice(), e_j);
    assert!((values[0] - 0.01414).abs() < 1e-4);
    assert!((values[1] - 0.4572).abs() < 1e-3);
    assert!((values[2] - 0.00005).abs() < 1e-5);

    let best = best_response(&grid, e_j).unwrap();
    assert_eq!(best.index, 1);
    assert_eq!(best.e_i, 0.5);
}

/// At the top of the sweep the best response sits well below e_j
#[test]
fn test_largest_e_j_best_response_below_e_j() {
    let grid = GridSpec::e_i_default().build("e_i").unwrap();
    let e_j = 1.0001;

    let best = best_response(&grid, e_j).unwrap();
    assert!(best.e_i < e_j);
    assert!(best.e_i > 0.0001);
}

/// Default sweep yields exactly one finite best response per e_j
#[test]
fn test_default_sweep_length_and_finiteness() {
    let result = run_sweep(&SweepConfig::default(), |_| {}).unwrap();

    assert_eq!(result.len(), 100);
    assert_eq!(result.best_responses().len(), result.e_j_values().len());
    assert!(result.best_responses().iter().all(|e_i| !e_i.is_nan()));
    assert!(result.points().iter().all(|p| p.profit.is_finite()));
}

/// Report lines match the documented format
#[test]
fn test_report_lines() {
    let mut lines = Vec::new();
    let result = run_sweep(&SweepConfig::default(), |p| lines.push(p.to_string())).unwrap();

    assert_eq!(lines.len(), result.len());
    assert_eq!(lines[0], format!("argmax for e_j=0.0001: e_i={}", result.points()[0].e_i));
    for (line, point) in lines.iter().zip(result.points()) {
        assert!(line.starts_with("argmax for e_j="));
        assert!(line.ends_with(&format!(": e_i={}", point.e_i)));
    }
}

/// Best response falls as e_j rises: the sqrt term flattens relative to the penalty
#[test]
fn test_best_response_is_non_increasing() {
    let result = run_sweep(&SweepConfig::default(), |_| {}).unwrap();
    let responses = result.best_responses();

    assert!(responses.windows(2).all(|w| w[1] <= w[0]));
    assert!(responses[0] > *responses.last().unwrap());
}
