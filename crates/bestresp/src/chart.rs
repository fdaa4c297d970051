//! Chart rendering for sweep results.
//!
//! Renders the best-response curve against the identity line, and the
//! profit curve π(·, e_j) for a single sweep value.

use bestresp_core::{Grid, SweepPoint, SweepResult, profit_curve};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
};

/// Minimum axis span, so a flat series still gets a visible range
const MIN_SPAN: f64 = 1e-6;
/// Fraction of the data range added on each side of an axis
const PADDING: f64 = 0.05;

/// Padded `[min, max]` bounds covering every finite value.
///
/// Falls back to `[0, 1]` when there is no finite value.
pub fn axis_bounds<I>(values: I) -> [f64; 2]
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return [0.0, 1.0];
    }

    let padding = (max - min).max(MIN_SPAN) * PADDING;
    [min - padding, max + padding]
}

/// Low, middle and high tick labels for an axis
pub fn axis_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let [lo, hi] = bounds;
    vec![
        Span::raw(format!("{lo:.2}")),
        Span::raw(format!("{:.2}", f64::midpoint(lo, hi))),
        Span::raw(format!("{hi:.2}")),
    ]
}

fn chart_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title).bold())
}

fn render_empty(frame: &mut Frame, area: Rect, block: Block) {
    let paragraph = Paragraph::new(vec![Line::from("  No data to display.")]).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the best-response curve e_i*(e_j) and the identity line y = e_j.
pub fn render_best_response(frame: &mut Frame, area: Rect, result: &SweepResult) {
    let block = chart_block(" Best response ".to_string());
    if result.is_empty() {
        render_empty(frame, area, block);
        return;
    }

    let best = result.best_response_curve();
    let identity = result.identity();

    let x_bounds = axis_bounds(result.e_j_values());
    let y_bounds = axis_bounds(best.iter().chain(&identity).map(|&(_, y)| y));

    let datasets = vec![
        Dataset::default()
            .name("e_i*(e_j)")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&best),
        Dataset::default()
            .name("e_j")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&identity),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("e_j".dark_gray())
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title("e_i".dark_gray())
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        )
        .legend_position(Some(LegendPosition::TopLeft))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    frame.render_widget(chart, area);
}

/// Render π(·, e_j) over the grid, with the sampled argmax marked.
pub fn render_profit_curve(frame: &mut Frame, area: Rect, grid: &Grid, point: &SweepPoint) {
    let block = chart_block(format!(" Profit for e_j={} ", point.e_j));

    let curve: Vec<(f64, f64)> = grid
        .iter()
        .copied()
        .zip(profit_curve(grid.as_slice(), point.e_j))
        .filter(|(_, y)| y.is_finite())
        .collect();
    if curve.is_empty() {
        render_empty(frame, area, block);
        return;
    }
    let argmax = [(point.e_i, point.profit)];

    let x_bounds = axis_bounds(curve.iter().map(|&(x, _)| x));
    let y_bounds = axis_bounds(curve.iter().map(|&(_, y)| y));

    let datasets = vec![
        Dataset::default()
            .name("π(e_i)")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&curve),
        Dataset::default()
            .name(format!("argmax e_i={:.4}", point.e_i))
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Red))
            .data(&argmax),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("e_i".dark_gray())
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title("π".dark_gray())
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        )
        .legend_position(Some(LegendPosition::TopRight))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    frame.render_widget(chart, area);
}
