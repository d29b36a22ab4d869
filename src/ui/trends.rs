//! Trends view rendering.
//!
//! Draws the ward-wide heart rate and temperature trend charts, each with
//! its normal-range band marked by boundary lines.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::settings::NormalRange;
use crate::source::MetricPoint;

/// Render the Trends view with both charts side by side.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(ref data) = app.data else {
        return;
    };

    let chunks = Layout::horizontal([
        Constraint::Percentage(50),
        Constraint::Percentage(50),
    ])
    .split(area);

    render_chart(
        frame,
        app,
        chunks[0],
        "Heart Rate Trends",
        "bpm",
        &data.heart_rate_series,
        app.settings.heart_rate_range,
        Style::default().fg(app.theme.critical),
    );
    render_chart(
        frame,
        app,
        chunks[1],
        "Temperature Trends",
        "°F",
        &data.temperature_series,
        app.settings.temperature_range,
        Style::default().fg(app.theme.warning),
    );
}

#[allow(clippy::too_many_arguments)]
fn render_chart(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    unit: &str,
    series: &[MetricPoint],
    normal_range: NormalRange,
    line_style: Style,
) {
    let block = Block::default()
        .title(format!(
            " {} │ normal {:.0}-{:.0} {} ",
            title, normal_range.min, normal_range.max, unit
        ))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    if series.len() < 2 {
        let empty = Paragraph::new("\n  No trend data")
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let points: Vec<(f64, f64)> =
        series.iter().enumerate().map(|(i, p)| (i as f64, p.value)).collect();

    let x_max = (series.len() - 1) as f64;

    // Pad y bounds so the normal band is always visible
    let data_min = points.iter().map(|(_, v)| *v).fold(f64::MAX, f64::min);
    let data_max = points.iter().map(|(_, v)| *v).fold(f64::MIN, f64::max);
    let y_min = data_min.min(normal_range.min).floor() - 2.0;
    let y_max = data_max.max(normal_range.max).ceil() + 2.0;

    let band_low = [(0.0, normal_range.min), (x_max, normal_range.min)];
    let band_high = [(0.0, normal_range.max), (x_max, normal_range.max)];
    let band_style = Style::default().fg(app.theme.good).add_modifier(Modifier::DIM);

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(band_style)
            .data(&band_low),
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(band_style)
            .data(&band_high),
        Dataset::default()
            .name(unit.to_string())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(line_style)
            .data(&points),
    ];

    // Time labels from the first, middle, and last points
    let mid = series.len() / 2;
    let x_labels: Vec<String> = [0, mid, series.len() - 1]
        .iter()
        .map(|&i| series[i].timestamp.format("%H:%M").to_string())
        .collect();

    let y_labels: Vec<String> = [y_min, (y_min + y_max) / 2.0, y_max]
        .iter()
        .map(|v| format!("{:.0}", v))
        .collect();

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(app.theme.border))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(app.theme.border))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
