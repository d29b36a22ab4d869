//! Alerts view rendering.
//!
//! Displays the alert panel: unacknowledged alerts first, then the
//! acknowledged group truncated to its display limit, insertion order
//! preserved within each group. The heading shows the full counts even
//! when the acknowledged group is truncated.

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::data::age::format_age;
use crate::data::ACKNOWLEDGED_DISPLAY_LIMIT;

/// Render the Alerts view.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(ref data) = app.data else {
        return;
    };

    if data.alerts.is_empty() {
        let block = Block::default()
            .title(" Recent Alerts ")
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border));
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from("  No recent alerts"),
            Line::styled(
                "  All patients are stable",
                Style::default().add_modifier(Modifier::DIM),
            ),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let visible = app.visible_alerts();
    let now = Utc::now();

    let header = Row::new(vec![
        Cell::from("Sev"),
        Cell::from("Patient"),
        Cell::from("Message"),
        Cell::from("When"),
        Cell::from("Ack"),
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = visible
        .iter()
        .map(|alert| {
            let severity_style = app.theme.severity_style(alert.severity);
            let row = Row::new(vec![
                Cell::from(alert.severity.symbol()).style(severity_style),
                Cell::from(alert.patient_name.clone()),
                Cell::from(alert.message.clone()),
                Cell::from(format_age(alert.timestamp, now)),
                Cell::from(if alert.acknowledged { "✓" } else { "" }),
            ]);
            if alert.acknowledged {
                row.style(Style::default().add_modifier(Modifier::DIM))
            } else {
                row
            }
        })
        .collect();

    let widths = [
        Constraint::Min(5),  // Sev
        Constraint::Fill(1), // Patient
        Constraint::Fill(3), // Message - gets the most space
        Constraint::Min(8),  // When
        Constraint::Min(3),  // Ack
    ];

    let selected_visual_index = app.selected_alert_index.min(visible.len().saturating_sub(1));

    // Heading shows the full counts; the acknowledged group itself is
    // truncated to the display limit
    let active = data.alerts.active_count();
    let acknowledged = data.alerts.acknowledged_count();
    let shown_acknowledged = acknowledged.min(ACKNOWLEDGED_DISPLAY_LIMIT);

    let filter_info = if app.filter_active {
        format!(" /{}_", app.filter_text)
    } else if !app.filter_text.is_empty() {
        format!(" /{}/ [c:clear]", app.filter_text)
    } else {
        String::new()
    };

    let title = if acknowledged > 0 {
        format!(
            " Recent Alerts ({} new) │ Acknowledged {} (showing {}){} ",
            active, acknowledged, shown_acknowledged, filter_info
        )
    } else {
        format!(" Recent Alerts ({} new){} ", active, filter_info)
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(selected_visual_index));

    frame.render_stateful_widget(table, area, &mut state);
}
