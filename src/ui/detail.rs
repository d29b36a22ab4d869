//! Detail overlay rendering.
//!
//! Displays a modal overlay with detailed information about the selected
//! patient: vitals, status, and the alerts referencing them.

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::data::age::format_age;

/// Minimum width required for the detail overlay to render properly.
const MIN_OVERLAY_WIDTH: u16 = 50;
/// Minimum height required for the detail overlay to render properly.
const MIN_OVERLAY_HEIGHT: u16 = 16;

/// Render the patient detail as a modal overlay.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Skip rendering if terminal is too small for the overlay
    if area.width < MIN_OVERLAY_WIDTH || area.height < MIN_OVERLAY_HEIGHT {
        return;
    }

    let Some(ref data) = app.data else {
        return;
    };

    // Get the actual patient from the visual index
    let Some(raw_index) = app.get_selected_patient_raw_index() else {
        return;
    };
    let Some(patient) = data.patients.get(raw_index) else {
        return;
    };

    // Calculate overlay size - use most of the screen
    let overlay_width = (area.width * 95 / 100).clamp(MIN_OVERLAY_WIDTH, 100);
    let overlay_height = (area.height * 90 / 100).clamp(MIN_OVERLAY_HEIGHT, 40);

    let x = area.x + (area.width.saturating_sub(overlay_width)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_height)) / 2;
    let overlay_area = Rect::new(x, y, overlay_width, overlay_height);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    // Split overlay into header, vitals, alerts, footer
    let chunks = Layout::vertical([
        Constraint::Length(5), // Header with patient info
        Constraint::Length(4), // Vitals
        Constraint::Min(6),    // Alerts for this patient
        Constraint::Length(1), // Footer
    ])
    .split(overlay_area);

    // ===== HEADER SECTION =====
    let status_style = app.theme.status_style(patient.status);

    let header_lines = vec![
        Line::from(vec![Span::styled(
            format!(" {} ", patient.name),
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::raw(" Age: "),
            Span::styled(
                patient.age.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("    Room: "),
            Span::styled(
                patient.room.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("    Status: "),
            Span::styled(
                format!("{} {}", patient.status.symbol(), patient.status.label()),
                status_style.add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("    Updated: {}", patient.last_update)),
        ]),
    ];

    let header_block = Block::default()
        .title(" Patient Detail ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let header = Paragraph::new(header_lines).block(header_block);
    frame.render_widget(header, chunks[0]);

    // ===== VITALS SECTION =====
    let vitals = &patient.vitals;
    let vitals_lines = vec![Line::from(vec![
        Span::raw(" HR: "),
        Span::styled(
            format!("{:.0} bpm", vitals.heart_rate),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Temp: "),
        Span::styled(
            format!("{:.1}°F", vitals.temperature),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   BP: "),
        Span::styled(
            vitals.blood_pressure.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   SpO2: "),
        Span::styled(
            format!("{:.0}%", vitals.oxygen_saturation),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])];

    let vitals_block = Block::default()
        .title(" Vitals ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    frame.render_widget(Paragraph::new(vitals_lines).block(vitals_block), chunks[1]);

    // ===== ALERTS SECTION =====
    let patient_alerts: Vec<_> = data.alerts.for_patient(&patient.id).collect();
    let now = Utc::now();

    if !patient_alerts.is_empty() {
        let alerts_header = Row::new(vec![
            Cell::from("Sev"),
            Cell::from("Message"),
            Cell::from("When"),
            Cell::from("Ack"),
        ])
        .height(1)
        .style(app.theme.header);

        let alerts_rows: Vec<Row> = patient_alerts
            .iter()
            .map(|a| {
                let severity_style = app.theme.severity_style(a.severity);
                Row::new(vec![
                    Cell::from(a.severity.symbol()).style(severity_style),
                    Cell::from(a.message.clone()),
                    Cell::from(format_age(a.timestamp, now)),
                    Cell::from(if a.acknowledged { "✓" } else { "" }),
                ])
            })
            .collect();

        let alerts_widths = [
            Constraint::Length(6),  // Sev
            Constraint::Fill(3),    // Message
            Constraint::Length(10), // When
            Constraint::Length(4),  // Ack
        ];

        let alerts_table = Table::new(alerts_rows, alerts_widths).header(alerts_header).block(
            Block::default()
                .title(format!(" Alerts ({}) ", patient_alerts.len()))
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        );

        frame.render_widget(alerts_table, chunks[2]);
    } else {
        let empty_block = Block::default()
            .title(" Alerts (0) ")
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border));
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No alerts for this patient",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ])
        .block(empty_block);
        frame.render_widget(empty, chunks[2]);
    }

    // ===== FOOTER =====
    let footer = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc to close ",
        Style::default().add_modifier(Modifier::DIM),
    )]));
    frame.render_widget(footer, chunks[3]);
}
