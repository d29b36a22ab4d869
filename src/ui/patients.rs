//! Patients view rendering.
//!
//! Displays a table of all patients with vitals, status, and a short
//! heart-rate trend built from readings recorded across refreshes.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::source::Patient;

/// Sparkline characters (8 levels of height).
const SPARKLINE_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Column to sort by in the Patients view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    /// Sort by patient name alphabetically.
    #[default]
    Name,
    /// Sort by room.
    Room,
    /// Sort by heart rate.
    HeartRate,
    /// Sort by oxygen saturation.
    Oxygen,
    /// Sort by clinical status.
    Status,
}

impl SortColumn {
    /// Cycle to the next sort column.
    pub fn next(self) -> Self {
        match self {
            SortColumn::Name => SortColumn::Room,
            SortColumn::Room => SortColumn::HeartRate,
            SortColumn::HeartRate => SortColumn::Oxygen,
            SortColumn::Oxygen => SortColumn::Status,
            SortColumn::Status => SortColumn::Name,
        }
    }
}

/// Render the Patients view showing all patients in a sortable table.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(ref data) = app.data else {
        return;
    };

    // Get filtered and sorted patient indices
    let mut patients: Vec<(usize, &Patient)> =
        data.patients.iter().enumerate().filter(|(_, p)| app.matches_filter(&p.name)).collect();
    sort_patients_by(&mut patients, app.sort_column, app.sort_ascending);

    let header = Row::new(vec![
        Cell::from(format_header("Patient", SortColumn::Name, app)),
        Cell::from("Age"),
        Cell::from(format_header("Room", SortColumn::Room, app)),
        Cell::from(format_header("HR", SortColumn::HeartRate, app)),
        Cell::from("Temp"),
        Cell::from("BP"),
        Cell::from(format_header("SpO2", SortColumn::Oxygen, app)),
        Cell::from("Trend"),
        Cell::from("Updated"),
        Cell::from(format_header("Status", SortColumn::Status, app)),
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = patients
        .iter()
        .map(|(_, p)| {
            let status_style = app.theme.status_style(p.status);

            // Heart-rate sparkline from readings recorded across refreshes
            let sparkline = render_sparkline(&app.history.heart_rate_sparkline(&p.id));

            // Direction indicator for the last refresh
            let hr = match app.history.heart_rate_delta(&p.id) {
                Some(d) if d > 0.0 => format!("{:.0}↑", p.vitals.heart_rate),
                Some(d) if d < 0.0 => format!("{:.0}↓", p.vitals.heart_rate),
                _ => format!("{:.0}", p.vitals.heart_rate),
            };

            Row::new(vec![
                Cell::from(p.name.clone()),
                Cell::from(p.age.to_string()),
                Cell::from(p.room.clone()),
                Cell::from(hr),
                Cell::from(format!("{:.1}°F", p.vitals.temperature)),
                Cell::from(p.vitals.blood_pressure.clone()),
                Cell::from(format!("{:.0}%", p.vitals.oxygen_saturation)),
                Cell::from(sparkline),
                Cell::from(p.last_update.clone()),
                Cell::from(p.status.symbol()).style(status_style),
            ])
        })
        .collect();

    // Use Fill to distribute space evenly while respecting minimum widths
    let widths = [
        Constraint::Fill(3), // Patient - gets 3x share (largest)
        Constraint::Min(4),  // Age
        Constraint::Fill(1), // Room
        Constraint::Min(5),  // HR
        Constraint::Min(8),  // Temp
        Constraint::Min(8),  // BP
        Constraint::Min(5),  // SpO2
        Constraint::Min(8),  // Trend/Sparkline - fixed 8 for sparkline chars
        Constraint::Fill(1), // Updated
        Constraint::Min(6),  // Status - fixed minimum
    ];

    // selected_patient_index is treated as visual index directly
    let selected_visual_index = app.selected_patient_index.min(patients.len().saturating_sub(1));

    let sort_indicator = match app.sort_column {
        SortColumn::Name => "name",
        SortColumn::Room => "room",
        SortColumn::HeartRate => "hr",
        SortColumn::Oxygen => "spo2",
        SortColumn::Status => "status",
    };
    let sort_dir = if app.sort_ascending { "↑" } else { "↓" };

    // Build title with filter info
    let filter_info = if app.filter_active {
        format!(" /{}_", app.filter_text)
    } else if !app.filter_text.is_empty() {
        format!(" /{}/ [c:clear]", app.filter_text)
    } else {
        String::new()
    };

    // Show scroll position if there are items
    let position_info = if !patients.is_empty() {
        format!(" [{}/{}]", selected_visual_index + 1, patients.len())
    } else {
        String::new()
    };

    let title = format!(
        " Patients ({}/{}) [s:sort {}{}]{}{} ",
        patients.len(),
        data.patients.len(),
        sort_indicator,
        sort_dir,
        filter_info,
        position_info
    );

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

fn format_header(name: &str, col: SortColumn, app: &App) -> Span<'static> {
    if app.sort_column == col {
        let arrow = if app.sort_ascending { "↑" } else { "↓" };
        Span::raw(format!("{}{}", name, arrow))
    } else {
        Span::raw(name.to_string())
    }
}

/// Sort patients by the given column and direction (public for use in
/// selection mapping).
pub fn sort_patients_by(patients: &mut [(usize, &Patient)], column: SortColumn, ascending: bool) {
    patients.sort_by(|a, b| {
        let primary = match column {
            SortColumn::Name => a.1.name.cmp(&b.1.name),
            SortColumn::Room => a.1.room.cmp(&b.1.room),
            SortColumn::HeartRate => a.1.vitals.heart_rate.total_cmp(&b.1.vitals.heart_rate),
            SortColumn::Oxygen => {
                a.1.vitals.oxygen_saturation.total_cmp(&b.1.vitals.oxygen_saturation)
            }
            SortColumn::Status => (a.1.status as u8).cmp(&(b.1.status as u8)),
        };

        // Apply direction to primary comparison
        let primary = if ascending {
            primary
        } else {
            primary.reverse()
        };

        // Use secondary sort by name for stability when primary values are equal
        if primary == std::cmp::Ordering::Equal {
            a.1.name.cmp(&b.1.name)
        } else {
            primary
        }
    });
}

fn render_sparkline(data: &[u8]) -> String {
    if data.is_empty() {
        return "        ".to_string(); // 8 spaces placeholder
    }

    // Take last 8 values
    let values: Vec<u8> = data.iter().rev().take(8).rev().copied().collect();

    values.iter().map(|&v| SPARKLINE_CHARS[v.min(7) as usize]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{PatientStatus, VitalSigns};

    fn patient(name: &str, room: &str, heart_rate: f64, status: PatientStatus) -> Patient {
        Patient {
            id: name.to_string(),
            name: name.to_string(),
            age: 50,
            room: room.to_string(),
            status,
            last_update: "now".to_string(),
            vitals: VitalSigns {
                heart_rate,
                temperature: 98.6,
                blood_pressure: "120/80".to_string(),
                oxygen_saturation: 98.0,
            },
        }
    }

    #[test]
    fn test_sort_by_heart_rate_descending() {
        let a = patient("A", "1", 72.0, PatientStatus::Stable);
        let b = patient("B", "2", 125.0, PatientStatus::Critical);
        let c = patient("C", "3", 95.0, PatientStatus::Warning);
        let mut rows = vec![(0, &a), (1, &b), (2, &c)];

        sort_patients_by(&mut rows, SortColumn::HeartRate, false);
        let names: Vec<&str> = rows.iter().map(|(_, p)| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_sort_by_status_puts_critical_first() {
        let a = patient("A", "1", 72.0, PatientStatus::Good);
        let b = patient("B", "2", 125.0, PatientStatus::Critical);
        let mut rows = vec![(0, &a), (1, &b)];

        // Status enum orders Critical before Good; ascending puts it first
        sort_patients_by(&mut rows, SortColumn::Status, true);
        let names: Vec<&str> = rows.iter().map(|(_, p)| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_equal_keys_fall_back_to_name() {
        let a = patient("Zed", "1", 80.0, PatientStatus::Stable);
        let b = patient("Amy", "1", 80.0, PatientStatus::Stable);
        let mut rows = vec![(0, &a), (1, &b)];

        sort_patients_by(&mut rows, SortColumn::HeartRate, true);
        let names: Vec<&str> = rows.iter().map(|(_, p)| p.name.as_str()).collect();
        assert_eq!(names, vec!["Amy", "Zed"]);
    }

    #[test]
    fn test_sparkline_rendering() {
        assert_eq!(render_sparkline(&[]), "        ");
        assert_eq!(render_sparkline(&[0, 7]), "▁█");
        // Only the last 8 values are shown
        assert_eq!(render_sparkline(&[0, 1, 2, 3, 4, 5, 6, 7, 7]).chars().count(), 8);
    }
}
