//! Application state and navigation logic.

use anyhow::Result;

use crate::data::{DashboardData, History};
use crate::settings::Settings;
use crate::source::{Alert, DataSource};
use crate::ui::patients::SortColumn;
use crate::ui::Theme;

/// The current view/tab in the TUI.
///
/// Patient detail is shown as an overlay (controlled by
/// `App::show_detail_overlay`) rather than as a separate view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Table of all patients with vitals and status.
    Patients,
    /// Alerts needing attention, with acknowledge/dismiss actions.
    Alerts,
    /// Ward-wide heart rate and temperature trend charts.
    Trends,
}

impl View {
    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::Patients => View::Alerts,
            View::Alerts => View::Trends,
            View::Trends => View::Patients,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        match self {
            View::Patients => View::Trends,
            View::Alerts => View::Patients,
            View::Trends => View::Alerts,
        }
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Patients => "Patients",
            View::Alerts => "Alerts",
            View::Trends => "Trends",
        }
    }
}

/// Saved state for returning to a previous view.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// The view that was active.
    pub view: View,
    /// The selected patient index in that view.
    pub selected_patient_index: usize,
    /// The selected alert index (for the Alerts view).
    pub selected_alert_index: usize,
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub show_help: bool,
    pub show_detail_overlay: bool,

    // Data source
    source: Box<dyn DataSource>,
    pub data: Option<DashboardData>,
    pub history: History,
    pub load_error: Option<String>,
    pub settings: Settings,

    // Navigation state
    pub selected_patient_index: usize,
    pub selected_alert_index: usize,
    pub view_stack: Vec<ViewState>,

    // Sorting (Patients view)
    pub sort_column: SortColumn,
    pub sort_ascending: bool,

    // Search/filter
    pub filter_text: String,
    pub filter_active: bool,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, std::time::Instant)>,
}

impl App {
    /// Create a new App with the given data source and settings.
    pub fn new(source: Box<dyn DataSource>, settings: Settings) -> Self {
        Self {
            running: true,
            current_view: View::Patients,
            show_help: false,
            show_detail_overlay: false,
            source,
            data: None,
            history: History::new(),
            load_error: None,
            settings,
            selected_patient_index: 0,
            selected_alert_index: 0,
            view_stack: Vec::new(),
            sort_column: SortColumn::default(),
            sort_ascending: true,
            filter_text: String::new(),
            filter_active: false,
            theme: Theme::auto_detect(),
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, std::time::Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < std::time::Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Push current state to stack and navigate to a new view.
    #[allow(dead_code)]
    pub fn push_view(&mut self, view: View) {
        self.view_stack.push(ViewState {
            view: self.current_view,
            selected_patient_index: self.selected_patient_index,
            selected_alert_index: self.selected_alert_index,
        });
        self.current_view = view;
        self.selected_alert_index = 0;
    }

    /// Pop the view stack and restore previous state.
    pub fn pop_view(&mut self) -> bool {
        if let Some(state) = self.view_stack.pop() {
            self.current_view = state.view;
            self.selected_patient_index = state.selected_patient_index;
            self.selected_alert_index = state.selected_alert_index;
            true
        } else {
            false
        }
    }

    /// Get breadcrumb trail for current navigation.
    pub fn breadcrumb(&self) -> String {
        let mut parts: Vec<&str> = self.view_stack.iter().map(|s| s.view.label()).collect();
        parts.push(self.current_view.label());
        parts.join(" > ")
    }

    /// Poll the data source for a new snapshot.
    ///
    /// Returns Ok(true) if new data was received, Ok(false) if no new data,
    /// or Err if there was an error.
    pub fn reload_data(&mut self) -> Result<bool> {
        // Check for errors from the source
        if let Some(err) = self.source.error() {
            self.load_error = Some(err.to_string());
            return Ok(false);
        }

        // Poll for new data
        if let Some(snapshot) = self.source.poll() {
            let data = DashboardData::from_snapshot(snapshot);

            // Record history before updating
            self.history.record(&data);
            self.data = Some(data);
            self.load_error = None;
            self.clamp_selections();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Force the source to produce a fresh snapshot on the next poll and
    /// poll it immediately (manual refresh).
    pub fn force_refresh(&mut self) -> Result<bool> {
        self.source.invalidate();
        self.reload_data()
    }

    fn clamp_selections(&mut self) {
        if let Some(ref data) = self.data {
            if self.selected_patient_index >= data.patients.len() {
                self.selected_patient_index = data.patients.len().saturating_sub(1);
            }
            let alert_count = self.visible_alert_count();
            if self.selected_alert_index >= alert_count {
                self.selected_alert_index = alert_count.saturating_sub(1);
            }
        }
    }

    /// Switch to the next view (cycles Patients → Alerts → Trends).
    pub fn next_view(&mut self) {
        self.current_view = self.current_view.next();
        self.selected_alert_index = 0;
    }

    /// Switch to the previous view (cycles Trends → Alerts → Patients).
    pub fn prev_view(&mut self) {
        self.current_view = self.current_view.prev();
        self.selected_alert_index = 0;
    }

    /// Switch to a specific view.
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
        self.selected_alert_index = 0;
    }

    /// Move selection down by one item.
    pub fn select_next(&mut self) {
        self.select_next_n(1);
    }

    /// Move selection up by one item.
    pub fn select_prev(&mut self) {
        self.select_prev_n(1);
    }

    /// Move selection down by n items.
    pub fn select_next_n(&mut self, n: usize) {
        match self.current_view {
            View::Patients => {
                // Navigate by visual position in filtered/sorted list
                let max = self.filtered_patient_count().saturating_sub(1);
                self.selected_patient_index = (self.selected_patient_index + n).min(max);
            }
            View::Alerts => {
                let max = self.visible_alert_count().saturating_sub(1);
                self.selected_alert_index = (self.selected_alert_index + n).min(max);
            }
            View::Trends => {}
        }
    }

    /// Move selection up by n items.
    pub fn select_prev_n(&mut self, n: usize) {
        match self.current_view {
            View::Patients => {
                self.selected_patient_index = self.selected_patient_index.saturating_sub(n);
            }
            View::Alerts => {
                self.selected_alert_index = self.selected_alert_index.saturating_sub(n);
            }
            View::Trends => {}
        }
    }

    /// Jump to the first item in the list.
    pub fn select_first(&mut self) {
        match self.current_view {
            View::Patients => self.selected_patient_index = 0,
            View::Alerts => self.selected_alert_index = 0,
            View::Trends => {}
        }
    }

    /// Jump to the last item in the list.
    pub fn select_last(&mut self) {
        match self.current_view {
            View::Patients => {
                self.selected_patient_index = self.filtered_patient_count().saturating_sub(1);
            }
            View::Alerts => {
                self.selected_alert_index = self.visible_alert_count().saturating_sub(1);
            }
            View::Trends => {}
        }
    }

    /// Get count of patients after applying the filter.
    pub fn filtered_patient_count(&self) -> usize {
        let Some(ref data) = self.data else {
            return 0;
        };
        data.patients.iter().filter(|p| self.matches_filter(&p.name)).count()
    }

    /// Get the actual patient index from the visual index (after
    /// sorting/filtering).
    ///
    /// Returns the raw index into `data.patients` for the currently selected
    /// visual row. The Patients view applies sorting and filtering, so the
    /// visual row index differs from the underlying data index.
    pub fn get_selected_patient_raw_index(&self) -> Option<usize> {
        let data = self.data.as_ref()?;

        let mut patients: Vec<(usize, &crate::source::Patient)> = data
            .patients
            .iter()
            .enumerate()
            .filter(|(_, p)| self.matches_filter(&p.name))
            .collect();
        crate::ui::patients::sort_patients_by(&mut patients, self.sort_column, self.sort_ascending);

        patients.get(self.selected_patient_index).map(|(idx, _)| *idx)
    }

    /// Alerts currently visible in the panel, in display order.
    ///
    /// Unacknowledged first, then at most
    /// [`crate::data::ACKNOWLEDGED_DISPLAY_LIMIT`] acknowledged ones, with
    /// the filter applied on patient name and message.
    pub fn visible_alerts(&self) -> Vec<&Alert> {
        let Some(ref data) = self.data else {
            return Vec::new();
        };
        data.alerts
            .display_order_truncated()
            .into_iter()
            .filter(|a| self.matches_alert_filter(a))
            .collect()
    }

    fn visible_alert_count(&self) -> usize {
        self.visible_alerts().len()
    }

    /// Id of the alert under the cursor in the Alerts view.
    pub fn selected_alert_id(&self) -> Option<String> {
        self.visible_alerts()
            .get(self.selected_alert_index)
            .map(|a| a.id.clone())
    }

    /// Acknowledge the alert under the cursor.
    ///
    /// A no-op when nothing is selected or the view has no alerts.
    pub fn acknowledge_selected(&mut self) {
        let Some(id) = self.selected_alert_id() else {
            return;
        };
        let mut message = None;
        if let Some(ref mut data) = self.data {
            data.acknowledge(&id);
            message = Some(match data.alerts.get(&id) {
                Some(alert) => format!("Acknowledged alert for {}", alert.patient_name),
                None => "Acknowledged alert".to_string(),
            });
        }
        if let Some(msg) = message {
            self.set_status_message(msg);
        }
        self.clamp_selections();
    }

    /// Dismiss the alert under the cursor, removing it from the store.
    pub fn dismiss_selected(&mut self) {
        let Some(id) = self.selected_alert_id() else {
            return;
        };
        if let Some(ref mut data) = self.data {
            data.dismiss(&id);
        }
        self.set_status_message("Dismissed alert".to_string());
        self.clamp_selections();
    }

    /// Open the detail overlay for the currently selected patient.
    pub fn enter_detail(&mut self) {
        if self.current_view == View::Patients {
            self.show_detail_overlay = true;
        }
    }

    /// Navigate back: close overlay first, then pop view stack, then go to
    /// Patients.
    pub fn go_back(&mut self) {
        // First close any overlays
        if self.show_detail_overlay {
            self.show_detail_overlay = false;
            return;
        }
        // Then try to pop the view stack
        if !self.pop_view() {
            // If stack is empty, go to the patients view
            if self.current_view != View::Patients {
                self.current_view = View::Patients;
            }
        }
    }

    /// Close the detail overlay if open.
    pub fn close_overlay(&mut self) {
        self.show_detail_overlay = false;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Cycle to the next sort column (Patients view).
    pub fn cycle_sort(&mut self) {
        if self.current_view == View::Patients {
            self.sort_column = self.sort_column.next();
        }
    }

    /// Toggle sort direction between ascending and descending.
    pub fn toggle_sort_direction(&mut self) {
        if self.current_view == View::Patients {
            self.sort_ascending = !self.sort_ascending;
        }
    }

    /// Enter filter input mode (starts capturing keystrokes for search).
    pub fn start_filter(&mut self) {
        self.filter_active = true;
    }

    /// Exit filter input mode without clearing the filter text.
    pub fn cancel_filter(&mut self) {
        self.filter_active = false;
    }

    /// Clear the filter text and exit filter mode.
    pub fn clear_filter(&mut self) {
        self.filter_text.clear();
        self.filter_active = false;
    }

    /// Append a character to the filter text.
    pub fn filter_push(&mut self, c: char) {
        self.filter_text.push(c);
    }

    /// Remove the last character from the filter text.
    pub fn filter_pop(&mut self) {
        self.filter_text.pop();
    }

    /// Check if a patient name matches the current filter.
    pub fn matches_filter(&self, name: &str) -> bool {
        if self.filter_text.is_empty() {
            return true;
        }
        name.to_lowercase().contains(&self.filter_text.to_lowercase())
    }

    /// Check if an alert matches the current filter (patient name or
    /// message).
    pub fn matches_alert_filter(&self, alert: &Alert) -> bool {
        if self.filter_text.is_empty() {
            return true;
        }
        let search = self.filter_text.to_lowercase();
        alert.patient_name.to_lowercase().contains(&search)
            || alert.message.to_lowercase().contains(&search)
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export current state (stats, patients, alerts) to a JSON file.
    pub fn export_state(&self, path: &std::path::Path) -> Result<()> {
        use std::io::Write;

        let Some(ref data) = self.data else {
            anyhow::bail!("No data to export");
        };

        let alerts: Vec<&Alert> = data.alerts.iter().collect();
        let export = serde_json::json!({
            "stats": data.stats,
            "patients": data.patients,
            "alerts": alerts,
        });

        let json = serde_json::to_string_pretty(&export)?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockSource;
    use std::time::Duration;

    fn demo_app() -> App {
        let source = Box::new(MockSource::new(Duration::from_secs(3600)));
        let mut app = App::new(source, Settings::default());
        app.reload_data().unwrap();
        app
    }

    #[test]
    fn test_reload_populates_data() {
        let app = demo_app();
        let data = app.data.as_ref().unwrap();
        assert_eq!(data.stats.total_patients, 4);
        assert_eq!(data.stats.active_alerts, 2);
    }

    #[test]
    fn test_acknowledge_selected_updates_stats() {
        let mut app = demo_app();
        app.set_view(View::Alerts);

        // First visible alert is the oldest unacknowledged one
        app.selected_alert_index = 0;
        app.acknowledge_selected();

        let data = app.data.as_ref().unwrap();
        assert_eq!(data.stats.active_alerts, 1);
        assert_eq!(data.alerts.len(), 3);
    }

    #[test]
    fn test_dismiss_selected_removes_alert() {
        let mut app = demo_app();
        app.set_view(View::Alerts);

        app.selected_alert_index = 0;
        app.dismiss_selected();

        let data = app.data.as_ref().unwrap();
        assert_eq!(data.alerts.len(), 2);
    }

    #[test]
    fn test_selection_clamped_after_dismissals() {
        let mut app = demo_app();
        app.set_view(View::Alerts);

        app.select_last();
        let last = app.selected_alert_index;
        app.dismiss_selected();
        assert!(app.selected_alert_index <= last);
        assert!(app.selected_alert_index < app.visible_alerts().len().max(1));
    }

    #[test]
    fn test_visible_alerts_order_unacknowledged_first() {
        let app = demo_app();
        let acked: Vec<bool> = app.visible_alerts().iter().map(|a| a.acknowledged).collect();
        assert_eq!(acked, vec![false, false, true]);
    }

    #[test]
    fn test_force_refresh_starts_new_epoch() {
        let mut app = demo_app();
        app.set_view(View::Alerts);
        app.selected_alert_index = 0;
        app.acknowledge_selected();
        assert_eq!(app.data.as_ref().unwrap().stats.active_alerts, 1);

        // Mock interval is an hour; a manual refresh must not wait for it
        assert!(app.force_refresh().unwrap());
        assert_eq!(app.data.as_ref().unwrap().stats.active_alerts, 2);
    }

    #[test]
    fn test_view_cycling() {
        let mut app = demo_app();
        assert_eq!(app.current_view, View::Patients);
        app.next_view();
        assert_eq!(app.current_view, View::Alerts);
        app.next_view();
        assert_eq!(app.current_view, View::Trends);
        app.next_view();
        assert_eq!(app.current_view, View::Patients);
    }

    #[test]
    fn test_alert_filter_matches_name_and_message() {
        let mut app = demo_app();
        app.filter_text = "oxygen".to_string();
        let visible = app.visible_alerts();
        assert_eq!(visible.len(), 1);
        assert!(visible[0].message.contains("Oxygen"));

        app.filter_text = "chen".to_string();
        assert_eq!(app.visible_alerts().len(), 1);
    }
}
