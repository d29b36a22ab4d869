//! Alert store and lifecycle transitions.
//!
//! Alerts arrive pre-formed in snapshots and live in insertion order. Two
//! user intents mutate the store between refreshes: acknowledge (marks an
//! alert seen, monotonic) and dismiss (removes it). A refresh replaces the
//! whole store, discarding acknowledgment state for the new epoch.

use crate::source::{Alert, Severity};

/// Maximum number of acknowledged alerts shown in the panel. The heading
/// still shows the full acknowledged count.
pub const ACKNOWLEDGED_DISPLAY_LIMIT: usize = 3;

/// Ordered collection of alerts with the acknowledge/dismiss lifecycle.
///
/// All transitions are total: an id that matches nothing leaves the store
/// unchanged. Within one epoch (between snapshot replacements) an alert's
/// `acknowledged` flag only moves false → true.
#[derive(Debug, Clone, Default)]
pub struct AlertStore {
    alerts: Vec<Alert>,
}

impl AlertStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { alerts: Vec::new() }
    }

    /// Create a store from alerts in feed order.
    pub fn from_alerts(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    /// Mark the alert with the given id as acknowledged.
    ///
    /// No-op if the id matches nothing. Idempotent: acknowledging an already
    /// acknowledged alert changes nothing.
    pub fn acknowledge(&mut self, alert_id: &str) {
        if let Some(alert) = self.alerts.iter_mut().find(|a| a.id == alert_id) {
            alert.acknowledged = true;
        }
    }

    /// Remove the alert with the given id.
    ///
    /// No-op if the id matches nothing, so dismissing twice is safe.
    pub fn dismiss(&mut self, alert_id: &str) {
        self.alerts.retain(|a| a.id != alert_id);
    }

    /// Replace the entire store with a fresh set of alerts.
    ///
    /// Starts a new epoch: acknowledgment state from the previous set is
    /// discarded along with the alerts that carried it.
    pub fn replace(&mut self, alerts: Vec<Alert>) {
        self.alerts = alerts;
    }

    /// All alerts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    /// Number of alerts in the store.
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Number of unacknowledged alerts.
    pub fn active_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.acknowledged).count()
    }

    /// Number of acknowledged alerts.
    pub fn acknowledged_count(&self) -> usize {
        self.alerts.iter().filter(|a| a.acknowledged).count()
    }

    /// Number of unacknowledged critical alerts.
    pub fn critical_active_count(&self) -> usize {
        self.alerts
            .iter()
            .filter(|a| !a.acknowledged && a.severity == Severity::Critical)
            .count()
    }

    /// Look up an alert by id.
    pub fn get(&self, alert_id: &str) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == alert_id)
    }

    /// Alerts referencing the given patient, insertion order.
    pub fn for_patient<'a>(&'a self, patient_id: &'a str) -> impl Iterator<Item = &'a Alert> {
        self.alerts.iter().filter(move |a| a.patient_id == patient_id)
    }

    /// Alerts in display order: unacknowledged first, then acknowledged,
    /// insertion order preserved within each group.
    ///
    /// No timestamp sort is applied. Feed order within a group is the
    /// display order.
    pub fn display_order(&self) -> Vec<&Alert> {
        let unacknowledged = self.alerts.iter().filter(|a| !a.acknowledged);
        let acknowledged = self.alerts.iter().filter(|a| a.acknowledged);
        unacknowledged.chain(acknowledged).collect()
    }

    /// Display order truncated for the panel: every unacknowledged alert,
    /// then at most [`ACKNOWLEDGED_DISPLAY_LIMIT`] acknowledged ones.
    pub fn display_order_truncated(&self) -> Vec<&Alert> {
        let unacknowledged = self.alerts.iter().filter(|a| !a.acknowledged);
        let acknowledged = self.alerts.iter().filter(|a| a.acknowledged).take(ACKNOWLEDGED_DISPLAY_LIMIT);
        unacknowledged.chain(acknowledged).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn alert(id: &str, acknowledged: bool) -> Alert {
        Alert {
            id: id.to_string(),
            patient_id: "1".to_string(),
            patient_name: "Test Patient".to_string(),
            severity: Severity::Warning,
            message: format!("alert {}", id),
            timestamp: Utc::now(),
            acknowledged,
        }
    }

    fn store(alerts: Vec<Alert>) -> AlertStore {
        AlertStore::from_alerts(alerts)
    }

    #[test]
    fn test_acknowledge_flips_exactly_one() {
        let mut s = store(vec![alert("1", false), alert("2", true)]);
        assert_eq!(s.active_count(), 1);

        s.acknowledge("1");

        let ids: Vec<(&str, bool)> =
            s.iter().map(|a| (a.id.as_str(), a.acknowledged)).collect();
        assert_eq!(ids, vec![("1", true), ("2", true)]);
        assert_eq!(s.active_count(), 0);
    }

    #[test]
    fn test_acknowledge_is_idempotent() {
        let mut s = store(vec![alert("1", false), alert("2", false)]);
        s.acknowledge("1");
        let after_first: Vec<bool> = s.iter().map(|a| a.acknowledged).collect();

        s.acknowledge("1");
        let after_second: Vec<bool> = s.iter().map(|a| a.acknowledged).collect();

        assert_eq!(after_first, after_second);
        assert_eq!(s.active_count(), 1);
    }

    #[test]
    fn test_acknowledge_absent_id_is_noop() {
        let mut s = store(vec![alert("1", false)]);
        s.acknowledge("nope");
        assert_eq!(s.len(), 1);
        assert_eq!(s.active_count(), 1);
    }

    #[test]
    fn test_dismiss_removes_exactly_one() {
        let mut s = store(vec![alert("1", false), alert("2", false), alert("3", true)]);
        s.dismiss("2");

        let ids: Vec<&str> = s.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut s = store(vec![alert("1", false), alert("2", false)]);
        s.dismiss("1");
        s.dismiss("1");

        let ids: Vec<&str> = s.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_dismiss_after_acknowledge_still_removes() {
        let mut s = store(vec![alert("1", false), alert("2", false)]);
        s.acknowledge("1");
        s.dismiss("1");
        assert!(s.get("1").is_none());
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_replace_discards_acknowledgment_state() {
        let mut s = store(vec![alert("1", false)]);
        s.acknowledge("1");
        assert_eq!(s.acknowledged_count(), 1);

        // New epoch: same id arrives unacknowledged
        s.replace(vec![alert("1", false), alert("2", false)]);
        assert_eq!(s.acknowledged_count(), 0);
        assert_eq!(s.active_count(), 2);
    }

    #[test]
    fn test_display_order_unacknowledged_first() {
        // Insertion order: A(unack), B(ack), C(unack)
        let s = store(vec![alert("A", false), alert("B", true), alert("C", false)]);

        let ids: Vec<&str> = s.display_order().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_display_order_preserves_insertion_within_groups() {
        let s = store(vec![
            alert("1", true),
            alert("2", false),
            alert("3", true),
            alert("4", false),
        ]);

        let ids: Vec<&str> = s.display_order().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn test_truncated_display_caps_acknowledged_group() {
        let s = store(vec![
            alert("u1", false),
            alert("a1", true),
            alert("a2", true),
            alert("a3", true),
            alert("a4", true),
            alert("u2", false),
        ]);

        let ids: Vec<&str> =
            s.display_order_truncated().iter().map(|a| a.id.as_str()).collect();
        // Both unacknowledged, then only the first 3 acknowledged
        assert_eq!(ids, vec!["u1", "u2", "a1", "a2", "a3"]);
        // Full count still available for the heading
        assert_eq!(s.acknowledged_count(), 4);
    }

    #[test]
    fn test_active_count_through_lifecycle() {
        let mut s = store(vec![alert("1", false), alert("2", false), alert("3", true)]);
        assert_eq!(s.active_count(), 2);

        s.acknowledge("1");
        assert_eq!(s.active_count(), 1);

        s.dismiss("1");
        assert_eq!(s.len(), 2);
        assert_eq!(s.active_count(), 1);
    }
}
