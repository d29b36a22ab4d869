//! Dashboard state container.
//!
//! [`DashboardData`] owns the current snapshot's collections and the stats
//! derived from them. All mutations (acknowledge, dismiss, replace via
//! [`DashboardData::from_snapshot`]) go through this container on the main
//! loop, one at a time, so no reader ever observes a partial update.

use std::time::Instant;

use crate::source::{MetricPoint, Patient, Snapshot};

use super::alerts::AlertStore;
use super::stats::{compute_stats, Stats};

/// Complete processed dashboard state ready for display.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub patients: Vec<Patient>,
    pub alerts: AlertStore,
    /// Ward-wide heart rate trend, oldest point first.
    pub heart_rate_series: Vec<MetricPoint>,
    /// Ward-wide temperature trend, oldest point first.
    pub temperature_series: Vec<MetricPoint>,
    /// Derived from `patients` and `alerts`; refreshed on every mutation.
    pub stats: Stats,
    pub last_updated: Instant,
}

impl DashboardData {
    /// Convert a raw snapshot into processed dashboard state.
    ///
    /// This is the replace-the-world refresh: the previous epoch's alerts,
    /// including their acknowledgment state, are discarded wholesale.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let alerts = AlertStore::from_alerts(snapshot.alerts);
        let stats = compute_stats(&snapshot.patients, &alerts);
        Self {
            patients: snapshot.patients,
            alerts,
            heart_rate_series: snapshot.heart_rate_data,
            temperature_series: snapshot.temperature_data,
            stats,
            last_updated: Instant::now(),
        }
    }

    /// Acknowledge an alert and re-derive stats.
    ///
    /// Total: an unknown id leaves the state unchanged.
    pub fn acknowledge(&mut self, alert_id: &str) {
        self.alerts.acknowledge(alert_id);
        self.stats = compute_stats(&self.patients, &self.alerts);
    }

    /// Dismiss an alert and re-derive stats.
    ///
    /// Total: an unknown id leaves the state unchanged.
    pub fn dismiss(&mut self, alert_id: &str) {
        self.alerts.dismiss(alert_id);
        self.stats = compute_stats(&self.patients, &self.alerts);
    }

    /// Look up a patient by id.
    pub fn patient(&self, patient_id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == patient_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Alert, PatientStatus, Severity, VitalSigns};
    use chrono::Utc;

    fn sample_snapshot() -> Snapshot {
        let patients = vec![
            Patient {
                id: "1".into(),
                name: "Sarah Johnson".into(),
                age: 67,
                room: "ICU-101".into(),
                status: PatientStatus::Critical,
                last_update: "2 min ago".into(),
                vitals: VitalSigns {
                    heart_rate: 125.0,
                    temperature: 101.2,
                    blood_pressure: "160/95".into(),
                    oxygen_saturation: 88.0,
                },
            },
            Patient {
                id: "2".into(),
                name: "Michael Chen".into(),
                age: 45,
                room: "202".into(),
                status: PatientStatus::Warning,
                last_update: "5 min ago".into(),
                vitals: VitalSigns {
                    heart_rate: 95.0,
                    temperature: 99.8,
                    blood_pressure: "140/85".into(),
                    oxygen_saturation: 94.0,
                },
            },
        ];
        let alerts = vec![
            Alert {
                id: "1".into(),
                patient_id: "1".into(),
                patient_name: "Sarah Johnson".into(),
                severity: Severity::Critical,
                message: "Heart rate exceeding 120 bpm for 10+ minutes".into(),
                timestamp: Utc::now(),
                acknowledged: false,
            },
            Alert {
                id: "2".into(),
                patient_id: "2".into(),
                patient_name: "Michael Chen".into(),
                severity: Severity::Warning,
                message: "Elevated temperature detected".into(),
                timestamp: Utc::now(),
                acknowledged: true,
            },
        ];
        Snapshot {
            patients,
            alerts,
            heart_rate_data: Vec::new(),
            temperature_data: Vec::new(),
        }
    }

    #[test]
    fn test_from_snapshot_derives_stats() {
        let data = DashboardData::from_snapshot(sample_snapshot());
        assert_eq!(data.stats.total_patients, 2);
        assert_eq!(data.stats.critical_patients, 1);
        assert_eq!(data.stats.active_alerts, 1);
        assert_eq!(data.stats.average_heart_rate, 110); // (125 + 95) / 2
    }

    #[test]
    fn test_acknowledge_rederives_stats() {
        let mut data = DashboardData::from_snapshot(sample_snapshot());
        data.acknowledge("1");
        assert_eq!(data.stats.active_alerts, 0);
        // Patient-side stats unchanged
        assert_eq!(data.stats.critical_patients, 1);
    }

    #[test]
    fn test_dismiss_rederives_stats() {
        let mut data = DashboardData::from_snapshot(sample_snapshot());
        data.dismiss("1");
        assert_eq!(data.alerts.len(), 1);
        assert_eq!(data.stats.active_alerts, 0);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut data = DashboardData::from_snapshot(sample_snapshot());
        let before = data.stats;
        data.acknowledge("missing");
        data.dismiss("missing");
        assert_eq!(data.stats, before);
        assert_eq!(data.alerts.len(), 2);
    }

    #[test]
    fn test_refresh_starts_new_epoch() {
        let mut data = DashboardData::from_snapshot(sample_snapshot());
        data.acknowledge("1");
        assert_eq!(data.stats.active_alerts, 0);

        // Replace-the-world refresh: acknowledgment state is gone
        let data = DashboardData::from_snapshot(sample_snapshot());
        assert_eq!(data.stats.active_alerts, 1);
    }

    #[test]
    fn test_patient_lookup() {
        let data = DashboardData::from_snapshot(sample_snapshot());
        assert_eq!(data.patient("2").unwrap().name, "Michael Chen");
        assert!(data.patient("99").is_none());
    }
}
