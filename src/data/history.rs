//! Historical vitals tracking for sparklines.
//!
//! Snapshots only carry the current reading per patient, so the dashboard
//! records readings across refreshes to show short trends in the patients
//! table.

use std::collections::HashMap;
use std::collections::VecDeque;

use super::dashboard::DashboardData;

/// Maximum number of historical readings to keep per patient.
const MAX_HISTORY_SIZE: usize = 60;

/// Tracks heart-rate readings per patient across refreshes.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Readings per patient id, oldest first.
    heart_rates: HashMap<String, VecDeque<f64>>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the readings from a fresh snapshot.
    ///
    /// Patients absent from the snapshot keep their recorded history; ids
    /// are stable across refreshes so a returning patient continues its
    /// series.
    pub fn record(&mut self, data: &DashboardData) {
        for patient in &data.patients {
            let readings = self.heart_rates.entry(patient.id.clone()).or_default();
            readings.push_back(patient.vitals.heart_rate);
            if readings.len() > MAX_HISTORY_SIZE {
                readings.pop_front();
            }
        }
    }

    /// Get sparkline data for a patient's heart rate (normalized to 0-7 for
    /// 8 bar levels). Returns an empty Vec with fewer than 2 readings.
    pub fn heart_rate_sparkline(&self, patient_id: &str) -> Vec<u8> {
        normalize_sparkline(self.heart_rates.get(patient_id))
    }

    /// Change in heart rate between the last two readings, in bpm.
    ///
    /// Returns None with fewer than 2 readings.
    pub fn heart_rate_delta(&self, patient_id: &str) -> Option<f64> {
        let readings = self.heart_rates.get(patient_id)?;
        if readings.len() < 2 {
            return None;
        }
        let current = *readings.back()?;
        let previous = *readings.get(readings.len() - 2)?;
        Some(current - previous)
    }
}

/// Normalize readings to the 0-7 range for sparkline display.
fn normalize_sparkline(data: Option<&VecDeque<f64>>) -> Vec<u8> {
    let Some(values) = data else {
        return Vec::new();
    };

    if values.len() < 2 {
        return Vec::new();
    }

    let max = values.iter().copied().fold(f64::MIN, f64::max);
    let min = values.iter().copied().fold(f64::MAX, f64::min);
    let range = (max - min).max(1.0);

    values
        .iter()
        .map(|&v| {
            let normalized = ((v - min) / range * 7.0) as u8;
            normalized.min(7)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Patient, PatientStatus, Snapshot, VitalSigns};

    fn snapshot_with_hr(heart_rate: f64) -> DashboardData {
        let patient = Patient {
            id: "1".into(),
            name: "Test".into(),
            age: 50,
            room: "100".into(),
            status: PatientStatus::Stable,
            last_update: "now".into(),
            vitals: VitalSigns {
                heart_rate,
                temperature: 98.6,
                blood_pressure: "120/80".into(),
                oxygen_saturation: 98.0,
            },
        };
        DashboardData::from_snapshot(Snapshot {
            patients: vec![patient],
            alerts: Vec::new(),
            heart_rate_data: Vec::new(),
            temperature_data: Vec::new(),
        })
    }

    #[test]
    fn test_sparkline_needs_two_readings() {
        let mut history = History::new();
        history.record(&snapshot_with_hr(72.0));
        assert!(history.heart_rate_sparkline("1").is_empty());

        history.record(&snapshot_with_hr(80.0));
        assert_eq!(history.heart_rate_sparkline("1").len(), 2);
    }

    #[test]
    fn test_sparkline_normalization_bounds() {
        let mut history = History::new();
        for hr in [60.0, 80.0, 100.0] {
            history.record(&snapshot_with_hr(hr));
        }

        let sparkline = history.heart_rate_sparkline("1");
        assert_eq!(sparkline.first(), Some(&0));
        assert_eq!(sparkline.last(), Some(&7));
        assert!(sparkline.iter().all(|&v| v <= 7));
    }

    #[test]
    fn test_delta_tracks_last_two_readings() {
        let mut history = History::new();
        history.record(&snapshot_with_hr(72.0));
        assert_eq!(history.heart_rate_delta("1"), None);

        history.record(&snapshot_with_hr(80.0));
        assert_eq!(history.heart_rate_delta("1"), Some(8.0));

        history.record(&snapshot_with_hr(76.0));
        assert_eq!(history.heart_rate_delta("1"), Some(-4.0));
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = History::new();
        for i in 0..(MAX_HISTORY_SIZE + 10) {
            history.record(&snapshot_with_hr(60.0 + i as f64));
        }
        assert_eq!(history.heart_rate_sparkline("1").len(), MAX_HISTORY_SIZE);
    }
}
