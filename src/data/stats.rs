//! Derived summary statistics.
//!
//! Stats are never stored as a source of truth. They are recomputed from the
//! patient and alert collections whenever either changes, which keeps them
//! drift-free at these data sizes.

use serde::Serialize;

use super::alerts::AlertStore;
use crate::source::{Patient, PatientStatus};

/// Aggregate counts shown in the header strip and export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Stats {
    pub total_patients: usize,
    pub critical_patients: usize,
    pub active_alerts: usize,
    /// Mean heart rate across all patients, rounded to the nearest beat.
    /// Defined as 0 when there are no patients.
    pub average_heart_rate: u32,
}

/// Compute stats from the current collections. O(n) over patients and alerts.
pub fn compute_stats(patients: &[Patient], alerts: &AlertStore) -> Stats {
    let total_patients = patients.len();
    let critical_patients = patients
        .iter()
        .filter(|p| p.status == PatientStatus::Critical)
        .count();

    let average_heart_rate = if patients.is_empty() {
        0
    } else {
        let sum: f64 = patients.iter().map(|p| p.vitals.heart_rate).sum();
        (sum / patients.len() as f64).round() as u32
    };

    Stats {
        total_patients,
        critical_patients,
        active_alerts: alerts.active_count(),
        average_heart_rate,
    }
}
