//! Shared types for dashboard snapshots.
//!
//! These types match the JSON format produced by the monitoring feed. They
//! serve as the common data format between whatever produces patient data
//! (mock generator, snapshot file, live feed bridge) and this dashboard.
//!
//! Field names are camelCase on the wire, matching the upstream feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A complete snapshot of dashboard state.
///
/// This is the top-level structure delivered by a [`DataSource`](super::DataSource).
/// Each snapshot is expected to be internally consistent: alerts reference
/// patients by id, and the trend series cover the window ending at the
/// snapshot time. Neither is enforced here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub patients: Vec<Patient>,
    pub alerts: Vec<Alert>,
    /// Ward-wide heart rate trend, oldest point first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub heart_rate_data: Vec<MetricPoint>,
    /// Ward-wide temperature trend, oldest point first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub temperature_data: Vec<MetricPoint>,
}

/// One patient's state at the time of the snapshot.
///
/// Immutable once produced: a refresh replaces the whole record rather than
/// patching fields in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Unique, stable identifier.
    pub id: String,
    pub name: String,
    pub age: u32,
    pub room: String,
    pub status: PatientStatus,
    /// Display string produced by the feed (e.g. "2 min ago").
    pub last_update: String,
    pub vitals: VitalSigns,
}

/// Vital sign readings for one patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSigns {
    /// Beats per minute.
    pub heart_rate: f64,
    /// Degrees Fahrenheit.
    pub temperature: f64,
    /// Systolic/diastolic, formatted "S/D".
    pub blood_pressure: String,
    /// SpO2 percentage in [0, 100]. Out-of-range values are passed through
    /// uninterpreted; clinical validation belongs to the producer.
    pub oxygen_saturation: f64,
}

/// Clinical acuity of a patient.
///
/// Unrecognized wire values deserialize to [`PatientStatus::Unknown`] rather
/// than failing, so downstream classification stays total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    Critical,
    Warning,
    Stable,
    Good,
    #[serde(other)]
    Unknown,
}

impl PatientStatus {
    /// Returns a short symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            PatientStatus::Critical => "CRIT",
            PatientStatus::Warning => "WARN",
            PatientStatus::Stable => "STBL",
            PatientStatus::Good => "GOOD",
            PatientStatus::Unknown => "?",
        }
    }

    /// Returns the full display label.
    pub fn label(&self) -> &'static str {
        match self {
            PatientStatus::Critical => "Critical",
            PatientStatus::Warning => "Warning",
            PatientStatus::Stable => "Stable",
            PatientStatus::Good => "Good",
            PatientStatus::Unknown => "Unknown",
        }
    }
}

/// An alert raised for a patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Unique identifier.
    pub id: String,
    /// References [`Patient::id`]. Not enforced; a dangling reference still
    /// renders, just without patient context in the detail overlay.
    pub patient_id: String,
    /// Read cache of the patient name, frozen at alert creation. The
    /// authoritative source is [`Patient::name`]; this copy is never
    /// re-synced.
    pub patient_name: String,
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub acknowledged: bool,
}

/// Severity of an alert.
///
/// Like [`PatientStatus`], unrecognized values degrade to
/// [`Severity::Unknown`] instead of failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
    #[serde(other)]
    Unknown,
}

impl Severity {
    /// Returns a short symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Critical => "CRIT",
            Severity::Warning => "WARN",
            Severity::Info => "INFO",
            Severity::Unknown => "?",
        }
    }
}

/// One point in a trend series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}
