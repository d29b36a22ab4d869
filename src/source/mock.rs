//! Demo data source.
//!
//! Generates a plausible ward dataset in-process and regenerates it on a
//! fixed interval, standing in for a live feed. All data here is hardcoded
//! and fictional; no external systems are contacted.

use std::time::{Duration, Instant};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Alert, DataSource, MetricPoint, Patient, PatientStatus, Severity, Snapshot, VitalSigns};

/// Number of points in each generated trend series.
const SERIES_LEN: usize = 12;
/// Spacing between trend points.
const SERIES_STEP_SECS: i64 = 300;

/// A data source that regenerates a mock ward dataset on an interval.
///
/// The first poll always yields data; after that, polls return `None` until
/// the refresh interval elapses or [`DataSource::invalidate`] is called.
#[derive(Debug)]
pub struct MockSource {
    interval: Duration,
    last_generated: Option<Instant>,
    rng: StdRng,
}

impl MockSource {
    /// Create a mock source that regenerates every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_generated: None,
            rng: StdRng::from_entropy(),
        }
    }

    fn generate(&mut self) -> Snapshot {
        let now = Utc::now();

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
            Patient {
                id: "3".into(),
                name: "Emma Rodriguez".into(),
                age: 32,
                room: "305".into(),
                status: PatientStatus::Stable,
                last_update: "8 min ago".into(),
                vitals: VitalSigns {
                    heart_rate: 72.0,
                    temperature: 98.6,
                    blood_pressure: "120/78".into(),
                    oxygen_saturation: 98.0,
                },
            },
            Patient {
                id: "4".into(),
                name: "James Wilson".into(),
                age: 58,
                room: "156".into(),
                status: PatientStatus::Good,
                last_update: "12 min ago".into(),
                vitals: VitalSigns {
                    heart_rate: 68.0,
                    temperature: 98.4,
                    blood_pressure: "115/72".into(),
                    oxygen_saturation: 99.0,
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
                timestamp: now - chrono::Duration::seconds(300),
                acknowledged: false,
            },
            Alert {
                id: "2".into(),
                patient_id: "1".into(),
                patient_name: "Sarah Johnson".into(),
                severity: Severity::Critical,
                message: "Oxygen saturation dropped below 90%".into(),
                timestamp: now - chrono::Duration::seconds(180),
                acknowledged: false,
            },
            Alert {
                id: "3".into(),
                patient_id: "2".into(),
                patient_name: "Michael Chen".into(),
                severity: Severity::Warning,
                message: "Elevated temperature detected".into(),
                timestamp: now - chrono::Duration::seconds(900),
                acknowledged: true,
            },
        ];

        // Jittered series with an uptick near the end of the window
        let heart_rate_data = (0..SERIES_LEN)
            .map(|i| MetricPoint {
                timestamp: now
                    - chrono::Duration::seconds((SERIES_LEN as i64 - 1 - i as i64) * SERIES_STEP_SECS),
                value: 70.0
                    + self.rng.gen::<f64>() * 30.0
                    + if i > 8 { 20.0 } else { 0.0 },
            })
            .collect();

        let temperature_data = (0..SERIES_LEN)
            .map(|i| MetricPoint {
                timestamp: now
                    - chrono::Duration::seconds((SERIES_LEN as i64 - 1 - i as i64) * SERIES_STEP_SECS),
                value: 98.0
                    + self.rng.gen::<f64>() * 3.0
                    + if i > 9 { 1.0 } else { 0.0 },
            })
            .collect();

        Snapshot {
            patients,
            alerts,
            heart_rate_data,
            temperature_data,
        }
    }
}

impl DataSource for MockSource {
    fn poll(&mut self) -> Option<Snapshot> {
        let due = match self.last_generated {
            None => true,
            Some(at) => at.elapsed() >= self.interval,
        };

        if due {
            self.last_generated = Some(Instant::now());
            Some(self.generate())
        } else {
            None
        }
    }

    fn invalidate(&mut self) {
        self.last_generated = None;
    }

    fn description(&self) -> &str {
        "demo data"
    }

    fn error(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_poll_yields_data() {
        let mut source = MockSource::new(Duration::from_secs(30));
        let snapshot = source.poll().unwrap();

        assert_eq!(snapshot.patients.len(), 4);
        assert_eq!(snapshot.alerts.len(), 3);
        assert_eq!(snapshot.heart_rate_data.len(), SERIES_LEN);
        assert_eq!(snapshot.temperature_data.len(), SERIES_LEN);
    }

    #[test]
    fn test_polls_gated_by_interval() {
        let mut source = MockSource::new(Duration::from_secs(3600));
        assert!(source.poll().is_some());
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_invalidate_forces_regeneration() {
        let mut source = MockSource::new(Duration::from_secs(3600));
        let _ = source.poll();
        assert!(source.poll().is_none());

        source.invalidate();
        assert!(source.poll().is_some());
    }

    #[test]
    fn test_generated_data_is_consistent() {
        let mut source = MockSource::new(Duration::from_secs(30));
        let snapshot = source.poll().unwrap();

        // Every alert references a patient in the same snapshot
        for alert in &snapshot.alerts {
            let patient = snapshot
                .patients
                .iter()
                .find(|p| p.id == alert.patient_id)
                .expect("alert references a known patient");
            assert_eq!(patient.name, alert.patient_name);
        }

        // Series are oldest-first
        let times: Vec<_> = snapshot.heart_rate_data.iter().map(|p| p.timestamp).collect();
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted);

        // Exactly one acknowledged alert in the demo set
        assert_eq!(
            snapshot.alerts.iter().filter(|a| a.acknowledged).count(),
            1
        );
    }

    #[test]
    fn test_series_values_in_expected_band() {
        let mut source = MockSource::new(Duration::from_secs(30));
        let snapshot = source.poll().unwrap();

        for point in &snapshot.heart_rate_data {
            assert!(point.value >= 70.0 && point.value <= 120.0);
        }
        for point in &snapshot.temperature_data {
            assert!(point.value >= 98.0 && point.value <= 102.0);
        }
    }
}
