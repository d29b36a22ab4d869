//! Channel-based data source.
//!
//! Receives dashboard snapshots via a tokio watch channel. This is useful
//! for live feed integration where snapshots are pushed rather than polled
//! from a file: a bridge task deserializes feed messages and sends them
//! through the channel.

use tokio::sync::watch;

use super::{DataSource, Snapshot};

/// A data source that receives dashboard snapshots via a channel.
///
/// The producer (e.g. a feed bridge task) sends snapshots through the
/// channel, and this source provides them to the TUI. When the dashboard is
/// torn down the receiver is dropped and the producer's next send fails,
/// which is its signal to stop.
///
/// # Example
///
/// ```
/// use vitalwatch::ChannelSource;
///
/// // Create a channel pair
/// let (tx, source) = ChannelSource::create("ward feed");
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<Snapshot>,
    description: String,
    /// Track if we've returned the initial value yet
    initial_returned: bool,
}

impl ChannelSource {
    /// Create a new channel source.
    ///
    /// # Arguments
    ///
    /// * `receiver` - The receiving end of a watch channel
    /// * `source_description` - A description of where snapshots come from
    ///   (e.g. "ward feed", "hl7 bridge")
    pub fn new(receiver: watch::Receiver<Snapshot>, source_description: &str) -> Self {
        let description = format!("channel: {}", source_description);
        Self {
            receiver,
            description,
            initial_returned: false,
        }
    }

    /// Create a channel pair for sending snapshots to a ChannelSource.
    ///
    /// Returns (sender, source) where the sender can be used to push
    /// snapshots and the source can be handed to the dashboard.
    pub fn create(source_description: &str) -> (watch::Sender<Snapshot>, Self) {
        let (tx, rx) = watch::channel(Snapshot::default());
        let source = Self::new(rx, source_description);
        (tx, source)
    }
}

impl DataSource for ChannelSource {
    fn poll(&mut self) -> Option<Snapshot> {
        // Return the initial value on first poll
        if !self.initial_returned {
            self.initial_returned = true;
            self.receiver.mark_changed();
        }

        // Check if there's a new value without blocking
        if self.receiver.has_changed().unwrap_or(false) {
            let snapshot = self.receiver.borrow_and_update().clone();
            Some(snapshot)
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        // Channel sources don't have file-based errors; a dead producer
        // simply stops sending new snapshots
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Patient, PatientStatus, VitalSigns};

    fn one_patient_snapshot() -> Snapshot {
        Snapshot {
            patients: vec![Patient {
                id: "1".into(),
                name: "Test Patient".into(),
                age: 40,
                room: "101".into(),
                status: PatientStatus::Stable,
                last_update: "now".into(),
                vitals: VitalSigns {
                    heart_rate: 72.0,
                    temperature: 98.6,
                    blood_pressure: "120/80".into(),
                    oxygen_saturation: 98.0,
                },
            }],
            alerts: Vec::new(),
            heart_rate_data: Vec::new(),
            temperature_data: Vec::new(),
        }
    }

    #[test]
    fn test_channel_source_poll() {
        let (tx, mut source) = ChannelSource::create("test");

        // Initially returns the default (empty) snapshot
        let snapshot = source.poll();
        assert!(snapshot.is_some());
        assert!(snapshot.unwrap().patients.is_empty());

        // No change, so poll returns None
        assert!(source.poll().is_none());

        // Send a new snapshot
        tx.send(one_patient_snapshot()).unwrap();

        // Now poll returns the new snapshot
        let snapshot = source.poll().unwrap();
        assert_eq!(snapshot.patients.len(), 1);
    }

    #[test]
    fn test_dropped_receiver_signals_producer() {
        let (tx, source) = ChannelSource::create("test");
        drop(source);
        assert!(tx.send(one_patient_snapshot()).is_err());
    }
}
