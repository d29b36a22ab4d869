//! Data source abstraction for receiving dashboard snapshots.
//!
//! This module provides a trait-based abstraction for receiving patient data
//! from various sources (the built-in demo generator, snapshot files,
//! in-memory channels for live feed integration).

mod channel;
mod file;
mod mock;
mod snapshot;

pub use channel::ChannelSource;
pub use file::FileSource;
pub use mock::MockSource;
pub use snapshot::{Alert, MetricPoint, Patient, PatientStatus, Severity, Snapshot, VitalSigns};

use std::fmt::Debug;

/// Trait for receiving dashboard snapshots from various sources.
///
/// Implementations provide snapshots from different backends - the mock
/// generator, file polling, or in-memory channels.
///
/// # Example
///
/// ```
/// use vitalwatch::{DataSource, MockSource};
/// use std::time::Duration;
///
/// let mut source = MockSource::new(Duration::from_secs(30));
/// if let Some(snapshot) = source.poll() {
///     println!("Got {} patients", snapshot.patients.len());
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Poll for the latest snapshot.
    ///
    /// Returns `Some(snapshot)` if new data is available, `None` otherwise.
    /// This method must be non-blocking.
    fn poll(&mut self) -> Option<Snapshot>;

    /// Request that the next poll produce a fresh snapshot even if the
    /// source would otherwise report no change (manual refresh).
    ///
    /// Default is a no-op for push-based sources.
    fn invalidate(&mut self) {}

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;

    /// Check if the source has encountered an error.
    ///
    /// Returns the error message if an error occurred during the last poll.
    fn error(&self) -> Option<&str>;
}
