// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # vitalwatch
//!
//! A terminal dashboard and library for monitoring patient vital signs.
//!
//! This crate renders a ward overview in an interactive terminal UI: a
//! patients table, an alerts panel with an acknowledge/dismiss lifecycle,
//! aggregate stats, and trend charts. Snapshots can come from the built-in
//! demo generator, a polled JSON file, or an in-process channel.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(processing)   │(rendering)   │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── MockSource | FileSource | ChannelSource    │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, view navigation, and user interaction logic
//! - **[`source`]**: Data source abstraction ([`DataSource`] trait) with
//!   implementations for demo data, file polling, and channel-based input
//! - **[`data`]**: Data models and processing - the alert lifecycle, derived
//!   stats, heart-rate history for sparklines
//! - **[`ui`]**: Terminal rendering using ratatui - patients table, alerts
//!   panel, trend charts, and theme support
//! - **[`settings`]**: Layered configuration (defaults, file, environment)
//!
//! ## The alert lifecycle
//!
//! Alerts arrive pre-formed in each snapshot. Between refreshes the user can
//! acknowledge (monotonic, idempotent) or dismiss (idempotent removal) them;
//! both intents are no-ops on unknown ids. A refresh replaces the whole
//! dataset and starts a new epoch, discarding acknowledgment state. Derived
//! stats are recomputed from scratch after every mutation.
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Built-in demo data, regenerated every 30 seconds
//! vitalwatch
//!
//! # Poll a snapshot file written by a feed bridge
//! vitalwatch --file snapshot.json
//! ```
//!
//! ### As a library with the demo source
//!
//! ```
//! use std::time::Duration;
//! use vitalwatch::{App, MockSource, Settings};
//!
//! let source = Box::new(MockSource::new(Duration::from_secs(30)));
//! let app = App::new(source, Settings::default());
//! ```
//!
//! ### Bridging from a live feed
//!
//! ```
//! use vitalwatch::{App, ChannelSource, Settings, Snapshot};
//!
//! // Create a channel for receiving snapshots
//! let (tx, source) = ChannelSource::create("ward feed");
//!
//! // Create the app; a bridge task pushes snapshots through `tx`
//! let app = App::new(Box::new(source), Settings::default());
//! # drop(tx);
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod settings;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, View};
pub use data::{compute_stats, AlertStore, DashboardData, History, Stats};
pub use settings::{NormalRange, Settings};
pub use source::{
    Alert, ChannelSource, DataSource, FileSource, MetricPoint, MockSource, Patient,
    PatientStatus, Severity, Snapshot, VitalSigns,
};
