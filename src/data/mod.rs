//! Data models and processing for dashboard snapshots.
//!
//! This module holds the state container and the pure logic the dashboard
//! is built around.
//!
//! ## Submodules
//!
//! - [`age`]: Relative-age formatting for alert timestamps ("5m ago")
//! - [`alerts`]: The alert store with its acknowledge/dismiss lifecycle
//! - [`dashboard`]: The owned state container tying patients, alerts, and
//!   derived stats together
//! - [`history`]: Heart-rate tracking across refreshes for sparklines
//! - [`stats`]: Pure derivation of summary counts
//!
//! ## Data Flow
//!
//! ```text
//! Snapshot (raw JSON)
//!        │
//!        ▼
//! DashboardData::from_snapshot()
//!        │
//!        ├──▶ AlertStore (acknowledge/dismiss between refreshes)
//!        │
//!        ├──▶ compute_stats() (re-run after every mutation)
//!        │
//!        └──▶ History::record() (for sparklines)
//! ```

pub mod age;
pub mod alerts;
pub mod dashboard;
pub mod history;
pub mod stats;

pub use alerts::{AlertStore, ACKNOWLEDGED_DISPLAY_LIMIT};
pub use dashboard::DashboardData;
pub use history::History;
pub use stats::{compute_stats, Stats};
