//! Terminal rendering using ratatui.
//!
//! Each view module exposes a `render` function taking the frame, the app
//! state, and the target area. Shared chrome (header, tabs, status bar,
//! help) lives in [`common`]; the patient detail modal in [`detail`].

pub mod alerts;
pub mod common;
pub mod detail;
pub mod patients;
pub mod theme;
pub mod trends;

pub use theme::Theme;
