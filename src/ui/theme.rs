//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::source::{PatientStatus, Severity};

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for warning-level severity and status.
    pub warning: Color,
    /// Color for critical-level severity and status.
    pub critical: Color,
    /// Color for good/healthy status.
    pub good: Color,
    /// Color for informational severity and stable status.
    pub info: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for header rows in tables.
    pub header: Style,
    /// Style for selected/highlighted rows.
    pub selected: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            warning: Color::Yellow,
            critical: Color::Red,
            good: Color::Green,
            info: Color::Blue,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            warning: Color::Yellow,
            critical: Color::Red,
            good: Color::Green,
            info: Color::Blue,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get style for a patient status.
    ///
    /// Total: unrecognized statuses get a dim neutral style.
    pub fn status_style(&self, status: PatientStatus) -> Style {
        match status {
            PatientStatus::Critical => {
                Style::default().fg(self.critical).add_modifier(Modifier::BOLD)
            }
            PatientStatus::Warning => Style::default().fg(self.warning),
            PatientStatus::Stable => Style::default().fg(self.info),
            PatientStatus::Good => Style::default().fg(self.good),
            PatientStatus::Unknown => Style::default().add_modifier(Modifier::DIM),
        }
    }

    /// Get style for an alert severity.
    ///
    /// Total: unrecognized severities get a dim neutral style.
    pub fn severity_style(&self, severity: Severity) -> Style {
        match severity {
            Severity::Critical => {
                Style::default().fg(self.critical).add_modifier(Modifier::BOLD)
            }
            Severity::Warning => Style::default().fg(self.warning),
            Severity::Info => Style::default().fg(self.info),
            Severity::Unknown => Style::default().add_modifier(Modifier::DIM),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_is_total() {
        let theme = Theme::dark();
        // Every variant maps to a style; unknown degrades to neutral
        for status in [
            PatientStatus::Critical,
            PatientStatus::Warning,
            PatientStatus::Stable,
            PatientStatus::Good,
            PatientStatus::Unknown,
        ] {
            let _ = theme.status_style(status);
        }
        for severity in [
            Severity::Critical,
            Severity::Warning,
            Severity::Info,
            Severity::Unknown,
        ] {
            let _ = theme.severity_style(severity);
        }

        assert_eq!(
            theme.status_style(PatientStatus::Unknown),
            Style::default().add_modifier(Modifier::DIM)
        );
        assert_eq!(
            theme.severity_style(Severity::Unknown),
            Style::default().add_modifier(Modifier::DIM)
        );
    }
}
