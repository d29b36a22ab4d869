use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, View};

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // If detail overlay is shown, handle overlay-specific keys
    if app.show_detail_overlay {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                app.close_overlay();
            }
            // Allow scrolling through patients while overlay is open
            KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::PageUp => app.select_prev_n(10),
            KeyCode::PageDown => app.select_next_n(10),
            KeyCode::Home => app.select_first(),
            KeyCode::End => app.select_last(),
            _ => {}
        }
        return;
    }

    // If filter input is active, handle text input
    if app.filter_active {
        handle_filter_input(app, key);
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // View switching
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_view();
            } else {
                app.next_view();
            }
        }
        KeyCode::BackTab => app.prev_view(),

        // Direct view access (patient detail is overlay-only, via Enter)
        KeyCode::Char('1') => app.set_view(View::Patients),
        KeyCode::Char('2') => app.set_view(View::Alerts),
        KeyCode::Char('3') => app.set_view(View::Trends),

        // Navigation (up/down for items, left/right for tabs)
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_view(),
        KeyCode::Right | KeyCode::Char('l') => app.next_view(),
        KeyCode::PageUp => app.select_prev_n(10),
        KeyCode::PageDown => app.select_next_n(10),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // Enter detail overlay
        KeyCode::Enter => app.enter_detail(),

        // Go back (Esc and Backspace)
        KeyCode::Esc | KeyCode::Backspace => app.go_back(),

        // Alert actions (Alerts view only)
        KeyCode::Char('a') => {
            if app.current_view == View::Alerts {
                app.acknowledge_selected();
            }
        }
        KeyCode::Char('x') => {
            if app.current_view == View::Alerts {
                app.dismiss_selected();
            }
        }

        // Manual refresh
        KeyCode::Char('r') => {
            let _ = app.force_refresh();
        }

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        // Sorting (Patients view)
        KeyCode::Char('s') => {
            if app.current_view == View::Patients {
                app.cycle_sort();
            }
        }
        KeyCode::Char('S') => {
            if app.current_view == View::Patients {
                app.toggle_sort_direction();
            }
        }

        // Filter (start typing to filter)
        KeyCode::Char('/') => app.start_filter(),

        // Clear filter
        KeyCode::Char('c') => {
            if !app.filter_text.is_empty() {
                app.clear_filter();
            }
        }

        // Export
        KeyCode::Char('e') => {
            let export_path = std::path::PathBuf::from("vitalwatch_export.json");
            match app.export_state(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        _ => {}
    }
}

/// Handle key input while filter is active
fn handle_filter_input(app: &mut App, key: KeyEvent) {
    match key.code {
        // Confirm filter
        KeyCode::Enter => {
            app.filter_active = false;
        }

        // Cancel filter (keep text but exit input mode)
        KeyCode::Esc => {
            app.cancel_filter();
        }

        // Clear and exit
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_filter();
        }

        // Backspace
        KeyCode::Backspace => {
            app.filter_pop();
            if app.filter_text.is_empty() {
                app.filter_active = false;
            }
        }

        // Type characters
        KeyCode::Char(c) => {
            app.filter_push(c);
        }

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, content_start_row: u16) {
    match mouse.kind {
        // Scroll wheel
        MouseEventKind::ScrollUp => {
            app.select_prev();
        }
        MouseEventKind::ScrollDown => {
            app.select_next();
        }

        // Click to select
        MouseEventKind::Down(MouseButton::Left) => {
            let clicked_row = mouse.row;

            // Check if clicking in content area (after header, tabs, table header)
            if clicked_row > content_start_row {
                let item_row = (clicked_row - content_start_row - 1) as usize;

                match app.current_view {
                    View::Patients => {
                        if item_row < app.filtered_patient_count() {
                            app.selected_patient_index = item_row;
                        }
                    }
                    View::Alerts => {
                        if item_row < app.visible_alerts().len() {
                            app.selected_alert_index = item_row;
                        }
                    }
                    View::Trends => {}
                }
            }

            // Check for tab clicks (row 1, after header)
            if clicked_row == 1 {
                let col = mouse.column;
                // Approximate tab positions: Patients (0-12), Alerts (13-24), Trends (25-34)
                if col < 13 {
                    app.set_view(View::Patients);
                } else if col < 25 {
                    app.set_view(View::Alerts);
                } else if col < 35 {
                    app.set_view(View::Trends);
                }
            }
        }

        // Right-click goes back
        MouseEventKind::Down(MouseButton::Right) => {
            app.go_back();
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::source::MockSource;
    use std::time::Duration;

    fn demo_app() -> App {
        let source = Box::new(MockSource::new(Duration::from_secs(3600)));
        let mut app = App::new(source, Settings::default());
        app.reload_data().unwrap();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::from(code));
    }

    #[test]
    fn test_ack_key_only_acts_on_alerts_view() {
        let mut app = demo_app();
        assert_eq!(app.current_view, View::Patients);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.data.as_ref().unwrap().stats.active_alerts, 2);

        app.set_view(View::Alerts);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.data.as_ref().unwrap().stats.active_alerts, 1);
    }

    #[test]
    fn test_dismiss_key_removes_alert() {
        let mut app = demo_app();
        app.set_view(View::Alerts);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.data.as_ref().unwrap().alerts.len(), 2);
    }

    #[test]
    fn test_quit_key() {
        let mut app = demo_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_any_key_closes_help() {
        let mut app = demo_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('j'));
        assert!(!app.show_help);
    }

    #[test]
    fn test_filter_input_captures_text() {
        let mut app = demo_app();
        press(&mut app, KeyCode::Char('/'));
        assert!(app.filter_active);

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.filter_text, "sa");

        press(&mut app, KeyCode::Enter);
        assert!(!app.filter_active);
        assert_eq!(app.filter_text, "sa");
    }
}
