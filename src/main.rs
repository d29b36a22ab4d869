// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};

mod app;
mod data;
mod events;
mod settings;
mod source;
mod ui;

use app::{App, View};
use data::DashboardData;
use settings::Settings;
use source::{DataSource, FileSource, MockSource};

#[derive(Parser, Debug)]
#[command(name = "vitalwatch")]
#[command(about = "Terminal dashboard for monitoring patient vital signs and alerts")]
struct Args {
    /// Path to a snapshot JSON file to poll instead of the built-in demo data
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Refresh interval in seconds (overrides the settings file)
    #[arg(short, long)]
    refresh: Option<u64>,

    /// Path to a settings file (TOML)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Export current state to a JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.settings.as_deref())?;
    if let Some(refresh) = args.refresh {
        settings.refresh_secs = refresh;
    }

    // Handle export mode (non-interactive)
    if let Some(export_path) = args.export {
        return export_to_file(args.file.as_deref(), &export_path, &settings);
    }

    let source: Box<dyn DataSource> = match args.file {
        Some(ref path) => Box::new(FileSource::new(path)),
        None => Box::new(MockSource::new(Duration::from_secs(settings.refresh_secs))),
    };

    run_tui(source, settings)
}

/// Run the TUI with the given data source
fn run_tui(source: Box<dyn DataSource>, settings: Settings) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Create app and load initial data
    let mut app = App::new(source, settings);
    let _ = app.reload_data();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut last_poll = Instant::now();

    // How often the source is polled. The sources themselves gate how often
    // new data actually appears (mock interval, file mtime, channel sends).
    const POLL_INTERVAL: Duration = Duration::from_secs(1);

    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 12;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered = ratatui::layout::Rect::new(0, area.height / 2 - 2, area.width, 5);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(1), // Tabs
                Constraint::Min(8),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            // Render header with ward stats
            ui::common::render_header(frame, app, chunks[0]);

            // Render tabs
            ui::common::render_tabs(frame, app, chunks[1]);

            // Render current view
            match app.current_view {
                View::Patients => ui::patients::render(frame, app, chunks[2]),
                View::Alerts => ui::alerts::render(frame, app, chunks[2]),
                View::Trends => ui::trends::render(frame, app, chunks[2]),
            }

            // Render status bar
            ui::common::render_status_bar(frame, app, chunks[3]);

            // Render detail overlay if active
            if app.show_detail_overlay {
                ui::detail::render_overlay(frame, app, area);
            }

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => {
                    // Content starts after header (1) + tabs (1) + table header (1)
                    events::handle_mouse_event(app, mouse, 3);
                }
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Poll the source periodically; it decides when new data is due
        if last_poll.elapsed() >= POLL_INTERVAL {
            let _ = app.reload_data();
            last_poll = Instant::now();
        }
    }

    Ok(())
}

/// Export dashboard state to a JSON file without entering the TUI.
///
/// Reads a snapshot from the given file, or generates the demo dataset when
/// no file is given.
fn export_to_file(
    snapshot_path: Option<&std::path::Path>,
    export_path: &std::path::Path,
    settings: &Settings,
) -> Result<()> {
    use std::io::Write;

    let snapshot = match snapshot_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        }
        None => {
            let mut source = MockSource::new(Duration::from_secs(settings.refresh_secs));
            source
                .poll()
                .ok_or_else(|| anyhow::anyhow!("Demo source produced no data"))?
        }
    };

    let data = DashboardData::from_snapshot(snapshot);
    let alerts: Vec<_> = data.alerts.iter().collect();
    let export = serde_json::json!({
        "stats": data.stats,
        "patients": data.patients,
        "alerts": alerts,
    });

    let json = serde_json::to_string_pretty(&export)?;
    let mut file = std::fs::File::create(export_path)?;
    file.write_all(json.as_bytes())?;

    println!("Exported dashboard state to: {}", export_path.display());
    Ok(())
}
