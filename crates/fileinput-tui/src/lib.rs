//! fileinput-tui: Terminal story harness for the file input widget
//!
//! This crate provides the TUI layer, including:
//! - The [`FileInput`](widgets::FileInput) widget and its hint list
//! - A path prompt for choosing files from disk
//! - Route-driven view loading
//! - The event loop and terminal setup

mod app;
mod event;
mod layout;
mod router;
mod screens;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

use screens::Screen as _;

pub use app::{App, InputMode};
pub use event::{key_to_action, Action, Event, EventHandler};
pub use fileinput_core;
pub use router::{default_routes, ViewKind, HOME_PATH};

use crossterm::{
    cursor::Show as ShowCursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fileinput_core::Story;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};

/// Tick rate of the event loop (4 Hz).
const TICK_RATE_MS: u64 = 250;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the story TUI.
///
/// The home route and the widget config are checked before the terminal is
/// touched. The terminal is restored on exit.
pub async fn run_tui(story: Story) -> Result<(), Box<dyn std::error::Error>> {
    let routes = default_routes();
    let view = routes.navigate(HOME_PATH).await?;
    tracing::info!(story = story.title, variant = story.name, "Opening story");
    let mut app = App::new(story, view)?;

    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventHandler::new(TICK_RATE_MS);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    let theme = theme::Theme::default();

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();

            match app.view {
                ViewKind::Home => screens::home::HomeScreen::new(&theme).render(&*app, area, buf),
            }

            if app.show_help {
                screens::render_help_overlay(area, buf, &theme);
            }
        })?;

        match events.next().await {
            Some(Event::Key(key)) => {
                let action = key_to_action(key, app.mode);
                app.handle_action(action);
            }
            Some(Event::Tick) => app.tick(),
            Some(Event::Resize(_, _)) => {}
            None => break,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Returns the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}

#[cfg(test)]
mod snapshot_tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, create_test_app, TEST_HEIGHT, TEST_WIDTH};
    use fileinput_core::SelectedFile;
    use ratatui::{backend::TestBackend, layout::Rect};

    #[test]
    fn test_full_frame_with_help() {
        let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = create_test_app();
        app.handle_action(Action::Help);
        let theme = theme::Theme::default();

        terminal
            .draw(|frame| {
                let area = frame.area();
                let buf = frame.buffer_mut();
                screens::home::HomeScreen::new(&theme).render(&app, area, buf);
                if app.show_help {
                    screens::render_help_overlay(area, buf, &theme);
                }
            })
            .unwrap();

        let out = buffer_to_string(terminal.backend().buffer());
        assert!(out.contains("Help"));
        assert!(out.contains("Press the button"));
    }

    #[test]
    fn test_valid_selection_frame() {
        let mut app = create_test_app();
        app.choose_file(SelectedFile::new("photo.png", "image/png", 1024));
        let theme = theme::Theme::default();

        let area = Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT);
        let mut buf = ratatui::buffer::Buffer::empty(area);
        screens::home::HomeScreen::new(&theme).render(&app, area, &mut buf);

        let out = buffer_to_string(&buf);
        assert!(out.contains("photo.png (1.0 KB)"));
        assert!(out.contains("[ Удалить ]"));
        assert!(out.contains("File accepted"));
    }
}
