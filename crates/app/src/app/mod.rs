//! Main application module.
//!
//! Contains the App struct and the event loop.

use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::{backend::Backend, Terminal};

use listjoin_clipboard::{ClipboardProvider, SystemClipboard};
use listjoin_config::Config;
use listjoin_logger as logger;
use listjoin_theme::Theme;

use crate::action::{Action, EditOp};
use crate::event::{Event, EventHandler};
use crate::state::AppState;

mod key_handler;

pub use key_handler::map_key;

/// Main application
pub struct App<C: ClipboardProvider = SystemClipboard> {
    state: AppState,
    event_handler: EventHandler,
    clipboard: C,
}

impl App<SystemClipboard> {
    /// Create the application with the system clipboard.
    ///
    /// Initializes the global logger from `config`.
    pub fn new(config: &Config) -> Self {
        let parsed_level = logger::LogLevel::from_str(&config.logging.min_level);
        logger::init(
            config.log_file_path(),
            parsed_level.clone().unwrap_or(logger::LogLevel::Info),
        );
        logger::info("Application started");
        if let Err(e) = parsed_level {
            logger::warn(format!("{}, using INFO", e));
        }

        Self::with_clipboard(config, SystemClipboard)
    }
}

impl<C: ClipboardProvider> App<C> {
    /// Create the application with a custom clipboard provider
    pub fn with_clipboard(config: &Config, clipboard: C) -> Self {
        let theme = Theme::get_by_name(&config.general.theme);
        Self {
            state: AppState::new(config, theme),
            event_handler: EventHandler::new(Duration::from_millis(config.ui.tick_ms)),
            clipboard,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        render_fn: impl Fn(&mut ratatui::Frame<'_>, &mut AppState),
    ) -> Result<()> {
        while !self.state.should_quit {
            // Render only when needed
            if self.state.needs_redraw {
                terminal.draw(|frame| render_fn(frame, &mut self.state))?;
                self.state.needs_redraw = false;
            }

            let event = self.event_handler.next()?;
            self.handle_event(event);
        }

        logger::info("Application stopped");
        Ok(())
    }

    /// Apply one terminal event to the state
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Paste(text) => self.state.dispatch(
                Action::Edit(EditOp::InsertText(normalize_line_breaks(&text))),
                &mut self.clipboard,
            ),
            Event::Resize(_, _) => self.state.needs_redraw = true,
            Event::Tick => self.state.tick(Instant::now()),
        }
    }
}

/// Terminals may deliver pasted line breaks as `\r` or `\r\n`
fn normalize_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    struct NoClipboard;

    impl ClipboardProvider for NoClipboard {
        fn read_text(&mut self) -> Result<String, String> {
            Err("no clipboard".to_string())
        }

        fn write_text(&mut self, _text: &str) -> Result<(), String> {
            Err("no clipboard".to_string())
        }
    }

    fn press(app: &mut App<NoClipboard>, code: KeyCode, modifiers: KeyModifiers) {
        app.handle_event(Event::Key(KeyEvent::new(code, modifiers)));
    }

    #[test]
    fn test_events_drive_state() {
        let mut app = App::with_clipboard(&Config::default(), NoClipboard);

        for ch in "red".chars() {
            press(&mut app, KeyCode::Char(ch), KeyModifiers::NONE);
        }
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        app.handle_event(Event::Paste("green\nblue".to_string()));
        assert_eq!(app.state().output, "red,green,blue");

        press(&mut app, KeyCode::Char('3'), KeyModifiers::ALT);
        assert_eq!(app.state().output, "red\tgreen\tblue");

        press(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.state().should_quit);
    }

    #[test]
    fn test_terminal_paste_with_carriage_returns_splits_items() {
        let mut app = App::with_clipboard(&Config::default(), NoClipboard);
        app.handle_event(Event::Paste("apple\rbanana\rcherry".to_string()));
        assert_eq!(app.state().output, "apple,banana,cherry");
        assert_eq!(app.state().metadata.count, 3);
        assert_eq!(app.state().item_count, 3);

        press(&mut app, KeyCode::Char('l'), KeyModifiers::CONTROL);
        app.handle_event(Event::Paste("one\r\ntwo\r\n".to_string()));
        assert_eq!(app.state().input.text(), "one\ntwo\n");
        assert_eq!(app.state().output, "one,two");
    }

    #[test]
    fn test_copy_failure_is_reported() {
        let mut app = App::with_clipboard(&Config::default(), NoClipboard);
        press(&mut app, KeyCode::Char('a'), KeyModifiers::NONE);
        press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        let status = app.state().status.as_ref().unwrap();
        assert_eq!(status.kind, crate::state::StatusKind::Error);
    }
}
