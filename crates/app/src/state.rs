//! Application state and action dispatch.
//!
//! `AppState` owns the raw input, the delimiter selection and everything
//! derived from them. Every change reruns the forward pipeline so the output
//! and line numbers always reflect the current input.

use std::time::{Duration, Instant};

use listjoin_clipboard::ClipboardProvider;
use listjoin_config::Config;
use listjoin_logger as logger;
use listjoin_theme::Theme;
use listjoin_transform::{
    split_items, to_joined, to_lines, DelimiterMode, DelimiterSelection, LineMetadata,
};

use crate::action::{Action, EditOp};
use crate::buffer::TextBuffer;

/// Message shown after a successful copy
pub const COPIED_MESSAGE: &str = "Copied to clipboard";

/// Message shown when the clipboard cannot be read
pub const PASTE_FAILED_MESSAGE: &str = "Could not paste from clipboard. Please paste manually.";

/// Field receiving edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Custom,
}

/// Kind of status bar message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Status bar notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub shown_at: Instant,
}

impl StatusMessage {
    fn new(text: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= timeout
    }
}

/// Scroll offsets of the input view, in lines and chars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewOffset {
    pub top: usize,
    pub left: usize,
}

impl ViewOffset {
    /// Scroll so that `(line, column)` is inside a `height` x `width` view.
    pub fn follow(&mut self, (line, column): (usize, usize), height: usize, width: usize) {
        if height > 0 {
            if line < self.top {
                self.top = line;
            } else if line >= self.top + height {
                self.top = line + 1 - height;
            }
        }
        if width > 0 {
            if column < self.left {
                self.left = column;
            } else if column >= self.left + width {
                self.left = column + 1 - width;
            }
        }
    }
}

/// Global application state
#[derive(Debug)]
pub struct AppState {
    /// Should application quit
    pub should_quit: bool,
    /// Flag indicating UI needs to be redrawn
    pub needs_redraw: bool,
    /// Raw multi-line input
    pub input: TextBuffer,
    /// Input scroll position, kept in sync with the line-number gutter
    pub input_view: ViewOffset,
    /// Custom delimiter text
    pub custom_field: TextBuffer,
    /// Selected delimiter mode
    pub mode: DelimiterMode,
    pub focus: Focus,
    /// Joined output, derived
    pub output: String,
    /// Line numbers of the input, derived
    pub metadata: LineMetadata,
    /// Number of items actually joined, derived
    pub item_count: usize,
    /// Status bar notification
    pub status: Option<StatusMessage>,
    /// How long notifications stay visible
    pub notification_timeout: Duration,
    /// Current theme
    pub theme: &'static Theme,
}

impl AppState {
    /// Create state with the initial selection from `config`
    pub fn new(config: &Config, theme: &'static Theme) -> Self {
        let mut state = Self {
            should_quit: false,
            needs_redraw: true,
            input: TextBuffer::multiline(),
            input_view: ViewOffset::default(),
            custom_field: TextBuffer::single_line(&config.transform.custom_delimiter),
            mode: config.transform.delimiter,
            focus: focus_for(config.transform.delimiter),
            output: String::new(),
            metadata: LineMetadata::default(),
            item_count: 0,
            status: None,
            notification_timeout: Duration::from_millis(config.ui.notification_ms),
            theme,
        };
        state.recompute();
        state
    }

    /// Current delimiter selection built from the mode and custom text
    pub fn selection(&self) -> DelimiterSelection {
        DelimiterSelection::from_mode(self.mode, &self.custom_field.text())
    }

    /// Rerun the forward pipeline from the current input and selection
    pub fn recompute(&mut self) {
        let raw = self.input.text();
        let selection = self.selection();
        self.metadata = LineMetadata::derive(&raw);
        self.item_count = split_items(&raw).len();
        self.output = to_joined(&raw, &selection);
        self.needs_redraw = true;
    }

    /// Apply one user action.
    ///
    /// Clipboard failures become status messages; they never abort dispatch.
    pub fn dispatch(&mut self, action: Action, clipboard: &mut dyn ClipboardProvider) {
        match action {
            Action::Edit(op) => self.edit(&op),
            Action::SelectDelimiter(mode) => self.select_delimiter(mode),
            Action::CycleDelimiter => self.select_delimiter(self.mode.next()),
            Action::SetCustom(text) => {
                self.custom_field.set_text(&text);
                self.recompute();
            }
            Action::Reverse => self.reverse(),
            Action::Copy => self.copy_output(clipboard),
            Action::Paste => self.paste_input(clipboard),
            Action::Clear => {
                self.input.clear();
                self.input_view = ViewOffset::default();
                self.focus = Focus::Input;
                self.recompute();
            }
            Action::FocusNext => {
                self.focus = match self.focus {
                    Focus::Input if self.mode == DelimiterMode::Custom => Focus::Custom,
                    _ => Focus::Input,
                };
                self.needs_redraw = true;
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Drop the notification once it has been shown long enough
    pub fn tick(&mut self, now: Instant) {
        if self
            .status
            .as_ref()
            .is_some_and(|status| status.is_expired(now, self.notification_timeout))
        {
            self.status = None;
            self.needs_redraw = true;
        }
    }

    fn edit(&mut self, op: &EditOp) {
        let changed = match self.focus {
            Focus::Input => self.input.apply(op),
            Focus::Custom => self.custom_field.apply(op),
        };
        if changed {
            self.recompute();
        } else {
            self.needs_redraw = true;
        }
    }

    fn select_delimiter(&mut self, mode: DelimiterMode) {
        logger::debug(format!("Delimiter mode: {}", mode.label()));
        self.mode = mode;
        self.focus = focus_for(mode);
        self.recompute();
    }

    fn reverse(&mut self) {
        if self.output.is_empty() {
            return;
        }
        let lines = to_lines(&self.output, &self.selection());
        logger::info(format!(
            "Reversed output into {} lines using {}",
            LineMetadata::derive(&lines).count,
            self.mode.label()
        ));
        self.input.set_text(&lines);
        self.recompute();
    }

    fn copy_output(&mut self, clipboard: &mut dyn ClipboardProvider) {
        if self.output.is_empty() {
            return;
        }
        match clipboard.write_text(&self.output) {
            Ok(()) => self.set_status(COPIED_MESSAGE, StatusKind::Success),
            Err(e) => {
                logger::error(format!("Failed to copy: {}", e));
                self.set_status(e, StatusKind::Error);
            }
        }
    }

    fn paste_input(&mut self, clipboard: &mut dyn ClipboardProvider) {
        match clipboard.read_text() {
            Ok(text) => {
                self.input.set_text(&text);
                self.recompute();
            }
            Err(e) => {
                logger::error(format!("Failed to read clipboard: {}", e));
                self.set_status(PASTE_FAILED_MESSAGE, StatusKind::Error);
            }
        }
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage::new(text, kind));
        self.needs_redraw = true;
    }
}

/// Custom mode starts editing the delimiter; every other mode edits the input
fn focus_for(mode: DelimiterMode) -> Focus {
    if mode == DelimiterMode::Custom {
        Focus::Custom
    } else {
        Focus::Input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockClipboard {
        content: Option<String>,
        writes: usize,
    }

    impl ClipboardProvider for MockClipboard {
        fn read_text(&mut self) -> Result<String, String> {
            self.content
                .clone()
                .ok_or_else(|| "clipboard unavailable".to_string())
        }

        fn write_text(&mut self, text: &str) -> Result<(), String> {
            self.writes += 1;
            self.content = Some(text.to_string());
            Ok(())
        }
    }

    fn state() -> AppState {
        AppState::new(&Config::default(), &Theme::DEFAULT)
    }

    fn type_text(state: &mut AppState, clipboard: &mut MockClipboard, text: &str) {
        for ch in text.chars() {
            let op = if ch == '\n' {
                EditOp::Newline
            } else {
                EditOp::Insert(ch)
            };
            state.dispatch(Action::Edit(op), clipboard);
        }
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert_eq!(state.output, "");
        assert_eq!(state.metadata.count, 1);
        assert_eq!(state.selection(), DelimiterSelection::Comma);
    }

    #[test]
    fn test_edit_recomputes_output_and_lines() {
        let mut state = state();
        let mut clipboard = MockClipboard::default();
        type_text(&mut state, &mut clipboard, "a\n\n  b  \n");

        assert_eq!(state.output, "a,b");
        assert_eq!(state.metadata.count, 4);
        assert_eq!(state.item_count, 2);
    }

    #[test]
    fn test_select_delimiter_recomputes() {
        let mut state = state();
        let mut clipboard = MockClipboard::default();
        type_text(&mut state, &mut clipboard, "x\ny");

        state.dispatch(Action::SelectDelimiter(DelimiterMode::Pipe), &mut clipboard);
        assert_eq!(state.output, "x|y");

        state.dispatch(Action::CycleDelimiter, &mut clipboard);
        assert_eq!(state.mode, DelimiterMode::Custom);
        assert_eq!(state.focus, Focus::Custom);
        // Empty custom text joins with a space
        assert_eq!(state.output, "x y");
    }

    #[test]
    fn test_custom_field_edits_apply_to_delimiter() {
        let mut state = state();
        let mut clipboard = MockClipboard::default();
        type_text(&mut state, &mut clipboard, "x\ny");
        state.dispatch(Action::SelectDelimiter(DelimiterMode::Custom), &mut clipboard);

        state.dispatch(Action::Edit(EditOp::Insert('-')), &mut clipboard);
        state.dispatch(Action::Edit(EditOp::Insert('>')), &mut clipboard);
        assert_eq!(state.output, "x->y");
        assert_eq!(state.input.text(), "x\ny");

        state.dispatch(Action::SetCustom(" / ".to_string()), &mut clipboard);
        assert_eq!(state.output, "x / y");
    }

    #[test]
    fn test_custom_text_survives_mode_switch() {
        let mut state = state();
        let mut clipboard = MockClipboard::default();
        state.dispatch(Action::SetCustom("::".to_string()), &mut clipboard);
        state.dispatch(Action::SelectDelimiter(DelimiterMode::Tab), &mut clipboard);
        assert_eq!(state.selection(), DelimiterSelection::Tab);
        state.dispatch(Action::SelectDelimiter(DelimiterMode::Custom), &mut clipboard);
        assert_eq!(state.selection(), DelimiterSelection::Custom("::".to_string()));
    }

    #[test]
    fn test_reverse_uses_current_selection() {
        let mut state = state();
        let mut clipboard = MockClipboard::default();
        type_text(&mut state, &mut clipboard, "a\n\n b \nc");
        state.dispatch(Action::SelectDelimiter(DelimiterMode::Semicolon), &mut clipboard);
        assert_eq!(state.output, "a;b;c");

        state.dispatch(Action::Reverse, &mut clipboard);
        assert_eq!(state.input.text(), "a\nb\nc");
        assert_eq!(state.metadata.count, 3);
        assert_eq!(state.output, "a;b;c");
    }

    #[test]
    fn test_reverse_splits_pipe_output() {
        let mut state = state();
        let mut clipboard = MockClipboard::default();
        // A single line that already holds pipe-joined text
        type_text(&mut state, &mut clipboard, "x|y|z");
        state.dispatch(Action::SelectDelimiter(DelimiterMode::Pipe), &mut clipboard);
        assert_eq!(state.output, "x|y|z");

        state.dispatch(Action::Reverse, &mut clipboard);
        assert_eq!(state.input.text(), "x\ny\nz");
    }

    #[test]
    fn test_reverse_with_empty_output_is_noop() {
        let mut state = state();
        let mut clipboard = MockClipboard::default();
        type_text(&mut state, &mut clipboard, "  \n ");
        state.dispatch(Action::Reverse, &mut clipboard);
        assert_eq!(state.input.text(), "  \n ");
    }

    #[test]
    fn test_copy() {
        let mut state = state();
        let mut clipboard = MockClipboard::default();

        state.dispatch(Action::Copy, &mut clipboard);
        assert_eq!(clipboard.writes, 0);
        assert!(state.status.is_none());

        type_text(&mut state, &mut clipboard, "a\nb");
        state.dispatch(Action::Copy, &mut clipboard);
        assert_eq!(clipboard.content.as_deref(), Some("a,b"));
        let status = state.status.as_ref().unwrap();
        assert_eq!(status.text, COPIED_MESSAGE);
        assert_eq!(status.kind, StatusKind::Success);
    }

    #[test]
    fn test_paste_replaces_input() {
        let mut state = state();
        let mut clipboard = MockClipboard {
            content: Some("one\r\ntwo\r\n".to_string()),
            writes: 0,
        };
        type_text(&mut state, &mut clipboard, "old");

        state.dispatch(Action::Paste, &mut clipboard);
        assert_eq!(state.input.text(), "one\r\ntwo\r\n");
        assert_eq!(state.output, "one,two");
        assert_eq!(state.metadata.count, 3);
    }

    #[test]
    fn test_paste_failure_sets_error() {
        let mut state = state();
        let mut clipboard = MockClipboard::default();
        type_text(&mut state, &mut clipboard, "keep");

        state.dispatch(Action::Paste, &mut clipboard);
        assert_eq!(state.input.text(), "keep");
        let status = state.status.as_ref().unwrap();
        assert_eq!(status.text, PASTE_FAILED_MESSAGE);
        assert_eq!(status.kind, StatusKind::Error);
    }

    #[test]
    fn test_clear() {
        let mut state = state();
        let mut clipboard = MockClipboard::default();
        type_text(&mut state, &mut clipboard, "a\nb\nc");
        state.dispatch(Action::SelectDelimiter(DelimiterMode::Custom), &mut clipboard);

        state.dispatch(Action::Clear, &mut clipboard);
        assert!(state.input.is_empty());
        assert_eq!(state.output, "");
        assert_eq!(state.metadata.count, 1);
        assert_eq!(state.focus, Focus::Input);
    }

    #[test]
    fn test_focus_next_only_reaches_custom_in_custom_mode() {
        let mut state = state();
        let mut clipboard = MockClipboard::default();
        state.dispatch(Action::FocusNext, &mut clipboard);
        assert_eq!(state.focus, Focus::Input);

        state.dispatch(Action::SelectDelimiter(DelimiterMode::Custom), &mut clipboard);
        state.dispatch(Action::FocusNext, &mut clipboard);
        assert_eq!(state.focus, Focus::Input);
        state.dispatch(Action::FocusNext, &mut clipboard);
        assert_eq!(state.focus, Focus::Custom);
    }

    #[test]
    fn test_notification_expires() {
        let mut state = state();
        let mut clipboard = MockClipboard::default();
        type_text(&mut state, &mut clipboard, "a");
        state.dispatch(Action::Copy, &mut clipboard);
        let shown_at = state.status.as_ref().unwrap().shown_at;

        state.tick(shown_at + Duration::from_millis(500));
        assert!(state.status.is_some());
        state.tick(shown_at + state.notification_timeout);
        assert!(state.status.is_none());
    }

    #[test]
    fn test_config_initial_selection() {
        let mut config = Config::default();
        config.transform.delimiter = DelimiterMode::Custom;
        config.transform.custom_delimiter = " + ".to_string();
        let state = AppState::new(&config, &Theme::DEFAULT);
        assert_eq!(state.selection(), DelimiterSelection::Custom(" + ".to_string()));
        assert_eq!(state.focus, Focus::Custom);

        config.transform.delimiter = DelimiterMode::Pipe;
        let state = AppState::new(&config, &Theme::DEFAULT);
        assert_eq!(state.focus, Focus::Input);
    }

    #[test]
    fn test_view_follows_cursor() {
        let mut view = ViewOffset::default();
        view.follow((12, 3), 10, 20);
        assert_eq!(view, ViewOffset { top: 3, left: 0 });
        view.follow((1, 25), 10, 20);
        assert_eq!(view, ViewOffset { top: 1, left: 6 });
    }
}
