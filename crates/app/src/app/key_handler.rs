//! Keyboard handling.
//!
//! Maps key events to [`Action`]s; the mapping itself is a pure function so
//! it can be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use listjoin_clipboard::ClipboardProvider;
use listjoin_logger as logger;
use listjoin_transform::DelimiterMode;

use super::App;
use crate::action::{Action, EditOp};

impl<C: ClipboardProvider> App<C> {
    /// Handle keyboard event
    pub(super) fn handle_key_event(&mut self, key: KeyEvent) {
        logger::debug(format!(
            "Key event: code={:?}, modifiers={:?}",
            key.code, key.modifiers
        ));

        if let Some(action) = map_key(key) {
            self.state.dispatch(action, &mut self.clipboard);
        }
    }
}

/// Translate a key press into an action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl {
        return match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('c') => Some(Action::Copy),
            KeyCode::Char('v') => Some(Action::Paste),
            KeyCode::Char('r') => Some(Action::Reverse),
            KeyCode::Char('l') => Some(Action::Clear),
            KeyCode::Char('d') => Some(Action::CycleDelimiter),
            KeyCode::Home => Some(Action::Edit(EditOp::DocStart)),
            KeyCode::End => Some(Action::Edit(EditOp::DocEnd)),
            _ => None,
        };
    }

    if alt {
        // Alt+1..7 picks a delimiter in selector order
        return match key.code {
            KeyCode::Char(ch @ '1'..='9') => {
                DelimiterMode::from_index(ch as usize - '1' as usize).map(Action::SelectDelimiter)
            }
            _ => None,
        };
    }

    let op = match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Tab | KeyCode::BackTab => return Some(Action::FocusNext),
        KeyCode::Char(ch) => EditOp::Insert(ch),
        KeyCode::Enter => EditOp::Newline,
        KeyCode::Backspace => EditOp::Backspace,
        KeyCode::Delete => EditOp::Delete,
        KeyCode::Left => EditOp::Left,
        KeyCode::Right => EditOp::Right,
        KeyCode::Up => EditOp::Up,
        KeyCode::Down => EditOp::Down,
        KeyCode::Home => EditOp::Home,
        KeyCode::End => EditOp::End,
        _ => return None,
    };
    Some(Action::Edit(op))
}
