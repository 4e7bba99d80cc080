//! User actions dispatched into [`crate::AppState`].

use listjoin_transform::DelimiterMode;

/// Discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Edit or move the cursor in the focused field
    Edit(EditOp),
    /// Switch to a delimiter mode
    SelectDelimiter(DelimiterMode),
    /// Switch to the next delimiter mode
    CycleDelimiter,
    /// Replace the custom delimiter text
    SetCustom(String),
    /// Split the output back into lines and make it the new input
    Reverse,
    /// Copy the output to the clipboard
    Copy,
    /// Replace the input with clipboard text
    Paste,
    /// Empty the input and output
    Clear,
    /// Move focus between the input and the custom delimiter field
    FocusNext,
    Quit,
}

/// Text edit or cursor movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Insert(char),
    /// Text delivered by the terminal as a bracketed paste
    InsertText(String),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    DocStart,
    DocEnd,
}
