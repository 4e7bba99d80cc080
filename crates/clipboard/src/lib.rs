//! Clipboard operations for listjoin.
//!
//! Provides cross-platform clipboard access using arboard behind the
//! [`ClipboardProvider`] trait, so the application can be driven by an
//! in-memory clipboard in tests.
//! On Linux, supports both CLIPBOARD and PRIMARY selections.

use arboard::Clipboard;
use std::sync::{Mutex, OnceLock};

#[cfg(target_os = "linux")]
use arboard::{GetExtLinux, LinuxClipboardKind, SetExtLinux};

/// Source and sink for clipboard text.
///
/// Errors are human-readable messages meant for the status bar.
pub trait ClipboardProvider {
    /// Read text from the clipboard.
    fn read_text(&mut self) -> Result<String, String>;

    /// Write text to the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

/// System clipboard backed by the global arboard instance.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn read_text(&mut self) -> Result<String, String> {
        paste()
    }

    fn write_text(&mut self, text: &str) -> Result<(), String> {
        copy(text)
    }
}

/// Global clipboard instance, `None` when no clipboard is available.
static CLIPBOARD: OnceLock<Option<Mutex<Clipboard>>> = OnceLock::new();

/// Get or initialize the global clipboard instance.
fn get_clipboard() -> Result<&'static Mutex<Clipboard>, String> {
    CLIPBOARD
        .get_or_init(|| Clipboard::new().ok().map(Mutex::new))
        .as_ref()
        .ok_or_else(|| "Clipboard is not available".to_string())
}

/// Copy text to system clipboard.
///
/// On Linux, copies to BOTH CLIPBOARD and PRIMARY selections.
pub fn copy(text: &str) -> Result<(), String> {
    if text.is_empty() {
        return Err("Cannot copy empty text".to_string());
    }

    let mut clipboard = get_clipboard()?
        .lock()
        .map_err(|e| format!("Failed to lock clipboard: {}", e))?;

    #[cfg(target_os = "linux")]
    {
        clipboard
            .set()
            .clipboard(LinuxClipboardKind::Clipboard)
            .text(text.to_string())
            .map_err(|e| format!("Failed to set clipboard text: {}", e))?;

        // PRIMARY is best effort
        let _ = clipboard
            .set()
            .clipboard(LinuxClipboardKind::Primary)
            .text(text.to_string());
    }

    #[cfg(not(target_os = "linux"))]
    clipboard
        .set_text(text)
        .map_err(|e| format!("Failed to set clipboard text: {}", e))?;

    Ok(())
}

/// Paste text from system clipboard.
///
/// On Linux, tries CLIPBOARD selection first, then falls back to PRIMARY.
pub fn paste() -> Result<String, String> {
    let mut clipboard = get_clipboard()?
        .lock()
        .map_err(|e| format!("Failed to lock clipboard: {}", e))?;

    #[cfg(target_os = "linux")]
    {
        if let Ok(text) = clipboard
            .get()
            .clipboard(LinuxClipboardKind::Clipboard)
            .text()
        {
            if !text.is_empty() {
                return Ok(text);
            }
        }

        clipboard
            .get()
            .clipboard(LinuxClipboardKind::Primary)
            .text()
            .map_err(|e| format!("Failed to read clipboard: {}", e))
    }

    #[cfg(not(target_os = "linux"))]
    clipboard
        .get_text()
        .map_err(|e| format!("Failed to read clipboard: {}", e))
}
