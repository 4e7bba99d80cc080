//! Forward (lines to joined) and inverse (joined to lines) transforms.

use crate::DelimiterSelection;

/// Trim the whitespace set used for list items.
///
/// Same as [`str::trim`] except that a byte order mark is stripped and
/// U+0085 (NEL) is kept.
pub fn trim_item(text: &str) -> &str {
    text.trim_matches(|ch: char| (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{FEFF}')
}

/// Split raw text into items.
///
/// Splits on `\n` and `\r\n`, trims each piece and drops pieces that are
/// empty after trimming. Order is preserved.
pub fn split_items(raw: &str) -> Vec<&str> {
    raw.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(trim_item)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Join the non-blank lines of `raw` with the selected delimiter.
pub fn to_joined(raw: &str, selection: &DelimiterSelection) -> String {
    if raw.is_empty() {
        return String::new();
    }

    split_items(raw).join(selection.resolve())
}

/// Split `joined` on the selected delimiter and put each item on its own line.
///
/// The delimiter is matched as a literal substring. Callers must pass the
/// selection that is currently active; it is not inferred from the text.
pub fn to_lines(joined: &str, selection: &DelimiterSelection) -> String {
    if joined.is_empty() {
        return String::new();
    }

    // resolve() never yields an empty string, so split always makes progress
    joined
        .split(selection.resolve())
        .map(trim_item)
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
