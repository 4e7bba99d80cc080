//! List join/split transforms for listjoin.
//!
//! This crate holds the pure part of the application:
//! - [`DelimiterSelection`] and [`DelimiterMode`] - which string joins items
//! - [`to_joined`] / [`to_lines`] - forward and inverse list transforms
//! - [`LineMetadata`] - line count and gutter labels for the raw input
//!
//! Nothing here performs IO or keeps state between calls. Every function is a
//! recomputation from the caller-owned raw text and delimiter selection.

mod delimiter;
mod line_meta;
mod transform;

pub use delimiter::{DelimiterMode, DelimiterSelection};
pub use line_meta::LineMetadata;
pub use transform::{split_items, to_joined, to_lines, trim_item};

/// Resolve the literal joining string for a selection.
pub fn resolve_delimiter(selection: &DelimiterSelection) -> &str {
    selection.resolve()
}

/// Derive line count and gutter labels for raw input text.
pub fn derive_line_metadata(raw: &str) -> LineMetadata {
    LineMetadata::derive(raw)
}
