//! Line numbering for the raw input view.

/// Line count and gutter labels derived from raw input.
///
/// Counts every line, blank ones included, so it can differ from the number
/// of items produced by [`crate::split_items`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMetadata {
    /// Number of lines, always >= 1
    pub count: usize,
    /// Ordinal labels `1..=count`
    pub labels: Vec<usize>,
}

impl LineMetadata {
    /// Derive metadata from raw text without trimming or filtering.
    pub fn derive(raw: &str) -> Self {
        let count = raw.split('\n').count();
        Self {
            count,
            labels: (1..=count).collect(),
        }
    }

    /// Badge text shown next to the input title
    pub fn badge(&self) -> String {
        format!(
            "{} {}",
            self.count,
            if self.count == 1 { "item" } else { "items" }
        )
    }
}

impl Default for LineMetadata {
    fn default() -> Self {
        Self::derive("")
    }
}
