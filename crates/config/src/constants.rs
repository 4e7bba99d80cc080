//! Application-wide constants.

/// Log file name inside the cache directory
pub const LOG_FILE_NAME: &str = "listjoin.log";

/// Width of the line-number gutter in the input panel (digits + padding)
pub const MIN_GUTTER_WIDTH: u16 = 4;
