use crate::variables::MAX_VARS;

/// Longest raw line handed to the dispatcher, matching a 256-byte read buffer.
pub const MAX_LINE_LEN: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_vars: usize,
    /// Bytes per dispatched line; longer lines are split.
    pub max_line_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_vars: MAX_VARS,
            max_line_len: MAX_LINE_LEN,
        }
    }
}
