//! Text-field buffers and the parse boundary.
//!
//! Blank means "use the default": every entry starts out seeded with its
//! default text, and falls back to it when the user clears the box. The
//! arithmetic core never defaults; only this layer does.

use std::fmt;

/// A field whose text could not be read as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadField {
    pub label: &'static str,
}

impl fmt::Display for BadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Please enter a valid number for {}", self.label)
    }
}

impl std::error::Error for BadField {}

/// One editable text field with a label and a blank-default.
#[derive(Debug, Clone)]
pub struct InputField {
    pub label: &'static str,
    pub buffer: String,
    default: &'static str,
}

impl InputField {
    pub fn new(label: &'static str, default: &'static str) -> Self {
        Self {
            label,
            buffer: default.to_string(),
            default,
        }
    }

    /// Append a character if it could belong to a number.
    ///
    /// Letters never enter the buffer, which keeps them free for hotkeys.
    /// Returns whether the buffer changed.
    pub fn insert(&mut self, c: char) -> bool {
        if c.is_ascii_digit() || c == '.' || c == '-' {
            self.buffer.push(c);
            true
        } else {
            false
        }
    }

    /// Delete the last character. Returns whether the buffer changed.
    pub fn backspace(&mut self) -> bool {
        self.buffer.pop().is_some()
    }

    /// Effective text: the buffer, or the default when blank.
    fn effective(&self) -> &str {
        let trimmed = self.buffer.trim();
        if trimmed.is_empty() {
            self.default
        } else {
            trimmed
        }
    }

    /// Parse as a float, blank falling back to the default.
    pub fn parse_f64(&self) -> Result<f64, BadField> {
        self.effective()
            .parse()
            .map_err(|_| BadField { label: self.label })
    }

    /// Parse as an unsigned integer, blank falling back to the default.
    pub fn parse_u32(&self) -> Result<u32, BadField> {
        self.effective()
            .parse()
            .map_err(|_| BadField { label: self.label })
    }
}
