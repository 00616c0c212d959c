//! Error codes for the canvas loader.
//!
//! Codes are organized by phase:
//! - `E0xx` - JSON decoding errors
//! - `E1xx` - Reference errors between nodes and edges
//! - `E2xx` - Geometry problems

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Decoding (E0xx)
    // =========================================================================
    /// Malformed JSON.
    E001,

    /// Well-formed JSON that does not describe a canvas.
    ///
    /// A required field is missing or a value has the wrong type.
    E002,

    /// The document ended in the middle of a value.
    E003,

    // =========================================================================
    // References (E1xx)
    // =========================================================================
    /// Duplicate node id.
    E100,

    /// An edge names a node that does not exist.
    E101,

    // =========================================================================
    // Geometry (E2xx)
    // =========================================================================
    /// Negative width or height.
    ///
    /// Reported as a warning: such a node never contains anything.
    E200,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "invalid JSON",
            ErrorCode::E002 => "invalid canvas structure",
            ErrorCode::E003 => "unexpected end of input",
            ErrorCode::E100 => "duplicate node id",
            ErrorCode::E101 => "edge references unknown node",
            ErrorCode::E200 => "negative node size",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E101.to_string(), "E101");
        assert_eq!(ErrorCode::E200.to_string(), "E200");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E002.description(), "invalid canvas structure");
        assert_eq!(ErrorCode::E100.description(), "duplicate node id");
    }
}
