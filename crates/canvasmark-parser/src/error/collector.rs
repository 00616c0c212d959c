//! Collector for accumulating diagnostics during a loading phase.

use log::warn;

use crate::error::{Diagnostic, ParseError};

/// Accumulates the diagnostics of one phase instead of failing on the first.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns `true` once an error-severity diagnostic has been emitted.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Finish collection.
    ///
    /// With errors present, every diagnostic (warnings included) is returned
    /// in a [`ParseError`]. Otherwise warnings are logged and `Ok(())` is
    /// returned.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.has_errors() {
            return Err(ParseError::new(self.diagnostics));
        }

        for diagnostic in &self.diagnostics {
            warn!(diagnostic:%; "Canvas loaded with warning");
        }
        Ok(())
    }
}
