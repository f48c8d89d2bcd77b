//! Diagnostics recorded while translating.
//!
//! Each skipped member or artifact yields one [`Diagnostic`] naming the
//! fully qualified symbol and the reason it was skipped.

use serde::Serialize;

use crate::Error;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A whole artifact could not be produced.
    Error,
    /// A member was dropped from its artifact.
    Warning,
    /// A symbol was skipped on purpose.
    Info,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message from a translation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// The step that produced this diagnostic (e.g., "class", "method").
    pub phase: String,
    pub message: String,
    /// Fully qualified symbol the diagnostic is about.
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Diagnostic for a member or artifact dropped because of `error`.
    ///
    /// Escaped symbols are intentional and reported as info; anything else
    /// is reported at `severity`.
    pub fn skipped(
        severity: Severity,
        phase: impl Into<String>,
        symbol: impl Into<String>,
        error: &Error,
    ) -> Self {
        let symbol = symbol.into();
        let message = format!("could not translate {}: {}", symbol, error);
        let diag = match error {
            Error::EscapedSymbol { .. } => Self::info(phase, message),
            _ => Self {
                severity,
                phase: phase.into(),
                message,
                location: None,
            },
        };
        diag.at(symbol)
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}
