//! Engine diagnostics grouped by severity.

use wrapgen_codegen::{Diagnostic, Severity};

use super::output::Output;

/// Diagnostic messages, each followed by the symbol it is about.
#[derive(Debug, Default)]
pub struct DiagnosticSummary {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl DiagnosticSummary {
    pub fn new(diagnostics: &[Diagnostic]) -> Self {
        let mut summary = Self::default();
        for diag in diagnostics {
            let msg = if let Some(loc) = &diag.location {
                format!("{}\n  --> {}", diag.message, loc)
            } else {
                diag.message.clone()
            };

            match diag.severity {
                Severity::Error => summary.errors.push(msg),
                Severity::Warning => summary.warnings.push(msg),
                Severity::Info => summary.infos.push(msg),
            }
        }
        summary
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors and warnings; infos are listed only when `verbose`.
    pub fn render(&self, out: &mut dyn Output, verbose: bool) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        if verbose {
            for info in &self.infos {
                out.preformatted(&format!("info: {}", info));
            }
        }
        if !self.errors.is_empty() || !self.warnings.is_empty() {
            out.newline();
        }
    }
}
