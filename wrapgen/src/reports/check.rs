//! Check command report data structures.

use std::path::PathBuf;

use super::{
    DiagnosticSummary,
    output::{Output, Report},
};

/// Report data from a translation run without output.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the model description.
    pub model_path: PathBuf,
    /// Number of classes translated.
    pub class_count: usize,
    /// Number of enums translated.
    pub enum_count: usize,
    pub diagnostics: DiagnosticSummary,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        self.diagnostics.render(out, true);

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.model_path.display()));
        }
        out.key_value("Classes", &self.class_count.to_string());
        out.key_value("Enums", &self.enum_count.to_string());
        out.key_value(
            "Skipped members",
            &self.diagnostics.warnings.len().to_string(),
        );
    }
}
