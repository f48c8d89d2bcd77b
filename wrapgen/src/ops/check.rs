//! Check operation - translation without output.

use std::path::Path;

use wrapgen_codegen::Generator;

use super::Inputs;
use crate::reports::{CheckReport, DiagnosticSummary};

/// Execute the check operation.
///
/// Runs the engine over the whole model and returns its diagnostics.
pub fn check(inputs: &Inputs, model_path: &Path) -> CheckReport {
    let output = Generator::new(&inputs.api, &inputs.config).generate();

    CheckReport {
        model_path: model_path.to_path_buf(),
        class_count: output.classes.len(),
        enum_count: output.enums_header.enums.len(),
        diagnostics: DiagnosticSummary::new(&output.diagnostics),
    }
}
