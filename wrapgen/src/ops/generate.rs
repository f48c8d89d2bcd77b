//! Generate operation - template trees from the model.

use std::path::Path;

use eyre::{Context, Result};
use wrapgen_codegen::Generator;
use wrapgen_core::{File, Overwrite, WriteResult};

use super::Inputs;
use crate::reports::{
    DiagnosticSummary, GenerateReport, GenerationResult, PreviewFile, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated trees.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether existing files are left untouched.
    pub keep_existing: bool,
}

/// Execute the generate operation.
///
/// Runs the engine over the model and writes one JSON tree per artifact.
pub fn generate(inputs: &Inputs, opts: GenerateOptions) -> Result<GenerateReport> {
    let output = Generator::new(&inputs.api, &inputs.config).generate();
    let artifacts = output
        .artifacts(&inputs.config.aggregate_header)
        .wrap_err("Failed to serialize output trees")?;

    let result = if opts.dry_run {
        GenerationResult::Preview(
            artifacts
                .into_iter()
                .map(|a| PreviewFile {
                    path: a.path,
                    content: a.content,
                })
                .collect(),
        )
    } else {
        let overwrite = if opts.keep_existing {
            Overwrite::IfMissing
        } else {
            Overwrite::Always
        };
        let mut written = WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: Vec::new(),
            skipped: Vec::new(),
        };
        for artifact in artifacts {
            let file = File::new(opts.output_dir.join(&artifact.path), artifact.content)
                .overwrite(overwrite);
            match file
                .write()
                .wrap_err_with(|| format!("Failed to write {}", file.path().display()))?
            {
                WriteResult::Written => written.written.push(artifact.path),
                WriteResult::Skipped => written.skipped.push(artifact.path),
            }
        }
        GenerationResult::Written(written)
    };

    Ok(GenerateReport {
        class_count: output.classes.len(),
        enum_count: output.enums_header.enums.len(),
        diagnostics: DiagnosticSummary::new(&output.diagnostics),
        result,
    })
}
