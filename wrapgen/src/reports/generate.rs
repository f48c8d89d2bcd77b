//! Generate command report data structures.

use std::path::PathBuf;

use super::{
    DiagnosticSummary,
    output::{Output, Report},
};

/// Report data from wrapper generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of classes translated.
    pub class_count: usize,
    /// Number of enums translated.
    pub enum_count: usize,
    pub diagnostics: DiagnosticSummary,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files written, relative to the output directory.
    pub written: Vec<String>,
    /// Files left untouched because they already existed.
    pub skipped: Vec<String>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        self.diagnostics.render(out, false);

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Generated", &written.output_dir.display().to_string());
        out.preformatted(&format!(
            "{} class{}, {} enum{}",
            self.class_count,
            if self.class_count == 1 { "" } else { "es" },
            self.enum_count,
            if self.enum_count == 1 { "" } else { "s" }
        ));

        if !written.written.is_empty() {
            out.newline();
            out.section("Written");
            for path in &written.written {
                out.added_item(path);
            }
        }

        if !written.skipped.is_empty() {
            out.newline();
            out.section("Skipped (already exists)");
            for path in &written.skipped {
                out.list_item(path);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}
