//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod diagnostics;
mod generate;
mod output;

pub use check::CheckReport;
pub use diagnostics::DiagnosticSummary;
pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};
pub use output::{Report, TerminalOutput};
