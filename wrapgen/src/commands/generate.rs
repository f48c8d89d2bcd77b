use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the JSON model description
    #[arg(short, long)]
    pub model: PathBuf,

    /// Path to wrapgen.toml (defaults to ./wrapgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated trees without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Leave files that already exist untouched
    #[arg(long)]
    pub keep_existing: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let inputs = ops::load(&self.model, self.config.as_deref()).unwrap_or_exit();

        let report = ops::generate(
            &inputs,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                keep_existing: self.keep_existing,
            },
        )
        .wrap_err("Failed to generate wrappers")?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
