use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use stackforge_templates::Overwrite;

use super::GenerateArgs;
use crate::{
    ops::{self, ScaffoldOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct NewCommand {
    #[command(flatten)]
    pub args: GenerateArgs,

    /// Output directory (defaults to ./<name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite files that already exist
    #[arg(long)]
    pub force: bool,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl NewCommand {
    /// Run the new command
    pub fn run(&self) -> Result<()> {
        let project = self.args.generate()?;

        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(project.name()));
        let overwrite = if self.force {
            Overwrite::Always
        } else {
            Overwrite::IfMissing
        };

        let report = ops::scaffold(
            &project,
            ScaffoldOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                overwrite,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
