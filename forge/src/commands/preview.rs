use std::path::Path;

use clap::Args;
use eyre::{Context, Result};
use stackforge_templates::Overwrite;

use super::GenerateArgs;
use crate::{
    ops::{self, ScaffoldOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PreviewCommand {
    #[command(flatten)]
    pub args: GenerateArgs,

    /// Print the project structure as JSON
    #[arg(long)]
    pub json: bool,
}

impl PreviewCommand {
    pub fn run(&self) -> Result<()> {
        let project = self.args.generate()?;

        if self.json {
            let json = serde_json::to_string_pretty(&project)
                .wrap_err("Failed to serialize project structure")?;
            println!("{json}");
            return Ok(());
        }

        let report = ops::scaffold(
            &project,
            ScaffoldOptions {
                output_dir: Path::new("."),
                dry_run: true,
                overwrite: Overwrite::IfMissing,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
