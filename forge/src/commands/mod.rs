mod completions;
mod list;
mod new;
mod preview;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use list::ListCommand;
use miette::Diagnostic;
use new::NewCommand;
use preview::PreviewCommand;
use stackforge_templates::{ProjectStructure, TemplateId, generate};

use crate::config::ForgeConfig;

/// Extension trait for exiting on diagnostic errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "forge")]
#[command(version)]
#[command(about = "Scaffold starter projects from built-in templates")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::New(cmd) => cmd.run(),
            Commands::Preview(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project on disk
    New(NewCommand),

    /// Print the files a project would contain
    Preview(PreviewCommand),

    /// List available templates
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Arguments shared by every command that generates a project.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Project name, substituted into paths and file contents
    pub name: String,

    /// Template to use (node-express, go-gin, ts-cli)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Include test files and test dependencies
    #[arg(long)]
    pub tests: bool,

    /// Include lint configuration and lint dependencies
    #[arg(long)]
    pub lint: bool,

    /// Path to forge.toml (defaults to ./forge.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Resolve template and options from flags, config and prompt, then generate.
    pub fn generate(&self) -> Result<ProjectStructure> {
        let config = ForgeConfig::discover(self.config.as_deref()).unwrap_or_exit();

        let template = match (&self.template, config.defaults.template) {
            (Some(id), _) => id.parse::<TemplateId>().unwrap_or_exit(),
            (None, Some(template)) => template,
            (None, None) => prompt_template()?,
        };
        let options = config.options(self.tests, self.lint);

        Ok(generate(&self.name, template, options).unwrap_or_exit())
    }
}

fn prompt_template() -> Result<TemplateId> {
    let items: Vec<String> = TemplateId::ALL
        .iter()
        .map(|t| format!("{:<14} {}", t.as_str(), t.description()))
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a template")
        .items(&items)
        .default(0)
        .interact()
        .wrap_err("Failed to get template selection")?;

    Ok(TemplateId::ALL[selection])
}
