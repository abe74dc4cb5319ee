//! Scaffold operation - write or preview a generated project.

use std::path::Path;

use eyre::{Context, Result};
use stackforge_templates::{Gate, Overwrite, ProjectStructure, TemplateId};
use tracing::info;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the scaffold operation.
pub struct ScaffoldOptions<'a> {
    /// Directory the project tree is written into.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// How to treat files that already exist.
    pub overwrite: Overwrite,
}

/// Execute the scaffold operation.
pub fn scaffold(project: &ProjectStructure, opts: ScaffoldOptions) -> Result<GenerateReport> {
    let result = if opts.dry_run {
        GenerationResult::Preview(preview(project))
    } else {
        let stats = project
            .write_to(opts.output_dir, opts.overwrite)
            .wrap_err_with(|| format!("Failed to write {}", opts.output_dir.display()))?;
        info!(
            written = stats.written,
            skipped = stats.skipped,
            dir = %opts.output_dir.display(),
            "project written"
        );

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: stats.written_paths,
            skipped: stats.skipped_paths,
            next_steps: next_steps(project.template(), opts.output_dir),
        })
    };

    Ok(GenerateReport {
        name: project.name().to_string(),
        template: project.template().to_string(),
        groups: enabled_groups(project),
        result,
    })
}

/// Build the preview listing of every file.
fn preview(project: &ProjectStructure) -> PreviewResult {
    PreviewResult {
        files: project
            .iter()
            .map(|f| PreviewFile {
                path: f.path().to_string(),
                language: f.language().to_string(),
                content: f.content().to_string(),
            })
            .collect(),
    }
}

fn enabled_groups(project: &ProjectStructure) -> Vec<&'static str> {
    let options = project.options();
    [Gate::Tests, Gate::Linter]
        .into_iter()
        .filter(|gate| gate.allows(&options))
        .map(|gate| gate.group())
        .collect()
}

fn next_steps(template: TemplateId, output_dir: &Path) -> Vec<String> {
    let mut steps = Vec::new();
    if output_dir != Path::new(".") {
        steps.push(format!("cd {}", output_dir.display()));
    }

    match template {
        TemplateId::NodeService => {
            steps.push("npm install".to_string());
            steps.push("npm run dev".to_string());
        }
        TemplateId::GoService => {
            steps.push("go mod tidy".to_string());
            steps.push("make run".to_string());
        }
        TemplateId::CliTool => {
            steps.push("npm install".to_string());
            steps.push("npm run build".to_string());
        }
    }
    steps
}
