//! Project generation report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from scaffolding a project.
#[derive(Debug)]
pub struct GenerateReport {
    /// Project name.
    pub name: String,

    /// Template identifier.
    pub template: String,

    /// Enabled option groups (e.g. "tests").
    pub groups: Vec<&'static str>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of project generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Newly written files.
    pub written: Vec<String>,
    /// Existing files left untouched.
    pub skipped: Vec<String>,
    /// Commands to run next.
    pub next_steps: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// Language tag.
    pub language: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_header(&self, out: &mut dyn Output) {
        out.key_value("Project", &self.name);
        out.key_value("Template", &self.template);
        if !self.groups.is_empty() {
            out.key_value("Options", &self.groups.join(", "));
        }
        out.newline();
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        self.render_header(out);

        out.section(&format!("Created in {}", written.output_dir.display()));
        for path in &written.written {
            out.added_item(path);
        }

        if !written.skipped.is_empty() {
            out.newline();
            out.section("Already present (use --force to overwrite)");
            for path in &written.skipped {
                out.skipped_item(path);
            }
        }

        if !written.next_steps.is_empty() {
            out.newline();
            out.section("Next steps");
            for step in &written.next_steps {
                out.list_item(step);
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        self.render_header(out);

        for file in &preview.files {
            out.divider(&format!("{} ({})", file.path, file.language));
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
