//! The ordered result of one generation call.

use std::path::Path;

use eyre::Result;
use serde::Serialize;
use stackforge_core::{GeneratedFile, Overwrite, WriteResult};

use crate::{GenerationOptions, TemplateId};

/// A generated project: name, template, the options it was generated with
/// and its files in catalog order.
///
/// Paths are unique within one structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectStructure {
    name: String,
    template: TemplateId,
    options: GenerationOptions,
    files: Vec<GeneratedFile>,
}

impl ProjectStructure {
    pub(crate) fn new(
        name: &str,
        template: TemplateId,
        options: GenerationOptions,
        files: Vec<GeneratedFile>,
    ) -> Self {
        Self {
            name: name.to_string(),
            template,
            options,
            files,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn template(&self) -> TemplateId {
        self.template
    }

    pub fn options(&self) -> GenerationOptions {
        self.options
    }

    pub fn files(&self) -> &[GeneratedFile] {
        &self.files
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path())
    }

    /// Look up a file by its relative path.
    pub fn get(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path() == path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Write every file under `base`.
    ///
    /// Files are written in order. Returns statistics about what was written.
    pub fn write_to(&self, base: &Path, overwrite: Overwrite) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for file in &self.files {
            match file.write(base, overwrite)? {
                WriteResult::Written => {
                    stats.written += 1;
                    stats.written_paths.push(file.path().to_string());
                }
                WriteResult::Skipped => {
                    stats.skipped += 1;
                    stats.skipped_paths.push(file.path().to_string());
                }
            }
        }

        Ok(stats)
    }
}

impl<'a> IntoIterator for &'a ProjectStructure {
    type Item = &'a GeneratedFile;
    type IntoIter = std::slice::Iter<'a, GeneratedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Number of files written.
    pub written: usize,
    /// Number of files skipped (already existed).
    pub skipped: usize,
    /// Paths of written files.
    pub written_paths: Vec<String>,
    /// Paths of skipped files.
    pub skipped_paths: Vec<String>,
}

impl WriteStats {
    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written + self.skipped
    }
}
