use std::path::{Path, PathBuf};

use eyre::Result;
use serde::Serialize;

use crate::Language;

/// A fully resolved file produced by the generation engine.
///
/// Paths are relative and forward-slash delimited so they can be shown as a
/// tree or written into an archive as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    path: String,
    content: String,
    language: Language,
}

impl GeneratedFile {
    /// Create a new generated file.
    pub fn new(path: impl Into<String>, content: impl Into<String>, language: Language) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            language,
        }
    }

    /// Relative path of the file inside the project.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// File content, written verbatim.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Language tag used for syntax-aware display.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Absolute location of this file under `base`.
    pub fn full_path(&self, base: &Path) -> PathBuf {
        self.path
            .split('/')
            .fold(base.to_path_buf(), |acc, part| acc.join(part))
    }

    /// Write the file under `base` according to the overwrite rule.
    pub fn write(&self, base: &Path, overwrite: Overwrite) -> Result<WriteResult> {
        let path = self.full_path(base);

        match overwrite {
            Overwrite::Always => {
                write_file(&path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Only create if file doesn't exist
    #[default]
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_full_path_splits_on_forward_slash() {
        let file = GeneratedFile::new("cmd/api/main.go", "", Language::Go);
        let base = Path::new("out");

        assert_eq!(
            file.full_path(base),
            base.join("cmd").join("api").join("main.go")
        );
    }

    #[test]
    fn test_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "original").unwrap();

        let file = GeneratedFile::new("README.md", "updated", Language::Markdown);
        let result = file.write(temp.path(), Overwrite::Always).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("README.md")).unwrap(),
            "updated"
        );
    }

    #[test]
    fn test_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();

        let file = GeneratedFile::new("src/index.ts", "export {};\n", Language::TypeScript);
        let result = file.write(temp.path(), Overwrite::IfMissing).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("src").join("index.ts")).unwrap(),
            "export {};\n"
        );
    }

    #[test]
    fn test_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "user edits").unwrap();

        let file = GeneratedFile::new("package.json", "{}", Language::Json);
        let result = file.write(temp.path(), Overwrite::IfMissing).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("package.json")).unwrap(),
            "user edits"
        );
    }

    #[test]
    fn test_serialize() {
        let file = GeneratedFile::new("Dockerfile", "FROM scratch\n", Language::Dockerfile);
        let json = serde_json::to_value(&file).unwrap();

        assert_eq!(json["path"], "Dockerfile");
        assert_eq!(json["language"], "dockerfile");
    }
}
