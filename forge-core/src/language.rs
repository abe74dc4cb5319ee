//! Language tags for syntax-aware display.

use std::fmt;

use serde::Serialize;

/// Display language of a generated file.
///
/// Only used to pick a highlighter; the content is never checked against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    TypeScript,
    JavaScript,
    Go,
    Json,
    Yaml,
    Dockerfile,
    Markdown,
    Makefile,
    Plaintext,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
            Language::Go => "go",
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::Dockerfile => "dockerfile",
            Language::Markdown => "markdown",
            Language::Makefile => "makefile",
            Language::Plaintext => "plaintext",
        }
    }

    /// Infer the language from a forward-slash path.
    pub fn from_path(path: &str) -> Self {
        let file_name = path.rsplit('/').next().unwrap_or(path);

        match file_name {
            "Dockerfile" => return Language::Dockerfile,
            "Makefile" => return Language::Makefile,
            "go.mod" => return Language::Go,
            ".prettierrc" => return Language::Json,
            _ => {}
        }

        match file_name.rsplit_once('.').map(|(_, ext)| ext) {
            Some("ts") => Language::TypeScript,
            Some("js" | "mjs" | "cjs") => Language::JavaScript,
            Some("go") => Language::Go,
            Some("json") => Language::Json,
            Some("yml" | "yaml") => Language::Yaml,
            Some("md") => Language::Markdown,
            _ => Language::Plaintext,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Language::from_path("src/index.ts"), Language::TypeScript);
        assert_eq!(Language::from_path("jest.config.js"), Language::JavaScript);
        assert_eq!(Language::from_path("cmd/api/main.go"), Language::Go);
        assert_eq!(Language::from_path("go.mod"), Language::Go);
        assert_eq!(Language::from_path("package.json"), Language::Json);
        assert_eq!(Language::from_path(".eslintrc.json"), Language::Json);
        assert_eq!(Language::from_path(".prettierrc"), Language::Json);
        assert_eq!(Language::from_path("docker-compose.yml"), Language::Yaml);
        assert_eq!(Language::from_path("Dockerfile"), Language::Dockerfile);
        assert_eq!(Language::from_path("Makefile"), Language::Makefile);
        assert_eq!(Language::from_path("README.md"), Language::Markdown);
        assert_eq!(Language::from_path(".gitignore"), Language::Plaintext);
        assert_eq!(Language::from_path("LICENSE"), Language::Plaintext);
    }

    #[test]
    fn test_display() {
        assert_eq!(Language::TypeScript.to_string(), "typescript");
        assert_eq!(Language::Dockerfile.to_string(), "dockerfile");
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_string(&Language::TypeScript).unwrap(),
            r#""typescript""#
        );
        assert_eq!(serde_json::to_string(&Language::Yaml).unwrap(), r#""yaml""#);
    }
}
