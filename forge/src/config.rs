//! Optional `forge.toml` with generation defaults.
//!
//! ```toml
//! [defaults]
//! template = "go-gin"
//! tests = true
//! linter = false
//! ```

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use stackforge_templates::{GenerationOptions, TemplateId};
use thiserror::Error;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG: &str = "forge.toml";

pub type Result<T> = std::result::Result<T, Box<ConfigError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(forge::config_io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(forge::config_parse))]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForgeConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Values used when the command line leaves them out.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    pub template: Option<TemplateId>,
    #[serde(default)]
    pub tests: bool,
    #[serde(default)]
    pub linter: bool,
}

impl ForgeConfig {
    /// Load `path` if given, otherwise `./forge.toml` when it exists.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG).is_file() => Self::from_file(Path::new(DEFAULT_CONFIG)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn parse(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source: toml::de::Error| {
            Box::new(ConfigError::Parse {
                filename: filename.to_string(),
                src: NamedSource::new(filename, content.to_string()),
                span: source.span().map(SourceSpan::from),
                message: source.message().to_string(),
                source,
            })
        })
    }

    /// Merge command-line switches with configured defaults.
    ///
    /// A flag can only turn a switch on.
    pub fn options(&self, tests: bool, linter: bool) -> GenerationOptions {
        GenerationOptions {
            include_tests: tests || self.defaults.tests,
            include_linter: linter || self.defaults.linter,
        }
    }
}
