//! Generation switches and the gates evaluated against them.

use serde::{Deserialize, Serialize};

/// Independent boolean switches for a generation request.
///
/// Every switch defaults to `false`, which excludes its file group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct GenerationOptions {
    /// Include test files and test dependencies.
    #[serde(default)]
    pub include_tests: bool,
    /// Include lint/format configuration and lint dependencies.
    #[serde(default)]
    pub include_linter: bool,
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tests(mut self) -> Self {
        self.include_tests = true;
        self
    }

    pub fn with_linter(mut self) -> Self {
        self.include_linter = true;
        self
    }

    /// All four switch combinations, in a stable order.
    pub fn combinations() -> [Self; 4] {
        let base = Self::default();
        [
            base,
            base.with_tests(),
            base.with_linter(),
            base.with_tests().with_linter(),
        ]
    }
}

/// Predicate deciding whether a blueprint or fragment is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Part of the baseline, always active.
    Always,
    /// Active when tests are included.
    Tests,
    /// Active when the linter is included.
    Linter,
}

impl Gate {
    /// Evaluate this gate against a set of options.
    pub fn allows(&self, options: &GenerationOptions) -> bool {
        match self {
            Gate::Always => true,
            Gate::Tests => options.include_tests,
            Gate::Linter => options.include_linter,
        }
    }

    /// Name of the file group this gate controls.
    pub fn group(&self) -> &'static str {
        match self {
            Gate::Always => "baseline",
            Gate::Tests => "tests",
            Gate::Linter => "linter",
        }
    }
}
