//! Static definitions of candidate files.

use stackforge_core::Language;

use crate::{Gate, GenerationOptions};

/// One independently toggled piece of a file's content.
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub gate: Gate,
    pub text: &'static str,
}

impl Fragment {
    pub const fn always(text: &'static str) -> Self {
        Self {
            gate: Gate::Always,
            text,
        }
    }

    pub const fn tests(text: &'static str) -> Self {
        Self {
            gate: Gate::Tests,
            text,
        }
    }

    pub const fn linter(text: &'static str) -> Self {
        Self {
            gate: Gate::Linter,
            text,
        }
    }
}

/// How a blueprint's content template is produced.
#[derive(Clone, Copy)]
pub enum Content {
    /// Fixed text.
    Text(&'static str),
    /// Ordered concatenation of the fragments whose gate allows.
    Fragments(&'static [Fragment]),
    /// Structured descriptor rendered from the options.
    Render(fn(&GenerationOptions) -> String),
}

impl Content {
    /// Produce the content template for the given options.
    ///
    /// The result may still contain placeholders.
    pub fn resolve(&self, options: &GenerationOptions) -> String {
        match self {
            Content::Text(text) => (*text).to_string(),
            Content::Fragments(fragments) => fragments
                .iter()
                .filter(|f| f.gate.allows(options))
                .map(|f| f.text)
                .collect(),
            Content::Render(render) => render(options),
        }
    }
}

impl std::fmt::Debug for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Content::Text(_) => f.write_str("Text"),
            Content::Fragments(fragments) => write!(f, "Fragments({})", fragments.len()),
            Content::Render(_) => f.write_str("Render"),
        }
    }
}

/// Static definition of one candidate file belonging to a template.
#[derive(Debug, Clone, Copy)]
pub struct Blueprint {
    /// Path pattern, may contain `{{name}}`.
    pub path: &'static str,
    pub language: Language,
    pub gate: Gate,
    pub content: Content,
}

impl Blueprint {
    /// A baseline file with fixed or fragment-composed content.
    pub const fn new(path: &'static str, language: Language, content: Content) -> Self {
        Self {
            path,
            language,
            gate: Gate::Always,
            content,
        }
    }

    /// Restrict this blueprint to a gate.
    pub const fn gated(mut self, gate: Gate) -> Self {
        self.gate = gate;
        self
    }

    /// Whether this blueprint is part of the output for `options`.
    pub fn is_included(&self, options: &GenerationOptions) -> bool {
        self.gate.allows(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const README: &[Fragment] = &[
        Fragment::always("# {{name}}\n"),
        Fragment::tests("## Testing\n"),
        Fragment::linter("## Linting\n"),
        Fragment::always("## License\n"),
    ];

    #[test]
    fn test_fragments_keep_declaration_order() {
        let content = Content::Fragments(README);
        let options = GenerationOptions::new().with_tests().with_linter();

        assert_eq!(
            content.resolve(&options),
            "# {{name}}\n## Testing\n## Linting\n## License\n"
        );
    }

    #[test]
    fn test_fragments_toggle_independently() {
        let content = Content::Fragments(README);

        assert_eq!(
            content.resolve(&GenerationOptions::new()),
            "# {{name}}\n## License\n"
        );
        assert_eq!(
            content.resolve(&GenerationOptions::new().with_linter()),
            "# {{name}}\n## Linting\n## License\n"
        );
    }

    #[test]
    fn test_render_receives_options() {
        fn render(options: &GenerationOptions) -> String {
            format!("tests={}", options.include_tests)
        }

        let content = Content::Render(render);
        assert_eq!(
            content.resolve(&GenerationOptions::new().with_tests()),
            "tests=true"
        );
    }

    #[test]
    fn test_gated_blueprint() {
        let blueprint = Blueprint::new(".golangci.yml", Language::Yaml, Content::Text(""))
            .gated(Gate::Linter);

        assert!(!blueprint.is_included(&GenerationOptions::new()));
        assert!(blueprint.is_included(&GenerationOptions::new().with_linter()));
    }
}
