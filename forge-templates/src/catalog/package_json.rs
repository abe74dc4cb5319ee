//! package.json descriptor shared by the TypeScript templates.

use super::Entry;
use crate::GenerationOptions;

const DEFAULT_VERSION: &str = "0.1.0";

/// The package.json configuration file.
///
/// The package name is always the `{{name}}` placeholder; a `bin` entry
/// under the same name is emitted for command-line tools.
#[derive(Debug, Clone, Copy)]
pub struct PackageJson {
    pub description: &'static str,
    pub main: &'static str,
    pub bin: Option<&'static str>,
    pub scripts: &'static [Entry],
    pub dependencies: &'static [Entry],
    pub dev_dependencies: &'static [Entry],
}

impl PackageJson {
    pub fn render(&self, options: &GenerationOptions) -> String {
        let mut out = String::from("{\n");
        out.push_str("  \"name\": \"{{name}}\",\n");
        out.push_str(&format!("  \"version\": \"{}\",\n", DEFAULT_VERSION));
        out.push_str(&format!("  \"description\": \"{}\",\n", self.description));
        out.push_str(&format!("  \"main\": \"{}\",\n", self.main));
        if let Some(bin) = self.bin {
            out.push_str(&format!("  \"bin\": {{\n    \"{{{{name}}}}\": \"{}\"\n  }},\n", bin));
        }
        out.push_str(&format!(
            "  \"scripts\": {},\n",
            Self::render_object(self.scripts, options)
        ));
        out.push_str(&format!(
            "  \"dependencies\": {},\n",
            Self::render_object(self.dependencies, options)
        ));
        out.push_str(&format!(
            "  \"devDependencies\": {}\n",
            Self::render_object(self.dev_dependencies, options)
        ));
        out.push_str("}\n");
        out
    }

    fn render_object(entries: &[Entry], options: &GenerationOptions) -> String {
        let lines: Vec<String> = entries
            .iter()
            .filter(|e| e.gate.allows(options))
            .map(|e| format!("    \"{}\": \"{}\"", e.key, e.value))
            .collect();

        if lines.is_empty() {
            "{}".to_string()
        } else {
            format!("{{\n{}\n  }}", lines.join(",\n"))
        }
    }
}
