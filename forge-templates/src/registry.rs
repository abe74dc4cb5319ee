//! Path-keyed collection of resolved files.
//!
//! Files keep their registration order, which is the catalog declaration
//! order. Registering the same path twice is a catalog defect and is
//! rejected instead of silently overwriting the earlier file.

use indexmap::{IndexMap, map::Entry};
use stackforge_core::GeneratedFile;

use crate::{Error, GenerationOptions, ProjectStructure, Result, TemplateId};

#[derive(Debug)]
pub(crate) struct FileRegistry {
    template: TemplateId,
    files: IndexMap<String, GeneratedFile>,
}

impl FileRegistry {
    pub fn new(template: TemplateId) -> Self {
        Self {
            template,
            files: IndexMap::new(),
        }
    }

    /// Register a file, failing if its path is already taken.
    pub fn register(&mut self, file: GeneratedFile) -> Result<()> {
        match self.files.entry(file.path().to_string()) {
            Entry::Occupied(entry) => Err(Box::new(Error::DuplicatePath {
                template: self.template.to_string(),
                path: entry.key().clone(),
            })),
            Entry::Vacant(entry) => {
                entry.insert(file);
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Finish registration, yielding files in registration order.
    pub fn into_structure(self, name: &str, options: GenerationOptions) -> ProjectStructure {
        ProjectStructure::new(
            name,
            self.template,
            options,
            self.files.into_values().collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use stackforge_core::Language;

    use super::*;

    #[test]
    fn test_registry_keeps_registration_order() {
        let mut registry = FileRegistry::new(TemplateId::CliTool);

        registry
            .register(GeneratedFile::new("package.json", "{}", Language::Json))
            .unwrap();
        registry
            .register(GeneratedFile::new("README.md", "", Language::Markdown))
            .unwrap();
        registry
            .register(GeneratedFile::new(".gitignore", "", Language::Plaintext))
            .unwrap();

        let structure = registry.into_structure("tool", GenerationOptions::default());
        let paths: Vec<_> = structure.paths().collect();
        assert_eq!(paths, vec!["package.json", "README.md", ".gitignore"]);
    }

    #[test]
    fn test_registry_rejects_duplicate_path() {
        let mut registry = FileRegistry::new(TemplateId::GoService);

        registry
            .register(GeneratedFile::new("Makefile", "a", Language::Makefile))
            .unwrap();
        let err = registry
            .register(GeneratedFile::new("Makefile", "b", Language::Makefile))
            .unwrap_err();

        assert!(matches!(
            *err,
            Error::DuplicatePath { ref template, ref path } if template == "go-gin" && path == "Makefile"
        ));
        assert_eq!(registry.len(), 1);
    }
}
