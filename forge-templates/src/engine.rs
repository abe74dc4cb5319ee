//! The generation engine.

use stackforge_core::GeneratedFile;
use tracing::{debug, trace};

use crate::{
    Blueprint, Error, GenerationOptions, ProjectStructure, Result, TemplateId,
    placeholder::substitute, registry::FileRegistry,
};

/// Generate the project tree for `template`.
///
/// The result depends only on the arguments: identical inputs produce
/// byte-identical structures. A blank `project_name` is rejected.
pub fn generate(
    project_name: &str,
    template: TemplateId,
    options: GenerationOptions,
) -> Result<ProjectStructure> {
    if project_name.trim().is_empty() {
        return Err(Box::new(Error::EmptyProjectName));
    }

    let mut registry = FileRegistry::new(template);
    for blueprint in template.blueprints() {
        if !blueprint.is_included(&options) {
            trace!(path = blueprint.path, group = blueprint.gate.group(), "skipping blueprint");
            continue;
        }
        registry.register(resolve(blueprint, project_name, template, &options)?)?;
    }

    debug!(
        template = %template,
        name = project_name,
        include_tests = options.include_tests,
        include_linter = options.include_linter,
        files = registry.len(),
        "generated project"
    );

    Ok(registry.into_structure(project_name, options))
}

/// Generate from a template identifier string.
///
/// Unknown identifiers fail before any file is produced.
pub fn generate_by_id(
    project_name: &str,
    template_id: &str,
    options: GenerationOptions,
) -> Result<ProjectStructure> {
    let template = template_id.parse::<TemplateId>()?;
    generate(project_name, template, options)
}

fn resolve(
    blueprint: &Blueprint,
    project_name: &str,
    template: TemplateId,
    options: &GenerationOptions,
) -> Result<GeneratedFile> {
    let unresolved = |placeholder: String| {
        Box::new(Error::UnresolvedPlaceholder {
            template: template.to_string(),
            path: blueprint.path.to_string(),
            placeholder,
        })
    };

    let path = substitute(blueprint.path, project_name).map_err(unresolved)?;
    let content =
        substitute(&blueprint.content.resolve(options), project_name).map_err(unresolved)?;

    Ok(GeneratedFile::new(path, content, blueprint.language))
}

#[cfg(test)]
mod tests {
    use stackforge_core::Language;

    use super::*;
    use crate::Content;

    #[test]
    fn test_rejects_blank_name() {
        for name in ["", "   ", "\t\n"] {
            let err = generate(name, TemplateId::NodeService, GenerationOptions::new())
                .unwrap_err();
            assert!(matches!(*err, Error::EmptyProjectName));
        }
    }

    #[test]
    fn test_generate_by_id_rejects_unknown() {
        let err = generate_by_id("api", "spring-boot", GenerationOptions::new()).unwrap_err();
        assert!(matches!(*err, Error::UnknownTemplate { ref id, .. } if id == "spring-boot"));
    }

    #[test]
    fn test_generate_by_id_matches_generate() {
        let options = GenerationOptions::new().with_linter();
        assert_eq!(
            generate_by_id("api", "go-gin", options).unwrap(),
            generate("api", TemplateId::GoService, options).unwrap()
        );
    }

    #[test]
    fn test_resolve_substitutes_path_and_content() {
        let blueprint = Blueprint::new(
            "cmd/{{name}}/main.go",
            Language::Go,
            Content::Text("// {{name}}\n"),
        );
        let file = resolve(
            &blueprint,
            "billing",
            TemplateId::GoService,
            &GenerationOptions::new(),
        )
        .unwrap();

        assert_eq!(file.path(), "cmd/billing/main.go");
        assert_eq!(file.content(), "// billing\n");
        assert_eq!(file.language(), Language::Go);
    }

    #[test]
    fn test_resolve_reports_unknown_placeholder() {
        let blueprint = Blueprint::new("go.mod", Language::Go, Content::Text("module {{module}}\n"));
        let err = resolve(
            &blueprint,
            "billing",
            TemplateId::GoService,
            &GenerationOptions::new(),
        )
        .unwrap_err();

        assert!(matches!(
            *err,
            Error::UnresolvedPlaceholder { ref path, ref placeholder, .. }
                if path == "go.mod" && placeholder == "module"
        ));
    }
}
