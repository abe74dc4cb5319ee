//! Properties that must hold for every template and option combination.

use std::collections::HashSet;

use stackforge_templates::{
    Error, GeneratedFile, GenerationOptions, Language, ProjectStructure, TemplateId, generate,
    generate_by_id,
};

fn every_request() -> Vec<(TemplateId, GenerationOptions)> {
    TemplateId::ALL
        .into_iter()
        .flat_map(|t| GenerationOptions::combinations().map(|o| (t, o)))
        .collect()
}

fn files_of(project: &ProjectStructure) -> Vec<(&str, &str)> {
    project.iter().map(|f| (f.path(), f.content())).collect()
}

/// Files in `larger` that are not in `smaller`, by path.
fn added<'a>(larger: &'a ProjectStructure, smaller: &ProjectStructure) -> Vec<&'a GeneratedFile> {
    larger.iter().filter(|f| !smaller.contains(f.path())).collect()
}

fn find_placeholder(s: &str) -> Option<&str> {
    let start = s.find("{{")?;
    let after = &s[start + 2..];
    let end = after.find("}}")?;
    let key = &after[..end];
    (!key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')).then_some(key)
}

#[test]
fn test_generation_is_deterministic() {
    for (template, options) in every_request() {
        let first = generate("svc", template, options).unwrap();
        let second = generate("svc", template, options).unwrap();

        assert_eq!(first, second, "{template} {options:?}");
    }
}

#[test]
fn test_paths_are_unique() {
    for (template, options) in every_request() {
        let project = generate("svc", template, options).unwrap();
        let mut seen = HashSet::new();

        for path in project.paths() {
            assert!(seen.insert(path), "{template} {options:?}: duplicate {path}");
        }
    }
}

#[test]
fn test_tests_switch_adds_a_superset_independent_of_linter() {
    for template in TemplateId::ALL {
        let mut added_files = Vec::new();

        for linter in [false, true] {
            let base = GenerationOptions {
                include_tests: false,
                include_linter: linter,
            };
            let without = generate("svc", template, base).unwrap();
            let with = generate("svc", template, base.with_tests()).unwrap();

            for path in without.paths() {
                assert!(with.contains(path), "{template}: lost {path}");
            }
            let extra = added(&with, &without);
            assert!(!extra.is_empty(), "{template}: tests added nothing");
            added_files.push(extra.into_iter().cloned().collect::<Vec<_>>());
        }

        assert_eq!(added_files[0], added_files[1], "{template}");
    }
}

#[test]
fn test_linter_switch_adds_a_superset_independent_of_tests() {
    for template in TemplateId::ALL {
        let mut added_files = Vec::new();

        for tests in [false, true] {
            let base = GenerationOptions {
                include_tests: tests,
                include_linter: false,
            };
            let without = generate("svc", template, base).unwrap();
            let with = generate("svc", template, base.with_linter()).unwrap();

            for path in without.paths() {
                assert!(with.contains(path), "{template}: lost {path}");
            }
            let extra = added(&with, &without);
            assert!(!extra.is_empty(), "{template}: linter added nothing");
            added_files.push(extra.into_iter().cloned().collect::<Vec<_>>());
        }

        assert_eq!(added_files[0], added_files[1], "{template}");
    }
}

#[test]
fn test_optional_groups_follow_baseline() {
    for template in TemplateId::ALL {
        let base = generate("svc", template, GenerationOptions::new()).unwrap();
        let full = generate(
            "svc",
            template,
            GenerationOptions::new().with_tests().with_linter(),
        )
        .unwrap();

        let prefix: Vec<_> = full.paths().take(base.len()).collect();
        let baseline: Vec<_> = base.paths().collect();
        assert_eq!(prefix, baseline, "{template}");
    }
}

#[test]
fn test_no_placeholder_survives() {
    for (template, options) in every_request() {
        let project = generate("svc", template, options).unwrap();

        for file in &project {
            assert_eq!(find_placeholder(file.path()), None, "{}", file.path());
            assert_eq!(find_placeholder(file.content()), None, "{}", file.path());
        }
    }
}

#[test]
fn test_names_only_change_name_positions() {
    const FIRST: &str = "alpha-ledger";
    const SECOND: &str = "zeta-billing-service";

    for (template, options) in every_request() {
        let first = generate(FIRST, template, options).unwrap();
        let second = generate(SECOND, template, options).unwrap();
        assert_eq!(first.len(), second.len());

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(
                a.path().replace(FIRST, "{{name}}"),
                b.path().replace(SECOND, "{{name}}")
            );
            assert_eq!(
                a.content().replace(FIRST, "{{name}}"),
                b.content().replace(SECOND, "{{name}}"),
                "{template}: {}",
                a.path()
            );
            assert_eq!(a.language(), b.language());
        }
    }
}

#[test]
fn test_name_is_inserted_verbatim() {
    let name = "Weird Name {{name}} ü";
    let project = generate(name, TemplateId::GoService, GenerationOptions::new()).unwrap();

    assert!(project.contains(&format!("cmd/{name}/main.go")));
    assert!(
        project
            .get("go.mod")
            .unwrap()
            .content()
            .starts_with(&format!("module github.com/example/{name}\n"))
    );
}

#[test]
fn test_language_tags_are_lowercase_identifiers() {
    let known = [
        "typescript",
        "javascript",
        "go",
        "json",
        "yaml",
        "dockerfile",
        "markdown",
        "makefile",
        "plaintext",
    ];

    for (template, options) in every_request() {
        for file in &generate("svc", template, options).unwrap() {
            assert!(known.contains(&file.language().as_str()), "{}", file.path());
            assert_eq!(file.language(), Language::from_path(file.path()));
        }
    }
}

#[test]
fn test_unknown_templates_never_produce_files() {
    for id in ["", "node", "NODE-EXPRESS", "go-gin ", "rails", "ts-cli\n"] {
        let result = generate_by_id("svc", id, GenerationOptions::new().with_tests());
        match result {
            Err(err) => assert!(matches!(*err, Error::UnknownTemplate { .. }), "{id:?}"),
            Ok(project) => panic!("{id:?} produced {} files", project.len()),
        }
    }
}

#[test]
fn test_generation_is_thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let options = GenerationOptions::combinations()[i];
                generate("svc", TemplateId::NodeService, options).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let project = handle.join().unwrap();
        let expected = generate(
            "svc",
            TemplateId::NodeService,
            GenerationOptions::combinations()[i],
        )
        .unwrap();
        assert_eq!(files_of(&project), files_of(&expected));
    }
}
