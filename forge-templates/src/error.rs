use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("project name must not be empty")]
    #[diagnostic(
        code(forge::empty_name),
        help("pass a name such as 'user-api' or 'my-tool'")
    )]
    EmptyProjectName,

    #[error("unknown template '{id}'")]
    #[diagnostic(code(forge::unknown_template), help("valid templates are: {expected}"))]
    UnknownTemplate { id: String, expected: String },

    #[error("template '{template}' produces '{path}' more than once")]
    #[diagnostic(code(forge::duplicate_path))]
    DuplicatePath { template: String, path: String },

    #[error("template '{template}' leaves placeholder '{{{{{placeholder}}}}}' unresolved in '{path}'")]
    #[diagnostic(code(forge::unresolved_placeholder))]
    UnresolvedPlaceholder {
        template: String,
        path: String,
        placeholder: String,
    },
}

impl Error {
    /// Create an unknown template error listing the supported identifiers
    pub fn unknown_template(id: impl Into<String>) -> Box<Self> {
        let expected = crate::TemplateId::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Box::new(Error::UnknownTemplate {
            id: id.into(),
            expected,
        })
    }
}
