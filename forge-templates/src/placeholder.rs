//! `{{name}}` placeholder substitution.
//!
//! Substitution is a single left-to-right pass over the template, so a
//! project name that itself looks like a placeholder is inserted verbatim
//! and never re-expanded.

/// Placeholder key replaced by the project name.
pub const PROJECT_NAME: &str = "name";

/// Replace every `{{name}}` in `template` with `project_name`.
///
/// A `{{` that does not open an identifier-shaped placeholder (e.g. a JSX
/// style object) is copied through unchanged. Any other identifier
/// placeholder is returned as the error value.
pub(crate) fn substitute(template: &str, project_name: &str) -> Result<String, String> {
    let mut out = String::with_capacity(template.len() + project_name.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find("}}") {
            Some(end) if is_placeholder_key(&after[..end]) => {
                let key = &after[..end];
                if key != PROJECT_NAME {
                    return Err(key.to_string());
                }
                out.push_str(project_name);
                rest = &after[end + 2..];
            }
            _ => {
                out.push_str("{{");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

fn is_placeholder_key(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
