//! Template listing report.

use super::output::{Output, Report};

/// Report data for the template catalog.
#[derive(Debug)]
pub struct ListReport {
    pub templates: Vec<TemplateInfo>,
}

/// Catalog information for one template.
#[derive(Debug)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub description: &'static str,
    pub baseline: usize,
    pub tests: usize,
    pub linter: usize,
    pub containerized: bool,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Templates");
        for template in &self.templates {
            out.list_item(&format!("{:<14} {}", template.id, template.description));
        }

        for template in &self.templates {
            out.newline();
            out.section(template.id);
            out.key_value("  baseline files", &template.baseline.to_string());
            out.key_value("  --tests adds", &template.tests.to_string());
            out.key_value("  --lint adds", &template.linter.to_string());
            out.key_value(
                "  container",
                if template.containerized { "yes" } else { "no" },
            );
        }
    }
}
