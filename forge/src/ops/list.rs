//! List operation - describe the template catalog.

use stackforge_templates::TemplateId;

use crate::reports::{ListReport, TemplateInfo};

pub fn list() -> ListReport {
    ListReport {
        templates: TemplateId::ALL
            .iter()
            .map(|template| {
                let summary = template.summary();
                TemplateInfo {
                    id: template.as_str(),
                    description: template.description(),
                    baseline: summary.baseline,
                    tests: summary.tests,
                    linter: summary.linter,
                    containerized: template.is_service(),
                }
            })
            .collect(),
    }
}
