//! The closed set of supported templates.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Blueprint, Error, Gate, GenerationOptions, catalog};

/// Identifier of a supported project template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// TypeScript Express microservice
    NodeService,
    /// Go gin microservice
    GoService,
    /// TypeScript command-line tool
    CliTool,
}

impl TemplateId {
    /// Every supported template, in display order.
    pub const ALL: [TemplateId; 3] = [
        TemplateId::NodeService,
        TemplateId::GoService,
        TemplateId::CliTool,
    ];

    /// Returns the template identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::NodeService => "node-express",
            TemplateId::GoService => "go-gin",
            TemplateId::CliTool => "ts-cli",
        }
    }

    /// One-line description for listings and prompts.
    pub fn description(&self) -> &'static str {
        match self {
            TemplateId::NodeService => "TypeScript microservice on Express",
            TemplateId::GoService => "Go microservice on gin",
            TemplateId::CliTool => "TypeScript command-line tool on commander",
        }
    }

    /// Whether the template produces a containerized service.
    pub fn is_service(&self) -> bool {
        matches!(self, TemplateId::NodeService | TemplateId::GoService)
    }

    /// The ordered blueprint catalog of this template.
    pub fn blueprints(&self) -> &'static [Blueprint] {
        match self {
            TemplateId::NodeService => catalog::node_service::BLUEPRINTS,
            TemplateId::GoService => catalog::go_service::BLUEPRINTS,
            TemplateId::CliTool => catalog::cli_tool::BLUEPRINTS,
        }
    }

    /// Count of catalog files per group for this template.
    pub fn summary(&self) -> TemplateSummary {
        let count = |gate: Gate| self.blueprints().iter().filter(|b| b.gate == gate).count();
        TemplateSummary {
            baseline: count(Gate::Always),
            tests: count(Gate::Tests),
            linter: count(Gate::Linter),
        }
    }
}

/// Catalog file counts per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSummary {
    pub baseline: usize,
    pub tests: usize,
    pub linter: usize,
}

impl TemplateSummary {
    /// Number of files produced for `options`.
    pub fn file_count(&self, options: &GenerationOptions) -> usize {
        let mut total = self.baseline;
        if options.include_tests {
            total += self.tests;
        }
        if options.include_linter {
            total += self.linter;
        }
        total
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::unknown_template(s))
    }
}

impl Serialize for TemplateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TemplateId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        id.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            TemplateId::from_str("node-express").unwrap(),
            TemplateId::NodeService
        );
        assert_eq!(TemplateId::from_str("go-gin").unwrap(), TemplateId::GoService);
        assert_eq!(TemplateId::from_str("ts-cli").unwrap(), TemplateId::CliTool);
        assert!(TemplateId::from_str("rails").is_err());
        assert!(TemplateId::from_str("").is_err());
        assert!(TemplateId::from_str("Go-Gin").is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for template in TemplateId::ALL {
            assert_eq!(template.to_string().parse::<TemplateId>().unwrap(), template);
        }
    }

    #[test]
    fn test_deserialize_rejects_unknown() {
        let err = serde_json::from_str::<TemplateId>(r#""django""#).unwrap_err();
        assert!(err.to_string().contains("unknown template 'django'"));
    }

    #[test]
    fn test_summary_file_count() {
        let summary = TemplateId::GoService.summary();

        assert_eq!(summary.tests, 1);
        assert_eq!(summary.linter, 1);
        assert_eq!(
            summary.file_count(&GenerationOptions::new().with_tests().with_linter()),
            summary.baseline + 2
        );
    }

    #[test]
    fn test_only_services_are_services() {
        assert!(TemplateId::NodeService.is_service());
        assert!(TemplateId::GoService.is_service());
        assert!(!TemplateId::CliTool.is_service());
    }
}
