//! Template catalog and generation engine for stackforge.
//!
//! [`generate`] turns a project name, a [`TemplateId`] and a set of
//! [`GenerationOptions`] into a [`ProjectStructure`]: an ordered list of
//! files with the project name substituted into paths and contents.
//!
//! # Module Organization
//!
//! - [`TemplateId`] - the closed set of templates and their catalogs
//! - [`Blueprint`], [`Content`], [`Fragment`] - static file definitions
//! - [`Gate`] - option predicates deciding which files and fragments apply
//! - [`ProjectStructure`] - the generation result
//!
//! # Example
//!
//! ```
//! use stackforge_templates::{GenerationOptions, TemplateId, generate};
//!
//! let project = generate(
//!     "user-api",
//!     TemplateId::NodeService,
//!     GenerationOptions::new().with_tests(),
//! )
//! .unwrap();
//!
//! assert!(project.contains("tests/health.test.ts"));
//! assert!(!project.contains(".eslintrc.json"));
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod blueprint;
mod catalog;
mod engine;
mod error;
mod options;
mod placeholder;
mod registry;
mod structure;
mod template;

pub use blueprint::{Blueprint, Content, Fragment};
pub use engine::{generate, generate_by_id};
pub use error::{Error, Result};
pub use options::{Gate, GenerationOptions};
pub use placeholder::PROJECT_NAME;
pub use stackforge_core::{GeneratedFile, Language, Overwrite};
pub use structure::{ProjectStructure, WriteStats};
pub use template::{TemplateId, TemplateSummary};
