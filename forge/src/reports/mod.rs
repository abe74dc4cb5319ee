//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod generate;
mod list;
mod output;

pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use list::{ListReport, TemplateInfo};
pub use output::{Report, TerminalOutput};
#[cfg(test)]
pub use output::CapturedOutput;
