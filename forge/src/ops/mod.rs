//! Command operations, separated from argument parsing and rendering.

mod list;
mod scaffold;

pub use list::list;
pub use scaffold::{ScaffoldOptions, scaffold};
