//! Hand-authored blueprint catalogs, one module per template.
//!
//! Each catalog is an immutable `static` slice declared in output order:
//! baseline files first, then the tests group, then the linter group.

pub(crate) mod cli_tool;
pub(crate) mod go_service;
pub(crate) mod node_service;
mod package_json;
mod shared;

use crate::Gate;

/// A key/value entry of a descriptor file, active under a gate.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub gate: Gate,
    pub key: &'static str,
    pub value: &'static str,
}

impl Entry {
    pub const fn always(key: &'static str, value: &'static str) -> Self {
        Self {
            gate: Gate::Always,
            key,
            value,
        }
    }

    pub const fn tests(key: &'static str, value: &'static str) -> Self {
        Self {
            gate: Gate::Tests,
            key,
            value,
        }
    }

    pub const fn linter(key: &'static str, value: &'static str) -> Self {
        Self {
            gate: Gate::Linter,
            key,
            value,
        }
    }
}
