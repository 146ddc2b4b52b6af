#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the pyir type system.
//!
//! - `TypeRegistry`: per-unit interner for the closed type set
//! - `TypeId`: O(1)-comparable handle into a registry
//! - `Colors`: ANSI palette shared by the textual printers

mod colors;
mod invariants;
mod types;

#[cfg(test)]
mod types_tests;

pub use colors::Colors;
pub use types::{InternError, TypeId, TypeKind, TypeRegistry};
