//! `PyType<name>` syntax.
//!
//! Printing is total over the closed type set; `Undefined` prints with an
//! empty name. Parsing is deliberately unsupported: types are only ever
//! reconstructed from the interned representation, never from text.

use std::fmt;

use pyir_core::{TypeId, TypeKind, TypeRegistry};

/// Error for type text that cannot be turned into a type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown type: `{text}`")]
    UnknownType { text: String },
}

/// `Display` adapter for a type handle.
///
/// # Panics
/// Formatting panics if the handle does not belong to the registry.
#[derive(Clone, Copy)]
pub struct TypeDisplay<'a> {
    types: &'a TypeRegistry,
    ty: TypeId,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.types.kind(self.ty) {
            TypeKind::Named(name) => write!(f, "PyType<{name}>"),
            TypeKind::Undefined => write!(f, "PyType<>"),
        }
    }
}

pub fn display_type(types: &TypeRegistry, ty: TypeId) -> TypeDisplay<'_> {
    TypeDisplay { types, ty }
}

pub fn print_type(types: &TypeRegistry, ty: TypeId) -> String {
    display_type(types, ty).to_string()
}

/// Always fails: the type grammar is not parsed from free text.
pub fn parse_type(text: &str) -> Result<TypeId, ParseError> {
    tracing::debug!(text, "rejecting type text");
    Err(ParseError::UnknownType {
        text: text.to_owned(),
    })
}
