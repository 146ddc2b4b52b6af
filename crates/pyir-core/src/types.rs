//! Interned types.
//!
//! Every type is a `TypeId` handle into a `TypeRegistry`. Two handles from the
//! same registry are equal iff they denote the same type, so type equality
//! anywhere in the graph is a single integer comparison.
//!
//! The type set is closed:
//! - `Undefined`: result type not yet computed by inference
//! - `Named`: a nominal type identified by a non-empty name

use indexmap::IndexSet;

/// A lightweight handle to an interned type.
///
/// Handles are only meaningful for the registry that produced them.
/// `TypeId::UNDEFINED` is valid for every registry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TypeId(u32);

impl TypeId {
    /// The "not yet inferred" placeholder. Reserved at index 0.
    pub const UNDEFINED: TypeId = TypeId(0);

    /// Raw index for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Create a TypeId from a raw index. Use only for deserialization.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn is_undefined(self) -> bool {
        self == Self::UNDEFINED
    }
}

/// Borrowed view of an interned type.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TypeKind<'a> {
    Undefined,
    Named(&'a str),
}

impl<'a> TypeKind<'a> {
    /// The nominal name, or `None` for `Undefined`.
    pub fn name(self) -> Option<&'a str> {
        match self {
            TypeKind::Undefined => None,
            TypeKind::Named(name) => Some(name),
        }
    }
}

/// Errors raised while interning a type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    /// The empty name is reserved for `Undefined` and cannot be interned.
    #[error("type name must not be empty")]
    EmptyName,
}

/// Type interner. Deduplicates names and hands out `TypeId` handles.
///
/// Slot 0 holds the empty name and stands for `Undefined`; every other slot
/// is a `Named` type. Entries are never evicted.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    names: IndexSet<Box<str>>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    pub fn new() -> Self {
        let mut names = IndexSet::new();
        names.insert(Box::from(""));
        Self { names }
    }

    /// Intern a type name, returning its canonical handle.
    ///
    /// Equal names always yield the identical handle.
    pub fn intern(&mut self, name: &str) -> Result<TypeId, InternError> {
        if name.is_empty() {
            return Err(InternError::EmptyName);
        }

        if let Some(index) = self.names.get_index_of(name) {
            return Ok(TypeId(index as u32));
        }

        let (index, _) = self.names.insert_full(Box::from(name));
        let id = TypeId(index as u32);
        tracing::trace!(name, id = id.0, "type interned");
        Ok(id)
    }

    /// The canonical `Undefined` handle.
    #[inline]
    pub fn undefined(&self) -> TypeId {
        TypeId::UNDEFINED
    }

    /// Look up a named type without interning it.
    pub fn get(&self, name: &str) -> Option<TypeId> {
        if name.is_empty() {
            return None;
        }
        self.names.get_index_of(name).map(|i| TypeId(i as u32))
    }

    /// Whether `id` was produced by this registry.
    #[inline]
    pub fn contains(&self, id: TypeId) -> bool {
        (id.0 as usize) < self.names.len()
    }

    /// Try to view a handle, returning None if it is foreign to this registry.
    pub fn try_kind(&self, id: TypeId) -> Option<TypeKind<'_>> {
        let name = self.names.get_index(id.0 as usize)?;
        if id.is_undefined() {
            Some(TypeKind::Undefined)
        } else {
            Some(TypeKind::Named(name))
        }
    }

    /// View a handle.
    ///
    /// # Panics
    /// Panics if the handle was not created by this registry.
    pub fn kind(&self, id: TypeId) -> TypeKind<'_> {
        self.ensure_kind(id)
    }

    /// Number of named types (the `Undefined` slot is not counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len() - 1
    }

    /// Whether no named type has been interned yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over named types in interning order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &str)> {
        self.names
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, name)| (TypeId(i as u32), &**name))
    }
}
