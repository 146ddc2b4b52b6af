//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{TypeId, TypeKind, TypeRegistry};

impl TypeRegistry {
    pub(crate) fn ensure_kind(&self, id: TypeId) -> TypeKind<'_> {
        self.try_kind(id).unwrap_or_else(|| {
            panic!(
                "TypeRegistry: type id {} not found \
                 (handle belongs to another registry)",
                id.as_u32()
            )
        })
    }
}
