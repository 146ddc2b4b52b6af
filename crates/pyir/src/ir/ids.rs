//! Arena handles.
//!
//! All cross-references in the graph are plain indices into the arenas owned
//! by `Module`. Handles are only meaningful for the module that issued them.

use std::fmt;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            #[inline]
            pub fn as_u32(self) -> u32 {
                self.0
            }

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

arena_id!(
    /// Index into `Module::funcs`.
    FuncId,
    "@f"
);

arena_id!(
    /// Index into `Module::ops`.
    OpId,
    "op"
);

arena_id!(
    /// Index into `Module::values`. Printed in SSA style (`%3`).
    ValueId,
    "%"
);
