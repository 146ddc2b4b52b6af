//! Graph representation: arenas, the operation catalog and construction.
//!
//! ```text
//! front-end → Builder → Module ← inference (set_type)
//!                          ↓
//!                      FoldPass
//! ```

mod attr;
mod builder;
mod error;
mod ids;
mod json;
mod module;
mod op;
mod verify;

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
mod json_tests;

pub use attr::Attribute;
pub use builder::Builder;
pub use error::{BuildError, BuildResult, ConsistencyError};
pub use ids::{FuncId, OpId, ValueId};
pub use module::{Function, Module, Use, ValueDef};
pub use op::{Arity, CallParts, OpKind, Operation};
