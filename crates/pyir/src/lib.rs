//! pyir: intermediate representation for lowering a dynamically-typed
//! language toward a statically-typed backend.
//!
//! Nodes are materialized with an `Undefined` result type and become concrete
//! once an external inference pass assigns types. Folding then collapses
//! nodes that the construction conventions made redundant.
//!
//! - `ir` - graph arena, operation catalog, builder, verification
//! - `fold` - local rewrite rules and the fixpoint fold pass
//! - `text` - type syntax and whole-module dumps
//! - `config` - fold and print options
//!
//! # Example
//!
//! ```
//! use pyir::{FoldConfig, FoldPass, Module};
//!
//! let mut module = Module::new();
//! let int = module.intern_type("int")?;
//! let main = module.add_function("main", &[int])?;
//!
//! let mut b = module.builder(main)?;
//! let x = b.arg(0, "x")?;
//! let one = b.constant(1)?;
//! let sum = b.binop(x, one, "+")?;
//!
//! module.set_type(x, int)?;
//! let stats = FoldPass::new(FoldConfig::default()).run(&mut module)?;
//! assert_eq!(stats.folded, 1);
//! assert_eq!(module.op_of(sum).unwrap().operands()[0], module.function(main).args()[0]);
//! # Ok::<(), pyir::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod fold;
pub mod ir;
pub mod text;


pub use config::{FoldConfig, PrintConfig};
pub use fold::{FoldPass, FoldStats, try_fold};
pub use ir::{
    Attribute, BuildError, BuildResult, Builder, CallParts, ConsistencyError, FuncId, Function,
    Module, OpId, OpKind, Operation, Use, ValueDef, ValueId,
};
pub use pyir_core::{Colors, InternError, TypeId, TypeKind, TypeRegistry};
pub use text::{ModulePrinter, ParseError, parse_type, print_type};

/// Errors surfaced by the IR layer.
///
/// Construction and consistency errors propagate to the pass that invoked the
/// core; whether a consistency fault aborts compilation is the driver's call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Consistency(#[from] ConsistencyError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl From<InternError> for Error {
    fn from(err: InternError) -> Self {
        Error::Build(err.into())
    }
}

/// Result type for IR operations.
pub type Result<T> = std::result::Result<T, Error>;
