//! Construction and consistency errors.

use pyir_core::InternError;

use super::{FuncId, OpId, ValueId};

/// A node (or type) could not be created as requested.
///
/// Raised synchronously by the call that would have produced the malformed
/// node; the graph is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Intern(#[from] InternError),

    #[error("`{kind}` expects {expected} operands, got {found}")]
    OperandCount {
        kind: &'static str,
        expected: String,
        found: usize,
    },

    #[error("call has {names} keyword names but {values} keyword values")]
    KeywordArity { names: usize, values: usize },

    #[error("keyword section starts at operand {kw_start}, but the call has {operands} operands")]
    KeywordStart { kw_start: usize, operands: usize },

    #[error("keyword argument `{0}` repeated")]
    DuplicateKeyword(String),

    #[error("keyword argument name must not be empty")]
    EmptyKeyword,

    #[error("unknown value {0}")]
    UnknownValue(ValueId),

    #[error("unknown function {0}")]
    UnknownFunction(FuncId),

    #[error("{value} belongs to {owner} and cannot be read from {func}")]
    ForeignOperand {
        value: ValueId,
        owner: FuncId,
        func: FuncId,
    },

    #[error("{0} was folded away")]
    DeadValue(ValueId),

    #[error("type id {0} does not belong to this module's registry")]
    ForeignType(u32),

    #[error("type of {0} was already assigned")]
    TypeAlreadyAssigned(ValueId),

    #[error("cannot assign the undefined type to {0}")]
    UndefinedAssignment(ValueId),
}

pub type BuildResult<T> = std::result::Result<T, BuildError>;

/// The graph contradicts itself.
///
/// Indicates a bug in an earlier pass rather than a user-facing diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsistencyError {
    #[error("invalid function args: {op} reads argument {index} of a function with {arity} arguments")]
    ArgIndexOutOfRange { op: OpId, index: u32, arity: usize },

    #[error("invalid function args: {op} has type {found} but argument {index} is {expected}")]
    ArgTypeMismatch {
        op: OpId,
        index: u32,
        expected: String,
        found: String,
    },

    #[error("{op} operand {operand} refers to unknown value {value}")]
    DanglingOperand { op: OpId, operand: usize, value: ValueId },

    #[error("{op} operand {operand} reads {value} from another function")]
    ForeignOperand { op: OpId, operand: usize, value: ValueId },

    #[error("{op} operand {operand} reads {value}, whose definition was folded away")]
    DeadOperand { op: OpId, operand: usize, value: ValueId },

    #[error("{op} operand {operand} reads {value}, which does not record the use")]
    MissingUse { op: OpId, operand: usize, value: ValueId },

    #[error("{value} records a use by {op} that does not exist")]
    StaleUse { value: ValueId, op: OpId },

    #[error("{value} is not defined where it claims to be")]
    BrokenDefinition { value: ValueId },

    #[error("{op} has {found} operands, its kind expects {expected}")]
    MalformedOperands {
        op: OpId,
        expected: String,
        found: usize,
    },
}
