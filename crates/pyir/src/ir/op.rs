//! The operation catalog.
//!
//! Every node kind the front-end can materialize, with its attribute payload
//! and operand shape. Operands are stored flat on `Operation`; kinds with
//! structured operand lists (Call) expose projections over the flat storage.

use std::fmt;

use indexmap::IndexSet;

use super::{Attribute, BuildError, BuildResult, FuncId, ValueId};

/// Operation kind with its attribute payload.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OpKind {
    /// Value of formal parameter `index` of the enclosing function.
    Arg { index: u32, name: String },
    /// Literal.
    Const { value: Attribute },
    /// Module-level lookup by name.
    Global { name: String },
    /// `lhs <op> rhs`; operator semantics are resolved by a later pass.
    BinOp { op: String },
    /// Explicit type ascription of its single operand.
    Cast,
    /// `callee(positional..., name=keyword...)`.
    ///
    /// Operands: callee, positional values, keyword values. `kw_names` holds
    /// one name per trailing keyword operand, in call-site order.
    Call { kw_names: Vec<String> },
    BuildTuple,
    /// `container[index]` with both a runtime index operand and a
    /// compile-time index.
    StaticGetItem { index: u32 },
    GetIter,
    /// Advance an iterator; yields a (value, exhausted) pair.
    IterNext,
    PairFirst,
    PairSecond,
}

/// Number of operands a kind accepts.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

impl OpKind {
    /// Mnemonic used by the printer and in logs.
    pub fn name(&self) -> &'static str {
        match self {
            OpKind::Arg { .. } => "arg",
            OpKind::Const { .. } => "const",
            OpKind::Global { .. } => "global",
            OpKind::BinOp { .. } => "binop",
            OpKind::Cast => "cast",
            OpKind::Call { .. } => "call",
            OpKind::BuildTuple => "build_tuple",
            OpKind::StaticGetItem { .. } => "static_getitem",
            OpKind::GetIter => "getiter",
            OpKind::IterNext => "iternext",
            OpKind::PairFirst => "pair_first",
            OpKind::PairSecond => "pair_second",
        }
    }

    /// Operand count this kind requires.
    pub fn arity(&self) -> Arity {
        match self {
            OpKind::Arg { .. } | OpKind::Const { .. } | OpKind::Global { .. } => Arity::Exact(0),
            OpKind::BinOp { .. } | OpKind::StaticGetItem { .. } => Arity::Exact(2),
            OpKind::Cast
            | OpKind::GetIter
            | OpKind::IterNext
            | OpKind::PairFirst
            | OpKind::PairSecond => Arity::Exact(1),
            OpKind::Call { kw_names } => Arity::AtLeast(1 + kw_names.len()),
            OpKind::BuildTuple => Arity::AtLeast(0),
        }
    }

    /// Validate the payload against an operand count before materializing.
    pub(crate) fn check(&self, operand_count: usize) -> BuildResult<()> {
        let arity = self.arity();
        if !arity.accepts(operand_count) {
            return Err(BuildError::OperandCount {
                kind: self.name(),
                expected: arity.to_string(),
                found: operand_count,
            });
        }

        if let OpKind::Call { kw_names } = self {
            let mut seen = IndexSet::with_capacity(kw_names.len());
            for name in kw_names {
                if name.is_empty() {
                    return Err(BuildError::EmptyKeyword);
                }
                if !seen.insert(name.as_str()) {
                    return Err(BuildError::DuplicateKeyword(name.clone()));
                }
            }
        }

        Ok(())
    }
}

/// A node in the graph.
///
/// Each operation defines exactly one result value and lives in exactly one
/// function. Folded operations stay in the arena, marked dead.
#[derive(Debug, Clone)]
pub struct Operation {
    pub(crate) kind: OpKind,
    pub(crate) operands: Vec<ValueId>,
    pub(crate) result: ValueId,
    pub(crate) func: FuncId,
    pub(crate) dead: bool,
}

/// Structured view of a Call's flat operand list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallParts<'a> {
    pub callee: ValueId,
    pub positional: &'a [ValueId],
    pub keyword: Vec<(&'a str, ValueId)>,
}

impl Operation {
    pub fn kind(&self) -> &OpKind {
        &self.kind
    }

    pub fn operands(&self) -> &[ValueId] {
        &self.operands
    }

    pub fn result(&self) -> ValueId {
        self.result
    }

    /// The enclosing function.
    pub fn func(&self) -> FuncId {
        self.func
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Offset of the first keyword operand in the flat operand list
    /// (the callee sits at offset 0). `None` for non-call kinds.
    pub fn kw_start(&self) -> Option<usize> {
        match &self.kind {
            OpKind::Call { kw_names } => Some(self.operands.len() - kw_names.len()),
            _ => None,
        }
    }

    /// Split a Call into callee, positional and keyword sections.
    pub fn call_parts(&self) -> Option<CallParts<'_>> {
        let OpKind::Call { kw_names } = &self.kind else {
            return None;
        };
        let kw_start = self.operands.len() - kw_names.len();
        let keyword = kw_names
            .iter()
            .map(String::as_str)
            .zip(self.operands[kw_start..].iter().copied())
            .collect();

        Some(CallParts {
            callee: self.operands[0],
            positional: &self.operands[1..kw_start],
            keyword,
        })
    }
}
