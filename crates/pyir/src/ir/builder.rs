//! Construction entry points for every catalog kind.
//!
//! Results carry `TypeId::UNDEFINED` unless a type is supplied explicitly
//! (Cast, `build_typed`), so building never waits on inference.

use pyir_core::TypeId;

use super::{Attribute, BuildError, BuildResult, FuncId, Module, OpKind, ValueId};
use crate::FoldConfig;
use crate::fold;

/// Appends operations to one function of a module.
pub struct Builder<'m> {
    module: &'m mut Module,
    func: FuncId,
    config: FoldConfig,
}

impl<'m> Builder<'m> {
    pub(crate) fn new(module: &'m mut Module, func: FuncId, config: FoldConfig) -> Self {
        Self {
            module,
            func,
            config,
        }
    }

    pub fn func(&self) -> FuncId {
        self.func
    }

    pub fn module(&self) -> &Module {
        &*self.module
    }

    /// Value of formal parameter `index` of the enclosing function.
    pub fn arg(&mut self, index: u32, name: impl Into<String>) -> BuildResult<ValueId> {
        let name = name.into();
        self.build(OpKind::Arg { index, name }, Vec::new())
    }

    pub fn constant(&mut self, value: impl Into<Attribute>) -> BuildResult<ValueId> {
        let value = value.into();
        self.build(OpKind::Const { value }, Vec::new())
    }

    pub fn global(&mut self, name: impl Into<String>) -> BuildResult<ValueId> {
        let name = name.into();
        self.build(OpKind::Global { name }, Vec::new())
    }

    pub fn binop(
        &mut self,
        lhs: ValueId,
        rhs: ValueId,
        op: impl Into<String>,
    ) -> BuildResult<ValueId> {
        let op = op.into();
        self.build(OpKind::BinOp { op }, vec![lhs, rhs])
    }

    /// Ascribe `ty` to `value`.
    pub fn cast(&mut self, value: ValueId, ty: TypeId) -> BuildResult<ValueId> {
        self.build_typed(OpKind::Cast, vec![value], ty)
    }

    /// `callee(*args, **kwargs)`, keeping call-site keyword order.
    pub fn call(
        &mut self,
        callee: ValueId,
        args: &[ValueId],
        kwargs: &[(&str, ValueId)],
    ) -> BuildResult<ValueId> {
        let mut operands = Vec::with_capacity(1 + args.len() + kwargs.len());
        operands.push(callee);
        operands.extend_from_slice(args);
        operands.extend(kwargs.iter().map(|&(_, value)| value));
        let kw_names = kwargs.iter().map(|&(name, _)| name.to_owned()).collect();

        self.build(OpKind::Call { kw_names }, operands)
    }

    /// Call from the flat encoding: `args` holds positional values followed
    /// by keyword values, and `kw_start` is the operand offset of the first
    /// keyword value with the callee counted at offset 0.
    pub fn call_flat(
        &mut self,
        callee: ValueId,
        args: &[ValueId],
        kw_start: usize,
        kw_names: &[&str],
    ) -> BuildResult<ValueId> {
        let operand_count = args.len() + 1;
        if kw_start == 0 || kw_start > operand_count {
            return Err(BuildError::KeywordStart {
                kw_start,
                operands: operand_count,
            });
        }

        let kw_values = operand_count - kw_start;
        if kw_values != kw_names.len() {
            return Err(BuildError::KeywordArity {
                names: kw_names.len(),
                values: kw_values,
            });
        }

        let mut operands = Vec::with_capacity(operand_count);
        operands.push(callee);
        operands.extend_from_slice(args);
        let kw_names = kw_names.iter().map(|&name| name.to_owned()).collect();

        self.build(OpKind::Call { kw_names }, operands)
    }

    pub fn build_tuple(&mut self, elements: &[ValueId]) -> BuildResult<ValueId> {
        self.build(OpKind::BuildTuple, elements.to_vec())
    }

    /// `container[index]` where the index is known at compile time;
    /// `index_value` carries the same index as a runtime value.
    pub fn static_getitem(
        &mut self,
        container: ValueId,
        index_value: ValueId,
        index: u32,
    ) -> BuildResult<ValueId> {
        self.build(OpKind::StaticGetItem { index }, vec![container, index_value])
    }

    pub fn getiter(&mut self, iterable: ValueId) -> BuildResult<ValueId> {
        self.build(OpKind::GetIter, vec![iterable])
    }

    pub fn iternext(&mut self, iterator: ValueId) -> BuildResult<ValueId> {
        self.build(OpKind::IterNext, vec![iterator])
    }

    pub fn pair_first(&mut self, pair: ValueId) -> BuildResult<ValueId> {
        self.build(OpKind::PairFirst, vec![pair])
    }

    pub fn pair_second(&mut self, pair: ValueId) -> BuildResult<ValueId> {
        self.build(OpKind::PairSecond, vec![pair])
    }

    /// Materialize any kind with an undefined result type.
    pub fn build(&mut self, kind: OpKind, operands: Vec<ValueId>) -> BuildResult<ValueId> {
        self.build_typed(kind, operands, TypeId::UNDEFINED)
    }

    /// Materialize any kind with an explicit result type.
    ///
    /// With `fold_on_build`, a node that folds immediately is not kept and
    /// the replacement value is returned instead.
    pub fn build_typed(
        &mut self,
        kind: OpKind,
        operands: Vec<ValueId>,
        ty: TypeId,
    ) -> BuildResult<ValueId> {
        let op = self.module.push_op(self.func, kind, operands, ty)?;
        let result = self.module.op(op).result();

        if !self.config.fold_on_build {
            return Ok(result);
        }

        match fold::fold_local(&*self.module, op, &self.config) {
            Some(folded) => {
                self.module.kill_op(op);
                tracing::debug!(%op, %folded, "folded on build");
                Ok(folded)
            }
            None => Ok(result),
        }
    }
}
