//! The graph arena for one compilation unit.
//!
//! `Module` owns the type registry, the functions, the operations and the
//! values. Cross-references are `Copy` handles into these arenas, so dropping
//! the module releases the whole graph at once.

use pyir_core::{TypeId, TypeRegistry};

use super::{BuildError, BuildResult, Builder, FuncId, OpId, OpKind, Operation, ValueId};
use crate::FoldConfig;

/// Where a value comes from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ValueDef {
    /// Result of an operation.
    Op(OpId),
    /// Formal argument `index` of a function.
    Arg { func: FuncId, index: u32 },
}

/// One read of a value: operand slot `operand` of `op`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Use {
    pub op: OpId,
    pub operand: u32,
}

#[derive(Debug, Clone)]
pub(crate) struct ValueData {
    pub(crate) def: ValueDef,
    pub(crate) ty: TypeId,
    pub(crate) uses: Vec<Use>,
}

/// A function region: formal arguments plus the operations built inside it.
#[derive(Debug, Clone)]
pub struct Function {
    pub(crate) name: String,
    pub(crate) args: Vec<ValueId>,
    pub(crate) body: Vec<OpId>,
}

impl Function {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Formal argument values, in parameter order.
    pub fn args(&self) -> &[ValueId] {
        &self.args
    }

    /// Operations in construction order, including folded ones.
    pub fn body(&self) -> &[OpId] {
        &self.body
    }
}

/// A compilation unit.
#[derive(Debug, Clone, Default)]
pub struct Module {
    types: TypeRegistry,
    pub(crate) funcs: Vec<Function>,
    pub(crate) ops: Vec<Operation>,
    pub(crate) values: Vec<ValueData>,
}

impl Module {
    /// Create a module with a fresh type registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a module that interns into an existing registry.
    pub fn with_registry(types: TypeRegistry) -> Self {
        Self {
            types,
            funcs: Vec::new(),
            ops: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Discard the graph, handing the registry back for reuse.
    pub fn into_registry(self) -> TypeRegistry {
        self.types
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    pub fn intern_type(&mut self, name: &str) -> BuildResult<TypeId> {
        Ok(self.types.intern(name)?)
    }

    /// Add a function whose formal arguments carry `arg_types`.
    pub fn add_function(
        &mut self,
        name: impl Into<String>,
        arg_types: &[TypeId],
    ) -> BuildResult<FuncId> {
        for &ty in arg_types {
            self.check_type(ty)?;
        }

        let func = FuncId::from_raw(self.funcs.len() as u32);
        let args = arg_types
            .iter()
            .enumerate()
            .map(|(i, &ty)| {
                let index = i as u32;
                self.push_value(ValueDef::Arg { func, index }, ty)
            })
            .collect();
        let name = name.into();

        tracing::debug!(%func, name = %name, arity = arg_types.len(), "function added");
        self.funcs.push(Function {
            name,
            args,
            body: Vec::new(),
        });
        Ok(func)
    }

    /// Builder appending to `func`, with folding left to explicit passes.
    pub fn builder(&mut self, func: FuncId) -> BuildResult<Builder<'_>> {
        self.builder_with(func, FoldConfig::default())
    }

    pub fn builder_with(&mut self, func: FuncId, config: FoldConfig) -> BuildResult<Builder<'_>> {
        self.check_func(func)?;
        Ok(Builder::new(self, func, config))
    }

    /// Get function by ID.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this module.
    pub fn function(&self, id: FuncId) -> &Function {
        &self.funcs[id.index()]
    }

    pub fn functions(&self) -> impl Iterator<Item = (FuncId, &Function)> {
        self.funcs
            .iter()
            .enumerate()
            .map(|(i, f)| (FuncId::from_raw(i as u32), f))
    }

    /// Formal argument `index` of `func`, if the function has that many.
    ///
    /// # Panics
    /// Panics if `func` was not issued by this module.
    pub fn func_arg(&self, func: FuncId, index: u32) -> Option<ValueId> {
        self.function(func).args.get(index as usize).copied()
    }

    /// Get operation by ID.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this module.
    pub fn op(&self, id: OpId) -> &Operation {
        &self.ops[id.index()]
    }

    /// Iterate over operations that have not been folded away.
    pub fn ops(&self) -> impl Iterator<Item = (OpId, &Operation)> {
        self.ops
            .iter()
            .enumerate()
            .filter(|(_, op)| !op.dead)
            .map(|(i, op)| (OpId::from_raw(i as u32), op))
    }

    /// Number of operations, including folded ones.
    pub fn op_count(&self) -> usize {
        self.ops.len()
    }

    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    /// # Panics
    /// Panics if `value` was not issued by this module.
    pub fn value_def(&self, value: ValueId) -> ValueDef {
        self.values[value.index()].def
    }

    /// Current type of `value`; `TypeId::UNDEFINED` until inference runs.
    ///
    /// # Panics
    /// Panics if `value` was not issued by this module.
    pub fn value_type(&self, value: ValueId) -> TypeId {
        self.values[value.index()].ty
    }

    /// Operations reading `value`.
    ///
    /// # Panics
    /// Panics if `value` was not issued by this module.
    pub fn uses(&self, value: ValueId) -> &[Use] {
        &self.values[value.index()].uses
    }

    /// Panics like `value_def`.
    pub fn defining_op(&self, value: ValueId) -> Option<OpId> {
        match self.value_def(value) {
            ValueDef::Op(op) => Some(op),
            ValueDef::Arg { .. } => None,
        }
    }

    /// The operation defining `value`, or `None` for formal arguments.
    pub fn op_of(&self, value: ValueId) -> Option<&Operation> {
        self.defining_op(value).map(|op| self.op(op))
    }

    /// Assign the inferred type of `value`.
    ///
    /// A value's type moves from `Undefined` to a named type exactly once.
    /// Values of folded-away nodes are rejected.
    pub fn set_type(&mut self, value: ValueId, ty: TypeId) -> BuildResult<()> {
        self.check_value(value)?;
        self.check_live(value)?;
        self.check_type(ty)?;
        if ty.is_undefined() {
            return Err(BuildError::UndefinedAssignment(value));
        }

        let data = &mut self.values[value.index()];
        if !data.ty.is_undefined() {
            return Err(BuildError::TypeAlreadyAssigned(value));
        }
        data.ty = ty;

        tracing::debug!(%value, ty = ty.as_u32(), "type assigned");
        Ok(())
    }

    /// Redirect every read of `from` to `to`. Returns the number of rewritten operands.
    ///
    /// `to` must be live and belong to the same function as `from`.
    pub fn replace_all_uses(&mut self, from: ValueId, to: ValueId) -> BuildResult<usize> {
        self.check_value(from)?;
        self.check_value(to)?;
        self.check_operand(self.value_func(from), to)?;
        Ok(self.rewrite_uses(from, to))
    }

    pub(crate) fn rewrite_uses(&mut self, from: ValueId, to: ValueId) -> usize {
        if from == to {
            return 0;
        }

        let uses = std::mem::take(&mut self.values[from.index()].uses);
        for u in &uses {
            self.ops[u.op.index()].operands[u.operand as usize] = to;
        }

        let count = uses.len();
        self.values[to.index()].uses.extend(uses);
        count
    }

    /// Mark `op` as folded away and drop the reads it performed.
    pub(crate) fn kill_op(&mut self, op: OpId) {
        let operation = &mut self.ops[op.index()];
        if operation.dead {
            return;
        }
        operation.dead = true;

        let operands = operation.operands.clone();
        for value in operands {
            self.values[value.index()].uses.retain(|u| u.op != op);
        }
    }

    /// Append a node to `func`. Every handle is validated before anything is
    /// written, so a failed call leaves the graph untouched.
    pub(crate) fn push_op(
        &mut self,
        func: FuncId,
        kind: OpKind,
        operands: Vec<ValueId>,
        ty: TypeId,
    ) -> BuildResult<OpId> {
        self.check_func(func)?;
        self.check_type(ty)?;
        for &value in &operands {
            self.check_operand(func, value)?;
        }
        kind.check(operands.len())?;

        let op = OpId::from_raw(self.ops.len() as u32);
        let result = self.push_value(ValueDef::Op(op), ty);
        for (i, &value) in operands.iter().enumerate() {
            self.values[value.index()].uses.push(Use {
                op,
                operand: i as u32,
            });
        }

        tracing::debug!(%op, kind = kind.name(), %result, %func, "op materialized");
        self.ops.push(Operation {
            kind,
            operands,
            result,
            func,
            dead: false,
        });
        self.funcs[func.index()].body.push(op);
        Ok(op)
    }

    fn push_value(&mut self, def: ValueDef, ty: TypeId) -> ValueId {
        let id = ValueId::from_raw(self.values.len() as u32);
        self.values.push(ValueData {
            def,
            ty,
            uses: Vec::new(),
        });
        id
    }

    fn check_value(&self, value: ValueId) -> BuildResult<()> {
        if value.index() < self.values.len() {
            Ok(())
        } else {
            Err(BuildError::UnknownValue(value))
        }
    }

    /// Function whose region defines `value`.
    pub(crate) fn value_func(&self, value: ValueId) -> FuncId {
        match self.value_def(value) {
            ValueDef::Op(op) => self.op(op).func,
            ValueDef::Arg { func, .. } => func,
        }
    }

    /// `value` may be read by a node of `func`: it exists, is defined in
    /// `func`, and its defining node is live.
    fn check_operand(&self, func: FuncId, value: ValueId) -> BuildResult<()> {
        self.check_value(value)?;
        self.check_live(value)?;

        let owner = self.value_func(value);
        if owner != func {
            return Err(BuildError::ForeignOperand { value, owner, func });
        }
        Ok(())
    }

    fn check_live(&self, value: ValueId) -> BuildResult<()> {
        match self.op_of(value) {
            Some(operation) if operation.dead => Err(BuildError::DeadValue(value)),
            _ => Ok(()),
        }
    }

    fn check_func(&self, func: FuncId) -> BuildResult<()> {
        if func.index() < self.funcs.len() {
            Ok(())
        } else {
            Err(BuildError::UnknownFunction(func))
        }
    }

    fn check_type(&self, ty: TypeId) -> BuildResult<()> {
        if self.types.contains(ty) {
            Ok(())
        } else {
            Err(BuildError::ForeignType(ty.as_u32()))
        }
    }
}
