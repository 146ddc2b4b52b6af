//! Per-kind fold rules.

use crate::FoldConfig;
use crate::ir::{ConsistencyError, Module, OpId, OpKind, Operation, ValueId};
use crate::text::print_type;

/// Try to fold `op`, returning the value that replaces its result.
///
/// `Ok(None)` means no simplification applies (including for nodes that were
/// already folded away). An Arg node that cannot be bound to a formal
/// argument of matching type is an error, not a missed fold.
pub fn try_fold(
    module: &Module,
    op: OpId,
    config: &FoldConfig,
) -> Result<Option<ValueId>, ConsistencyError> {
    let operation = module.op(op);
    if operation.is_dead() {
        return Ok(None);
    }

    let folded = match operation.kind() {
        OpKind::Arg { index, .. } => Some(fold_arg(module, op, operation, *index)?),
        _ => fold_local(module, op, config),
    };

    match folded {
        Some(value) => tracing::trace!(%op, kind = operation.kind().name(), %value, "folds"),
        None => tracing::trace!(%op, kind = operation.kind().name(), "no simplification"),
    }
    Ok(folded)
}

/// Rules that only look at the node and its operands. Never fails.
pub(crate) fn fold_local(module: &Module, op: OpId, config: &FoldConfig) -> Option<ValueId> {
    let operation = module.op(op);
    match operation.kind() {
        OpKind::Cast => fold_cast(module, operation),
        OpKind::StaticGetItem { index } if config.structural => {
            tuple_element(module, operation, operation.operands()[0], *index as usize)
        }
        OpKind::PairFirst if config.structural => pair_element(module, operation, 0),
        OpKind::PairSecond if config.structural => pair_element(module, operation, 1),
        _ => None,
    }
}

fn fold_arg(
    module: &Module,
    op: OpId,
    operation: &Operation,
    index: u32,
) -> Result<ValueId, ConsistencyError> {
    let func = operation.func();
    let Some(formal) = module.func_arg(func, index) else {
        return Err(ConsistencyError::ArgIndexOutOfRange {
            op,
            index,
            arity: module.function(func).args().len(),
        });
    };

    let expected = module.value_type(formal);
    let found = module.value_type(operation.result());
    if expected != found {
        return Err(ConsistencyError::ArgTypeMismatch {
            op,
            index,
            expected: print_type(module.types(), expected),
            found: print_type(module.types(), found),
        });
    }

    Ok(formal)
}

fn fold_cast(module: &Module, operation: &Operation) -> Option<ValueId> {
    let operand = operation.operands()[0];
    same_known_type(module, operand, operation.result()).then_some(operand)
}

fn pair_element(module: &Module, operation: &Operation, index: usize) -> Option<ValueId> {
    let pair = operation.operands()[0];
    let tuple = module.op_of(pair)?;
    if tuple.operands().len() != 2 {
        return None;
    }
    tuple_element(module, operation, pair, index)
}

/// Element `index` of the `build_tuple` defining `container`, if its type is
/// already the node's result type.
fn tuple_element(
    module: &Module,
    operation: &Operation,
    container: ValueId,
    index: usize,
) -> Option<ValueId> {
    let tuple = module.op_of(container)?;
    if tuple.is_dead() || !matches!(tuple.kind(), OpKind::BuildTuple) {
        return None;
    }

    let element = *tuple.operands().get(index)?;
    same_known_type(module, element, operation.result()).then_some(element)
}

fn same_known_type(module: &Module, a: ValueId, b: ValueId) -> bool {
    let ty = module.value_type(a);
    ty == module.value_type(b) && !ty.is_undefined()
}
