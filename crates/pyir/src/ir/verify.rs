//! Structural verification of the def-use graph.
//!
//! Checks invariants that construction and folding maintain:
//! - every operand refers to a live value of the reading node's own function
//!   and is recorded in that value's use list
//! - every recorded use points back at a live operand slot
//! - every result value names its defining operation

use super::{ConsistencyError, Module, OpId, ValueDef, ValueId};

impl Module {
    pub fn verify(&self) -> Result<(), ConsistencyError> {
        for (op, operation) in self.ops() {
            let arity = operation.kind().arity();
            if !arity.accepts(operation.operands().len()) {
                return Err(ConsistencyError::MalformedOperands {
                    op,
                    expected: arity.to_string(),
                    found: operation.operands().len(),
                });
            }

            if self.value_def_checked(operation.result()) != Some(ValueDef::Op(op)) {
                return Err(ConsistencyError::BrokenDefinition {
                    value: operation.result(),
                });
            }

            for (operand, &value) in operation.operands().iter().enumerate() {
                let Some(data) = self.values.get(value.index()) else {
                    return Err(ConsistencyError::DanglingOperand { op, operand, value });
                };
                let owner = match data.def {
                    ValueDef::Op(def) => match self.ops.get(def.index()) {
                        Some(definer) if definer.is_dead() => {
                            return Err(ConsistencyError::DeadOperand { op, operand, value });
                        }
                        Some(definer) => definer.func(),
                        None => return Err(ConsistencyError::BrokenDefinition { value }),
                    },
                    ValueDef::Arg { func, .. } => func,
                };
                if owner != operation.func() {
                    return Err(ConsistencyError::ForeignOperand { op, operand, value });
                }
                let recorded = data
                    .uses
                    .iter()
                    .any(|u| u.op == op && u.operand as usize == operand);
                if !recorded {
                    return Err(ConsistencyError::MissingUse { op, operand, value });
                }
            }
        }

        for (i, data) in self.values.iter().enumerate() {
            let value = ValueId::from_raw(i as u32);
            for u in &data.uses {
                if !self.reads(u.op, u.operand as usize, value) {
                    return Err(ConsistencyError::StaleUse { value, op: u.op });
                }
            }
        }

        for (func, function) in self.functions() {
            for (index, &arg) in function.args().iter().enumerate() {
                let expected = ValueDef::Arg {
                    func,
                    index: index as u32,
                };
                if self.value_def_checked(arg) != Some(expected) {
                    return Err(ConsistencyError::BrokenDefinition { value: arg });
                }
            }
        }

        Ok(())
    }

    fn value_def_checked(&self, value: ValueId) -> Option<ValueDef> {
        self.values.get(value.index()).map(|data| data.def)
    }

    fn reads(&self, op: OpId, operand: usize, value: ValueId) -> bool {
        self.ops
            .get(op.index())
            .filter(|operation| !operation.is_dead())
            .and_then(|operation| operation.operands().get(operand))
            .is_some_and(|&read| read == value)
    }
}
