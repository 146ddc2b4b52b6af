//! JSON export of a module for external tooling.
//!
//! Types are rendered with the textual type syntax, so the snapshot does not
//! depend on registry-local handles.

use serde::Serialize;

use super::{Module, OpKind, ValueId};
use crate::text::print_type;

#[derive(Serialize)]
struct ModuleSnapshot<'a> {
    functions: Vec<FunctionSnapshot<'a>>,
}

#[derive(Serialize)]
struct FunctionSnapshot<'a> {
    name: &'a str,
    args: Vec<ValueSnapshot>,
    ops: Vec<OpSnapshot<'a>>,
}

#[derive(Serialize)]
struct ValueSnapshot {
    id: u32,
    #[serde(rename = "type")]
    ty: String,
}

#[derive(Serialize)]
struct OpSnapshot<'a> {
    id: u32,
    #[serde(flatten)]
    kind: &'a OpKind,
    operands: Vec<u32>,
    result: ValueSnapshot,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    dead: bool,
}

impl Module {
    /// Serialize every function, operation and value to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let functions = self
            .functions()
            .map(|(_, function)| FunctionSnapshot {
                name: function.name(),
                args: function.args().iter().map(|&v| self.value_snapshot(v)).collect(),
                ops: function
                    .body()
                    .iter()
                    .map(|&op| {
                        let operation = self.op(op);
                        OpSnapshot {
                            id: op.as_u32(),
                            kind: operation.kind(),
                            operands: operation.operands().iter().map(|v| v.as_u32()).collect(),
                            result: self.value_snapshot(operation.result()),
                            dead: operation.is_dead(),
                        }
                    })
                    .collect(),
            })
            .collect();

        serde_json::to_string_pretty(&ModuleSnapshot { functions })
    }

    fn value_snapshot(&self, value: ValueId) -> ValueSnapshot {
        ValueSnapshot {
            id: value.as_u32(),
            ty: print_type(self.types(), self.value_type(value)),
        }
    }
}
