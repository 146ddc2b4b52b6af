//! Module printer for golden tests and debugging.
//!
//! ```text
//! func @main(%0: PyType<int>) {
//!   %1 = arg {index = 0, name = "x"} : PyType<>
//!   %2 = binop %1, %1 {op = "+"} : PyType<>
//! }
//! ```

use std::fmt::Write;

use pyir_core::Colors;

use super::display_type;
use crate::PrintConfig;
use crate::ir::{FuncId, Module, OpKind, Operation, ValueId};

impl Module {
    /// Dump with default options.
    pub fn dump(&self) -> String {
        ModulePrinter::new(self).dump()
    }
}

/// Printer for `Module` with configurable output options.
pub struct ModulePrinter<'a> {
    module: &'a Module,
    config: PrintConfig,
}

impl<'a> ModulePrinter<'a> {
    pub fn new(module: &'a Module) -> Self {
        Self {
            module,
            config: PrintConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PrintConfig) -> Self {
        self.config = config;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        for (i, (func, _)) in self.module.functions().enumerate() {
            if i > 0 {
                writeln!(w)?;
            }
            self.format_function(w, func)?;
        }
        Ok(())
    }

    fn format_function(&self, w: &mut String, func: FuncId) -> std::fmt::Result {
        let c = self.colors();
        let function = self.module.function(func);

        write!(w, "func {}@{}{}(", c.op, function.name(), c.reset)?;
        for (i, &arg) in function.args().iter().enumerate() {
            if i > 0 {
                write!(w, ", ")?;
            }
            write!(w, "{arg}: ")?;
            self.format_type(w, arg)?;
        }
        writeln!(w, ") {{")?;

        for &op in function.body() {
            let operation = self.module.op(op);
            if operation.is_dead() && !self.config.show_dead {
                continue;
            }
            self.format_op(w, operation)?;
        }

        writeln!(w, "}}")
    }

    fn format_op(&self, w: &mut String, operation: &Operation) -> std::fmt::Result {
        let c = self.colors();

        write!(w, "  ")?;
        if operation.is_dead() {
            write!(w, "{}✗{} ", c.muted, c.reset)?;
        }
        write!(
            w,
            "{} = {}{}{}",
            operation.result(),
            c.op,
            operation.kind().name(),
            c.reset
        )?;

        if let Some(call) = operation.call_parts() {
            write!(w, " {}(", call.callee)?;
            let positional = call.positional.iter().map(|v| v.to_string());
            let keyword = call.keyword.iter().map(|(name, v)| format!("{name} = {v}"));
            let args: Vec<String> = positional.chain(keyword).collect();
            write!(w, "{})", args.join(", "))?;
        } else if !operation.operands().is_empty() {
            let operands: Vec<String> =
                operation.operands().iter().map(|v| v.to_string()).collect();
            write!(w, " {}", operands.join(", "))?;
        }

        if let Some(attrs) = format_attrs(operation.kind()) {
            write!(w, " {}{{{attrs}}}{}", c.muted, c.reset)?;
        }

        write!(w, " : ")?;
        self.format_type(w, operation.result())?;
        writeln!(w)
    }

    fn format_type(&self, w: &mut String, value: ValueId) -> std::fmt::Result {
        let c = self.colors();
        let ty = display_type(self.module.types(), self.module.value_type(value));
        write!(w, "{}{ty}{}", c.ty, c.reset)
    }

    fn colors(&self) -> Colors {
        self.config.colors
    }
}

fn format_attrs(kind: &OpKind) -> Option<String> {
    match kind {
        OpKind::Arg { index, name } => Some(format!("index = {index}, name = {name:?}")),
        OpKind::Const { value } => Some(format!("value = {value}")),
        OpKind::Global { name } => Some(format!("name = {name:?}")),
        OpKind::BinOp { op } => Some(format!("op = {op:?}")),
        OpKind::StaticGetItem { index } => Some(format!("index = {index}")),
        OpKind::Cast
        | OpKind::Call { .. }
        | OpKind::BuildTuple
        | OpKind::GetIter
        | OpKind::IterNext
        | OpKind::PairFirst
        | OpKind::PairSecond => None,
    }
}
