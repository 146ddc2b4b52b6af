//! Tests for the construction entry points of every catalog kind.

use pyir_core::TypeId;

use super::*;
use crate::FoldConfig;

fn module_with_function() -> (Module, FuncId) {
    let mut m = Module::new();
    let f = m.add_function("f", &[]).unwrap();
    (m, f)
}

#[test]
fn every_kind_defaults_to_undefined() {
    let (mut m, f) = module_with_function();
    let mut b = m.builder(f).unwrap();

    let arg = b.arg(0, "x").unwrap();
    let one = b.constant(1).unwrap();
    let range = b.global("range").unwrap();
    let sum = b.binop(arg, one, "+").unwrap();
    let call = b.call(range, &[sum], &[("step", one)]).unwrap();
    let tuple = b.build_tuple(&[arg, one]).unwrap();
    let item = b.static_getitem(tuple, one, 1).unwrap();
    let it = b.getiter(call).unwrap();
    let next = b.iternext(it).unwrap();
    let first = b.pair_first(next).unwrap();
    let second = b.pair_second(next).unwrap();

    let values = [
        arg, one, range, sum, call, tuple, item, it, next, first, second,
    ];
    for value in values {
        assert_eq!(m.value_type(value), m.types().undefined(), "{value}");
    }
    assert_eq!(m.function(f).body().len(), values.len());
}

#[test]
fn kinds_carry_their_attributes() {
    let (mut m, f) = module_with_function();
    let mut b = m.builder(f).unwrap();

    let arg = b.arg(2, "y").unwrap();
    let lit = b.constant("hello").unwrap();
    let global = b.global("print").unwrap();
    let sum = b.binop(arg, lit, "*").unwrap();
    let item = b.static_getitem(arg, lit, 4).unwrap();

    let kind = |v| m.op_of(v).unwrap().kind().clone();
    assert_eq!(
        kind(arg),
        OpKind::Arg {
            index: 2,
            name: "y".into()
        }
    );
    assert_eq!(
        kind(lit),
        OpKind::Const {
            value: Attribute::Str("hello".into())
        }
    );
    assert_eq!(
        kind(global),
        OpKind::Global {
            name: "print".into()
        }
    );
    assert_eq!(kind(sum), OpKind::BinOp { op: "*".into() });
    assert_eq!(kind(item), OpKind::StaticGetItem { index: 4 });
    assert_eq!(m.op_of(item).unwrap().operands(), &[arg, lit]);
}

#[test]
fn call_packs_operands_in_order() {
    let (mut m, f) = module_with_function();
    let mut b = m.builder(f).unwrap();
    let callee = b.global("g").unwrap();
    let a = b.constant(1).unwrap();
    let b2 = b.constant(2).unwrap();
    let c = b.constant(3).unwrap();
    let d = b.constant(4).unwrap();

    let call = b.call(callee, &[a, b2], &[("x", c), ("y", d)]).unwrap();

    let op = m.op_of(call).unwrap();
    assert_eq!(op.operands(), &[callee, a, b2, c, d]);
    assert_eq!(op.kw_start(), Some(3));
    assert_eq!(
        op.kind(),
        &OpKind::Call {
            kw_names: vec!["x".into(), "y".into()]
        }
    );

    let parts = op.call_parts().unwrap();
    assert_eq!(parts.callee, callee);
    assert_eq!(parts.positional, &[a, b2]);
    assert_eq!(parts.keyword, vec![("x", c), ("y", d)]);
}

#[test]
fn call_without_arguments() {
    let (mut m, f) = module_with_function();
    let mut b = m.builder(f).unwrap();
    let callee = b.global("g").unwrap();

    let call = b.call(callee, &[], &[]).unwrap();

    let op = m.op_of(call).unwrap();
    assert_eq!(op.operands(), &[callee]);
    assert_eq!(op.kw_start(), Some(1));
    let parts = op.call_parts().unwrap();
    assert!(parts.positional.is_empty());
    assert!(parts.keyword.is_empty());
}

#[test]
fn call_flat_matches_structured_form() {
    let (mut m, f) = module_with_function();
    let mut b = m.builder(f).unwrap();
    let callee = b.global("g").unwrap();
    let a = b.constant(1).unwrap();
    let c = b.constant(3).unwrap();

    let flat = b.call_flat(callee, &[a, c], 2, &["x"]).unwrap();
    let structured = b.call(callee, &[a], &[("x", c)]).unwrap();

    let flat = m.op_of(flat).unwrap();
    let structured = m.op_of(structured).unwrap();
    assert_eq!(flat.operands(), structured.operands());
    assert_eq!(flat.kind(), structured.kind());
    assert_eq!(flat.kw_start(), Some(2));
}

#[test]
fn call_flat_rejects_keyword_arity_mismatch() {
    let (mut m, f) = module_with_function();
    let mut b = m.builder(f).unwrap();
    let callee = b.global("g").unwrap();
    let a = b.constant(1).unwrap();
    let ops_before = b.module().op_count();

    let err = b.call_flat(callee, &[a, a], 2, &["x", "y"]).unwrap_err();

    assert_eq!(err, BuildError::KeywordArity { names: 2, values: 1 });
    assert_eq!(b.module().op_count(), ops_before);
}

#[test]
fn call_flat_rejects_offset_out_of_range() {
    let (mut m, f) = module_with_function();
    let mut b = m.builder(f).unwrap();
    let callee = b.global("g").unwrap();
    let a = b.constant(1).unwrap();

    assert_eq!(
        b.call_flat(callee, &[a], 0, &[]),
        Err(BuildError::KeywordStart {
            kw_start: 0,
            operands: 2
        })
    );
    assert_eq!(
        b.call_flat(callee, &[a], 3, &[]),
        Err(BuildError::KeywordStart {
            kw_start: 3,
            operands: 2
        })
    );
    assert!(b.call_flat(callee, &[a], 2, &[]).is_ok());
}

#[test]
fn call_rejects_bad_keyword_names() {
    let (mut m, f) = module_with_function();
    let mut b = m.builder(f).unwrap();
    let callee = b.global("g").unwrap();
    let a = b.constant(1).unwrap();

    assert_eq!(
        b.call(callee, &[], &[("x", a), ("x", a)]),
        Err(BuildError::DuplicateKeyword("x".into()))
    );
    assert_eq!(
        b.call(callee, &[], &[("", a)]),
        Err(BuildError::EmptyKeyword)
    );
}

#[test]
fn build_checks_operand_count() {
    let (mut m, f) = module_with_function();
    let mut b = m.builder(f).unwrap();
    let a = b.constant(1).unwrap();

    let err = b
        .build(OpKind::BinOp { op: "+".into() }, vec![a])
        .unwrap_err();

    assert_eq!(
        err,
        BuildError::OperandCount {
            kind: "binop",
            expected: "2".into(),
            found: 1
        }
    );
    assert_eq!(err.to_string(), "`binop` expects 2 operands, got 1");
}

#[test]
fn build_checks_call_keyword_operands() {
    let (mut m, f) = module_with_function();
    let mut b = m.builder(f).unwrap();
    let callee = b.global("g").unwrap();

    let err = b
        .build(
            OpKind::Call {
                kw_names: vec!["x".into()],
            },
            vec![callee],
        )
        .unwrap_err();

    assert_eq!(
        err,
        BuildError::OperandCount {
            kind: "call",
            expected: "at least 2".into(),
            found: 1
        }
    );
}

#[test]
fn unknown_operand_leaves_graph_untouched() {
    let (mut m, f) = module_with_function();
    let missing = ValueId::from_raw(7);

    let err = m.builder(f).unwrap().getiter(missing).unwrap_err();

    assert_eq!(err, BuildError::UnknownValue(missing));
    assert_eq!(m.op_count(), 0);
    assert_eq!(m.value_count(), 0);
    assert!(m.function(f).body().is_empty());
}

#[test]
fn operand_from_other_function_is_rejected() {
    let mut m = Module::new();
    let f = m.add_function("f", &[TypeId::UNDEFINED]).unwrap();
    let g = m.add_function("g", &[]).unwrap();
    let formal = m.func_arg(f, 0).unwrap();
    let local = m.builder(f).unwrap().constant(1).unwrap();

    let mut b = m.builder(g).unwrap();
    let err = b.binop(formal, formal, "+").unwrap_err();
    assert_eq!(
        err,
        BuildError::ForeignOperand {
            value: formal,
            owner: f,
            func: g
        }
    );
    let err = b.getiter(local).unwrap_err();
    assert_eq!(
        err,
        BuildError::ForeignOperand {
            value: local,
            owner: f,
            func: g
        }
    );

    assert!(m.function(g).body().is_empty());
    assert!(m.uses(formal).is_empty());
    assert_eq!(m.op_count(), 1);
}

#[test]
fn operand_of_folded_node_is_rejected() {
    let (mut m, f) = module_with_function();
    let x = m.builder(f).unwrap().constant(1).unwrap();
    m.kill_op(m.defining_op(x).unwrap());

    let err = m.builder(f).unwrap().binop(x, x, "+").unwrap_err();

    assert_eq!(err, BuildError::DeadValue(x));
    assert_eq!(err.to_string(), "%0 was folded away");
    assert_eq!(m.op_count(), 1);
}

#[test]
fn builder_for_unknown_function() {
    let mut m = Module::new();
    let missing = FuncId::from_raw(0);

    assert!(matches!(
        m.builder(missing),
        Err(BuildError::UnknownFunction(id)) if id == missing
    ));
}

#[test]
fn cast_carries_explicit_type() {
    let (mut m, f) = module_with_function();
    let int = m.intern_type("int").unwrap();
    let mut b = m.builder(f).unwrap();
    let x = b.constant(1).unwrap();

    let cast = b.cast(x, int).unwrap();

    assert_eq!(m.value_type(cast), int);
    assert_eq!(m.value_type(x), TypeId::UNDEFINED);
}

#[test]
fn build_typed_overrides_result_type() {
    let (mut m, f) = module_with_function();
    let tuple_ty = m.intern_type("tuple").unwrap();
    let mut b = m.builder(f).unwrap();

    let tuple = b.build_typed(OpKind::BuildTuple, vec![], tuple_ty).unwrap();

    assert_eq!(m.value_type(tuple), tuple_ty);
}

#[test]
fn fold_on_build_elides_redundant_cast() {
    let (mut m, f) = module_with_function();
    let int = m.intern_type("int").unwrap();
    let typed = typed_const(&mut m, f, int);
    let config = FoldConfig::new().fold_on_build(true);
    let mut b = m.builder_with(f, config).unwrap();

    let cast = b.cast(typed, int).unwrap();

    assert_eq!(cast, typed);
    assert_eq!(m.ops().count(), 1);
    assert_eq!(m.op_count(), 2);
    assert!(m.uses(typed).is_empty());
}

#[test]
fn fold_on_build_keeps_pending_cast() {
    let (mut m, f) = module_with_function();
    let int = m.intern_type("int").unwrap();
    let config = FoldConfig::new().fold_on_build(true);
    let mut b = m.builder_with(f, config).unwrap();
    let x = b.constant(1).unwrap();

    let cast = b.cast(x, int).unwrap();

    assert_ne!(cast, x);
    assert_eq!(m.ops().count(), 2);
}

#[test]
fn fold_on_build_never_folds_arg() {
    let (mut m, f) = module_with_function();
    let config = FoldConfig::new().fold_on_build(true);
    let mut b = m.builder_with(f, config).unwrap();

    // Index 0 is out of range for `f`; building must still succeed.
    let arg = b.arg(0, "x").unwrap();

    assert!(m.op_of(arg).is_some());
}

/// A constant whose type was already assigned.
fn typed_const(m: &mut Module, f: FuncId, ty: TypeId) -> ValueId {
    let value = m.builder(f).unwrap().constant(1).unwrap();
    m.set_type(value, ty).unwrap();
    value
}
