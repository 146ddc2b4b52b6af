use crate::{InternError, TypeId, TypeKind, TypeRegistry};

#[test]
fn intern_deduplicates() {
    let mut reg = TypeRegistry::new();

    let a = reg.intern("int").unwrap();
    let b = reg.intern("int").unwrap();
    let c = reg.intern("float").unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(reg.len(), 2);
}

#[test]
fn intern_equal_iff_names_equal() {
    let mut reg = TypeRegistry::new();
    let names = ["int", "float", "str", "int", "tuple", "str"];

    let ids: Vec<_> = names.iter().map(|n| reg.intern(n).unwrap()).collect();

    for (i, a) in names.iter().enumerate() {
        for (j, b) in names.iter().enumerate() {
            assert_eq!(ids[i] == ids[j], a == b, "{a} vs {b}");
        }
    }
}

#[test]
fn intern_empty_is_rejected() {
    let mut reg = TypeRegistry::new();

    assert_eq!(reg.intern(""), Err(InternError::EmptyName));
    assert!(reg.is_empty());
}

#[test]
fn undefined_is_singleton() {
    let mut reg = TypeRegistry::new();
    let first = reg.undefined();
    reg.intern("int").unwrap();

    assert_eq!(first, reg.undefined());
    assert_eq!(first, TypeId::UNDEFINED);
    assert!(first.is_undefined());
}

#[test]
fn named_never_aliases_undefined() {
    let mut reg = TypeRegistry::new();

    let int = reg.intern("int").unwrap();

    assert_ne!(int, reg.undefined());
    assert!(!int.is_undefined());
}

#[test]
fn kind_views() {
    let mut reg = TypeRegistry::new();
    let int = reg.intern("int").unwrap();

    assert_eq!(reg.kind(int), TypeKind::Named("int"));
    assert_eq!(reg.kind(TypeId::UNDEFINED), TypeKind::Undefined);
    assert_eq!(reg.kind(int).name(), Some("int"));
    assert_eq!(TypeKind::Undefined.name(), None);
}

#[test]
fn foreign_handle_is_not_contained() {
    let mut other = TypeRegistry::new();
    other.intern("a").unwrap();
    let foreign = other.intern("b").unwrap();

    let reg = TypeRegistry::new();

    assert!(!reg.contains(foreign));
    assert_eq!(reg.try_kind(foreign), None);
}

#[test]
#[should_panic(expected = "not found")]
fn kind_panics_on_foreign_handle() {
    let reg = TypeRegistry::new();
    reg.kind(TypeId::from_raw(7));
}

#[test]
fn get_does_not_intern() {
    let mut reg = TypeRegistry::new();

    assert_eq!(reg.get("int"), None);
    let int = reg.intern("int").unwrap();
    assert_eq!(reg.get("int"), Some(int));
    assert_eq!(reg.get(""), None);
    assert_eq!(reg.len(), 1);
}

#[test]
fn registries_are_isolated() {
    let mut a = TypeRegistry::new();
    let mut b = TypeRegistry::new();
    b.intern("padding").unwrap();

    let in_a = a.intern("int").unwrap();
    let in_b = b.intern("int").unwrap();

    assert_ne!(in_a, in_b);
}

#[test]
fn iter_yields_named_in_order() {
    let mut reg = TypeRegistry::new();
    let a = reg.intern("alpha").unwrap();
    let b = reg.intern("beta").unwrap();

    let items: Vec<_> = reg.iter().collect();
    assert_eq!(items, vec![(a, "alpha"), (b, "beta")]);
}

#[test]
fn type_id_raw_roundtrip() {
    let id = TypeId::from_raw(42);
    assert_eq!(id.as_u32(), 42);
}
