#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use mm_ir::StringInterner;

#[test]
fn primitives_at_correct_indices() {
    let pool = Pool::new();

    assert_eq!(
        pool.data(Idx::BOOLEAN),
        &TypeData::Primitive(PrimitiveKind::Boolean)
    );
    assert_eq!(
        pool.data(Idx::INTEGER),
        &TypeData::Primitive(PrimitiveKind::Integer)
    );
    assert_eq!(
        pool.data(Idx::DECIMAL),
        &TypeData::Primitive(PrimitiveKind::Decimal)
    );
    assert_eq!(
        pool.data(Idx::STRING),
        &TypeData::Primitive(PrimitiveKind::String)
    );
    assert_eq!(pool.data(Idx::DATE), &TypeData::Primitive(PrimitiveKind::Date));
    assert_eq!(pool.len(), Idx::PRIMITIVE_COUNT as usize);
}

#[test]
fn lists_are_interned() {
    let mut pool = Pool::new();
    let a = pool.list(Idx::STRING);
    let b = pool.list(Idx::STRING);
    let c = pool.list(Idx::INTEGER);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(pool.list_element(a), Some(Idx::STRING));
    assert!(pool.is_structured(a));
}

#[test]
fn recursive_structs() {
    let interner = StringInterner::new();
    let mut pool = Pool::new();

    let host = pool.declare_struct(interner.intern_name("Host")).unwrap();
    let cluster = pool.declare_struct(interner.intern_name("Cluster")).unwrap();
    let hosts = pool.list(host);

    pool.define_members(
        host,
        vec![Member::new(interner.intern_name("cluster"), cluster)],
    )
    .unwrap();
    pool.define_members(
        cluster,
        vec![Member::new(interner.intern_name("hosts"), hosts)],
    )
    .unwrap();

    assert_eq!(
        pool.struct_member(host, interner.intern_name("cluster")),
        Some(cluster)
    );
    assert_eq!(
        pool.struct_member(cluster, interner.intern_name("hosts")),
        Some(hosts)
    );
    assert_eq!(pool.by_name(interner.intern_name("host")), Some(host));
}

#[test]
fn define_members_errors() {
    let interner = StringInterner::new();
    let mut pool = Pool::new();
    let id = interner.intern_name("id");
    let vm = pool.struct_type(interner.intern_name("Vm"), vec![Member::new(id, Idx::STRING)]).unwrap();

    assert_eq!(
        pool.define_members(vm, vec![]),
        Err(PoolError::AlreadyDefined(vm))
    );
    assert_eq!(
        pool.define_members(Idx::STRING, vec![]),
        Err(PoolError::NotAStruct(Idx::STRING))
    );

    let disk = pool.declare_struct(interner.intern_name("Disk")).unwrap();
    assert_eq!(
        pool.define_members(
            disk,
            vec![Member::new(id, Idx::STRING), Member::new(id, Idx::INTEGER)]
        ),
        Err(PoolError::DuplicateMember { ty: disk, member: id })
    );
}

#[test]
fn duplicate_type_names() {
    let interner = StringInterner::new();
    let mut pool = Pool::new();
    let name = interner.intern_name("FenceType");

    pool.enum_type(name, vec![interner.intern_name("manual")]).unwrap();
    assert_eq!(pool.declare_struct(name), Err(PoolError::DuplicateType(name)));
}

#[test]
fn simple_and_structured() {
    let interner = StringInterner::new();
    let mut pool = Pool::new();
    let fence = pool
        .enum_type(interner.intern_name("FenceType"), vec![])
        .unwrap();
    let vm = pool.struct_type(interner.intern_name("Vm"), vec![]).unwrap();

    assert!(pool.is_simple(Idx::BOOLEAN));
    assert!(pool.is_simple(fence));
    assert!(!pool.is_simple(vm));
    assert!(pool.is_structured(vm));
    assert!(!pool.is_structured(fence));
    assert!(!pool.is_simple(Idx::from_raw(999)));
}
