#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::Alternative;
use mm_types::Idx;

fn interner() -> StringInterner {
    StringInterner::new()
}

#[test]
fn actions() {
    let interner = interner();
    let add = Method::new(interner.intern_name("add"), vec![]);
    let start = Method::new(interner.intern_name("start"), vec![]);
    let signature = Method::new(interner.intern_name("fromTemplate"), vec![])
        .with_base(interner.intern_name("add"));

    assert!(!add.is_action(&interner));
    assert!(start.is_action(&interner));
    assert!(!signature.is_action(&interner));
}

#[test]
fn mandatory_queries() {
    let interner = interner();
    let mut fence = Parameter::new(interner.intern_name("fenceType"), Idx::STRING);
    fence.set_mandatory(true);
    let host = Parameter::new(interner.intern_name("host"), Idx::from_raw(10));
    let method = Method::new(interner.intern_name("fence"), vec![fence, host]);

    assert!(method.has_mandatory_attributes());
    let mandatory = method.mandatory_parameters();
    assert_eq!(mandatory.len(), 1);
    assert_eq!(mandatory[0].name(), interner.intern_name("fence_type"));
    assert!(method.mandatory_attributes().is_empty());
}

#[test]
fn mandatory_attributes_span_parameters() {
    let interner = interner();
    let mut host = Parameter::new(interner.intern_name("host"), Idx::from_raw(10));
    let (address, _) = host
        .forest_mut()
        .get_or_insert_root(interner.intern_name("address"));
    host.forest_mut().set_mandatory(address, true);
    let method = Method::new(interner.intern_name("add"), vec![host]);

    let attributes = method.mandatory_attributes();
    assert_eq!(attributes.len(), 1);
    assert_eq!(attributes[0].1, address);
    assert!(method.has_mandatory_attributes());
}

#[test]
fn no_mandatory_attributes() {
    let interner = interner();
    let method = Method::new(
        interner.intern_name("list"),
        vec![Parameter::new(interner.intern_name("max"), Idx::INTEGER)],
    );
    assert!(!method.has_mandatory_attributes());
}

#[test]
fn resolve_alternative() {
    let interner = interner();
    let host_name = interner.intern_name("host");
    let mut host = Parameter::new(host_name, Idx::from_raw(10));
    let (id, _) = host
        .forest_mut()
        .get_or_insert_root(interner.intern_name("id"));
    host.forest_mut().detach(id).unwrap();
    let method = Method::new(interner.intern_name("add"), vec![host]);

    let node = method
        .alternative_node(Alternative {
            parameter: host_name,
            node: id,
        })
        .unwrap();
    assert_eq!(node.name(), interner.intern_name("id"));
    assert!(!node.is_attached());

    assert!(method
        .alternative_node(Alternative {
            parameter: interner.intern_name("vm"),
            node: id,
        })
        .is_none());
}
