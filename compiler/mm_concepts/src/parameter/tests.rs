use super::*;
use mm_ir::StringInterner;
use pretty_assertions::assert_eq;

#[test]
fn defaults() {
    let interner = StringInterner::new();
    let p = Parameter::new(interner.intern_name("async"), Idx::BOOLEAN);

    assert!(!p.is_mandatory());
    assert!(p.is_in());
    assert!(!p.is_out());
    assert!(p.forest().is_empty());
}

#[test]
fn directions() {
    let interner = StringInterner::new();
    let p = Parameter::new(interner.intern_name("vm"), Idx::STRING).with_direction(Direction::InOut);
    assert!(p.is_in());
    assert!(p.is_out());

    let p = p.with_direction(Direction::Out);
    assert!(!p.is_in());
    assert!(p.is_out());
}

#[test]
fn mandatory_attributes_skip_optional_and_scaffolding() {
    let interner = StringInterner::new();
    let mut p = Parameter::new(interner.intern_name("cluster"), Idx::from_raw(10));
    let forest = p.forest_mut();
    let (version, _) = forest.get_or_insert_root(interner.intern_name("version"));
    let (major, _) = forest.get_or_insert_child(version, interner.intern_name("major"));
    let (minor, _) = forest.get_or_insert_child(version, interner.intern_name("minor"));
    forest.set_mandatory(major, true);
    forest.set_mandatory(minor, false);

    assert_eq!(p.mandatory_attributes(), vec![major]);
}

#[test]
fn lookup_by_name() {
    let interner = StringInterner::new();
    let params = vec![
        Parameter::new(interner.intern_name("host"), Idx::from_raw(10)),
        Parameter::new(interner.intern_name("fenceType"), Idx::STRING),
    ];

    assert_eq!(
        parameter_by_name(&params, interner.intern_name("fence_type")),
        Some(1)
    );
    assert_eq!(parameter_by_name(&params, interner.intern_name("vm")), None);
}
