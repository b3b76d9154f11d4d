extern crate veneer;

mod common;

use std::rc::Rc;

use veneer::test_utils::{Counter, Record};
use veneer::*;
use common::{as_object, assert_not_found};

#[test]
fn nested_reaches_one_level_down() {
    let record = Rc::new(Record::new().with("name", "inner"));
    let p1 = Rc::new(Decorator::wrap(record.clone()));
    let p2 = Decorator::wrap(p1.clone());

    assert!(!p1.is_nested());
    assert!(p2.is_nested());
    assert_eq!(p2.members().collect::<Vec<_>>(), vec![UNDECORATED]);
    assert_eq!(p2.resolve("name").unwrap(), Value::from("inner"));
    assert_eq!(p2.to_text(), record.to_string());
}

#[test]
fn nested_methods_stay_bound() {
    let counter = Rc::new(Counter::new(0));
    let p2 = Decorator::new(Decorator::wrap(counter.clone()));

    p2.call("increment", &[]).unwrap();
    p2.call("add", &[Value::Int(5)]).unwrap();
    assert_eq!(counter.count(), 6);
    assert_eq!(p2.resolve("count").unwrap(), Value::Int(6));
}

#[test]
fn undecorated_peels_one_level() {
    let record = Rc::new(Record::new());
    let p1 = Rc::new(Decorator::wrap(record.clone()));
    let p2 = Decorator::wrap(p1.clone());

    assert!(Rc::ptr_eq(&p2.undecorated(), &p1));
    assert!(Rc::ptr_eq(&p2.undecorated().undecorated(), &record));
    assert_eq!(p2.resolve(UNDECORATED).unwrap(), as_object(p1));
}

#[test]
fn nested_miss_falls_through_to_base() {
    let p2 = Decorator::new(Decorator::new(Record::new().with("a", 1i64)));
    assert_eq!(p2.resolve("__id__").unwrap(), Value::Base(BaseMember::Identity));
    assert_not_found(&p2, "b");
}

#[test]
fn nested_base_members_apply_to_wrapped_decorator() {
    let p1 = Rc::new(Decorator::new(Record::new()));
    let p2 = Decorator::wrap(p1.clone());
    assert_eq!(p2.call("__type__", &[]).unwrap(), Value::from("decorator"));
    assert_eq!(
        p2.call("__eq__", &[as_object(p1)]).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn deep_chains_reach_innermost() {
    let record = Rc::new(Record::new().with("name", "inner"));
    let p3 = Decorator::new(Decorator::new(Decorator::wrap(record.clone())));
    let p1 = Decorator::wrap(record.clone());
    let p4 = Decorator::new(Decorator::new(Decorator::new(p1)));

    assert_eq!(p3.resolve("name").unwrap(), Value::from("inner"));
    assert_eq!(p4.resolve("name").unwrap(), Value::from("inner"));
    assert_not_found(&p4, "missing");

    record.set("name", "renamed");
    assert_eq!(p4.resolve("name").unwrap(), Value::from("renamed"));
    assert_eq!(p3.to_text(), record.to_string());
}

#[test]
fn decorator_as_object_is_transparent() {
    let record = Rc::new(Record::new().with("name", "inner"));
    let p1: Rc<dyn Object> = Rc::new(Decorator::wrap(record.clone()));

    assert_eq!(p1.get_member("name"), Some(Value::from("inner")));
    assert_eq!(p1.get_member(UNDECORATED), Some(as_object(record)));
    assert_eq!(p1.get_member("missing"), None);
    assert_eq!(p1.member_names(), vec![UNDECORATED.to_string()]);
}

#[test]
fn reserved_nested_member_does_not_shadow_base() {
    let record = Rc::new(Record::new().with("__text__", "shadowed"));
    let p2 = Decorator::new(Decorator::wrap(record.clone()));

    assert_eq!(p2.resolve("__text__").unwrap(), Value::Base(BaseMember::Text));
    assert_eq!(
        p2.call("__text__", &[]).unwrap(),
        Value::Str(record.to_string())
    );
    assert_not_found(&p2, "__secret__");
}

#[test]
fn nested_lookup_is_live() {
    let record = Rc::new(Record::new());
    let p2 = Decorator::new(Decorator::wrap(record.clone()));
    assert_not_found(&p2, "late");

    // one level down is asked live, not through a snapshot
    record.set("late", 1i64);
    assert_eq!(p2.resolve("late").unwrap(), Value::Int(1));
}

#[test]
fn late_member_not_in_snapshot() {
    let record = Rc::new(Record::new().with("early", 1i64));
    let decorated = Decorator::wrap(record.clone());

    record.set("late", 2i64);
    assert_eq!(decorated.members().collect::<Vec<_>>(), vec!["early"]);
    assert_not_found(&decorated, "late");

    // a fresh decorator takes a fresh snapshot
    let refreshed = Decorator::wrap(record.clone());
    assert_eq!(refreshed.resolve("late").unwrap(), Value::Int(2));
}

#[test]
fn late_member_with_base_name_resolves_to_base() {
    let record = Rc::new(Record::new());
    let decorated = Decorator::wrap(record.clone());

    record.set("__hash__", 7i64);
    assert_eq!(
        decorated.resolve("__hash__").unwrap(),
        Value::Base(BaseMember::Hash)
    );
}

#[test]
fn removed_snapshot_member_is_not_found() {
    let record = Rc::new(Record::new().with("gone", 1i64));
    let p1 = Decorator::wrap(record.clone());
    record.remove("gone");
    assert_not_found(&p1, "gone");

    record.set("gone", 3i64);
    assert_eq!(p1.resolve("gone").unwrap(), Value::Int(3));
}

#[test]
fn snapshot_member_values_stay_live() {
    let record = Rc::new(Record::new().with("n", 1i64));
    let decorated = Decorator::wrap(record.clone());
    for n in 2..6i64 {
        record.set("n", n);
        assert_eq!(decorated.resolve("n").unwrap(), Value::Int(n));
    }
}
