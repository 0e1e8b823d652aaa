//! Fixed command sequences with known outcomes.

use tallykv_core::{TransactionStack, NULL};
use tallykv_testkit::prelude::*;

#[test]
fn documented_session() {
    let mut stack = TransactionStack::new();

    stack.set("a", "1");
    assert_eq!(stack.get_or_null("a"), "1");
    stack.set("b", "2");
    assert_eq!(stack.count("2"), 1);

    stack.begin().unwrap();
    stack.set("a", "2");
    assert_eq!(stack.count("2"), 2);
    assert_eq!(stack.count("1"), 0);

    stack.delete("a");
    assert_eq!(stack.count("2"), 1);

    stack.rollback().unwrap();
    assert_eq!(stack.get_or_null("a"), "1");
    assert_eq!(stack.count("1"), 1);
}

#[test]
fn tombstone_shadow() {
    let mut stack = TransactionStack::new();
    stack.set("k", "a");
    stack.begin().unwrap();
    stack.delete("k");
    assert_eq!(stack.get_or_null("k"), NULL);

    stack.rollback().unwrap();
    assert_eq!(stack.get_or_null("k"), "a");
}

#[test]
fn commit_collapses() {
    let mut stack = TransactionStack::new();
    stack.set("k", "a");
    stack.begin().unwrap();
    stack.set("k", "b");
    stack.commit().unwrap();

    assert_eq!(stack.count("a"), 0);
    assert_eq!(stack.count("b"), 1);
    assert_eq!(stack.get("k"), Some("b"));
}

#[test]
fn deep_nesting_matches_model() {
    let ops = vec![
        Op::Set("a".into(), "1".into()),
        Op::Begin,
        Op::Set("b".into(), "1".into()),
        Op::Begin,
        Op::Delete("a".into()),
        Op::Set("c".into(), "1".into()),
        Op::Begin,
        Op::Set("a".into(), "1".into()),
        Op::Rollback,
        Op::Set("d".into(), "".into()),
        Op::Commit,
        Op::Begin,
        Op::Delete("b".into()),
    ];

    let mut stack = TransactionStack::new();
    let mut model = ModelStore::new();
    for op in &ops {
        apply_op(&mut stack, op);
        model.apply(op);
        assert_eq!(observe(&stack), model.observe(), "after {op:?}");
    }

    assert_eq!(stack.count("1"), 1);
    assert_eq!(stack.get("d"), Some(""));
}
