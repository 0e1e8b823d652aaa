//! Property tests for the transaction stack.
//!
//! Random operation sequences are replayed against both the real stack
//! and the snapshot model; every observable must agree after every step.

use proptest::prelude::*;
use tallykv_core::TransactionStack;
use tallykv_testkit::prelude::*;

proptest! {
    #![proptest_config(PropTestConfig::default().to_proptest_config())]

    #[test]
    fn stack_matches_model(ops in ops_strategy(64)) {
        let mut stack = TransactionStack::new();
        let mut model = ModelStore::new();

        for op in &ops {
            apply_op(&mut stack, op);
            model.apply(op);
            prop_assert_eq!(observe(&stack), model.observe(), "after {:?}", op);
        }
    }

    #[test]
    fn count_equals_visible_occurrences(ops in ops_strategy(64)) {
        let mut stack = TransactionStack::new();

        for op in &ops {
            apply_op(&mut stack, op);
            for value in VALUES {
                prop_assert_eq!(
                    stack.count(value),
                    count_by_scan(&stack, value),
                    "count({:?}) after {:?}", value, op
                );
            }
        }
    }

    #[test]
    fn rollback_is_fully_reversible(
        setup in ops_strategy(32),
        body in ops_strategy(32),
    ) {
        let mut stack = TransactionStack::new();
        apply_ops(&mut stack, &setup);
        let before = observe(&stack);

        stack.begin().unwrap();
        // Commits inside the body would fold the outer transaction too.
        let body: Vec<_> = body.into_iter().filter(|op| *op != Op::Commit).collect();
        let mut opened = 0usize;
        for op in &body {
            match op {
                Op::Begin => opened += 1,
                Op::Rollback if opened == 0 => continue,
                Op::Rollback => opened -= 1,
                _ => {}
            }
            apply_op(&mut stack, op);
        }
        for _ in 0..=opened {
            stack.rollback().unwrap();
        }

        prop_assert_eq!(observe(&stack), before);
    }

    #[test]
    fn rollback_of_writes_restores_report(
        setup in ops_strategy(32),
        writes in writes_strategy(32),
    ) {
        let mut stack = TransactionStack::new();
        apply_ops(&mut stack, &setup);
        let before = stack.report();

        stack.begin().unwrap();
        apply_ops(&mut stack, &writes);
        stack.rollback().unwrap();

        prop_assert_eq!(stack.report(), before);
    }

    #[test]
    fn commit_preserves_observations(ops in ops_strategy(64)) {
        let mut stack = TransactionStack::new();
        apply_ops(&mut stack, &ops);
        let mut expected = observe(&stack);

        stack.commit().unwrap();
        expected.depth = 1;

        prop_assert_eq!(observe(&stack), expected);
        prop_assert_eq!(stack.report().frames.len(), 1);
    }

    #[test]
    fn committed_root_is_self_consistent(ops in ops_strategy(64)) {
        let mut stack = TransactionStack::new();
        apply_ops(&mut stack, &ops);
        stack.commit().unwrap();

        // With only the root left, its deltas are plain counts of its entries.
        let root = &stack.report().frames[0];
        for (value, delta) in &root.counts {
            let held = root
                .entries
                .iter()
                .filter(|(_, slot)| slot.value() == Some(value.as_str()))
                .count() as i64;
            prop_assert_eq!(*delta, held, "value {:?}", value);
        }
    }

    #[test]
    fn report_is_idempotent(ops in ops_strategy(64)) {
        let mut stack = TransactionStack::new();
        apply_ops(&mut stack, &ops);

        let first = stack.report();
        let second = stack.report();
        prop_assert_eq!(first.to_string(), second.to_string());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn inner_set_shadows_until_rollback(
        setup in ops_strategy(32),
        key in key_strategy(),
        value in value_strategy(),
    ) {
        let mut stack = TransactionStack::new();
        apply_ops(&mut stack, &setup);
        let before = stack.get(&key).map(str::to_owned);

        stack.begin().unwrap();
        stack.set(&key, &value);
        prop_assert_eq!(stack.get(&key), Some(value.as_str()));

        stack.rollback().unwrap();
        prop_assert_eq!(stack.get(&key).map(str::to_owned), before);
    }
}
