#![cfg(feature = "effect")]
//! Property-based tests for Task Monad laws.
//!
//! Two tasks are considered equal when running them with synchronous
//! executors settles the same way.
//!
//! ## Functor Laws
//! - Identity: task.map(|x| x) == task
//! - Composition: task.map(f).map(g) == task.map(|x| g(f(x)))
//!
//! ## Monad Laws
//! - Left Identity: of(a).and_then(f) == f(a)
//! - Right Identity: m.and_then(of) == m
//! - Associativity: m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))
//!
//! ## Error Channel
//! - fail(x).and_then(f) == fail(x)
//! - fail(x).handle_error(success) == success(x)

use std::cell::RefCell;
use std::rc::Rc;

use effectual::control::Outcome;
use effectual::effect::Task;
use proptest::prelude::*;

fn settle<A: 'static, X: 'static>(task: &Task<A, X>) -> Option<Outcome<A, X>> {
    let slot = Rc::new(RefCell::new(None));
    let on_success = Rc::clone(&slot);
    let on_failure = Rc::clone(&slot);
    task.run(
        move |value| *on_success.borrow_mut() = Some(Outcome::Val(value)),
        move |error| *on_failure.borrow_mut() = Some(Outcome::Err(error)),
    );
    slot.take()
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::Val),
        "[a-z]{1,6}".prop_map(Outcome::Err),
    ]
}

fn checked_half(n: i32) -> Task<i32, String> {
    if n % 2 == 0 {
        Task::success(n / 2)
    } else {
        Task::fail(format!("{n} is odd"))
    }
}

proptest! {
    #[test]
    fn prop_task_functor_identity(outcome in outcome_strategy()) {
        let task = Task::from_result(outcome);
        prop_assert_eq!(settle(&task.clone().map(|x| x)), settle(&task));
    }

    #[test]
    fn prop_task_functor_composition(outcome in outcome_strategy()) {
        let task = Task::from_result(outcome);
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(3);

        let left = task.clone().map(function1).map(function2);
        let right = task.map(move |x| function2(function1(x)));
        prop_assert_eq!(settle(&left), settle(&right));
    }

    #[test]
    fn prop_task_monad_left_identity(value in any::<i32>()) {
        prop_assert_eq!(
            settle(&Task::of(value).and_then(checked_half)),
            settle(&checked_half(value))
        );
    }

    #[test]
    fn prop_task_monad_right_identity(outcome in outcome_strategy()) {
        let task = Task::from_result(outcome);
        prop_assert_eq!(settle(&task.clone().and_then(Task::of)), settle(&task));
    }

    #[test]
    fn prop_task_monad_associativity(outcome in outcome_strategy()) {
        let task = Task::from_result(outcome);
        let left = task.clone().and_then(checked_half).and_then(checked_half);
        let right = task.and_then(|x| checked_half(x).and_then(checked_half));
        prop_assert_eq!(settle(&left), settle(&right));
    }

    #[test]
    fn prop_task_failure_short_circuits(error in "[a-z]{1,6}") {
        let task = Task::<i32, String>::fail(error.clone()).and_then(|x| Task::success(x + 1));
        prop_assert_eq!(settle(&task), Some(Outcome::Err(error)));
    }

    #[test]
    fn prop_task_handle_error_recovers(error in any::<i32>()) {
        let task = Task::<i32, i32>::fail(error).handle_error(Task::<i32, ()>::success);
        prop_assert_eq!(settle(&task), Some(Outcome::Val(error)));
    }

    #[test]
    fn prop_task_map2_combines(a in any::<i32>(), b in any::<i32>()) {
        let combined = Task::<i32, String>::success(a).map2(Task::success(b), i32::wrapping_sub);
        prop_assert_eq!(settle(&combined), Some(Outcome::Val(a.wrapping_sub(b))));
    }
}
