#![cfg(feature = "effect")]
//! Property-based tests for Monad laws and lift correctness of the eager
//! containers.
//!
//! ## Monad Laws
//! - Left Identity: of(a).and_then(f) == f(a)
//! - Right Identity: m.and_then(of) == m
//! - Associativity: m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))
//!
//! ## Lift
//! - lift(f)(of(a)) == of(f(a)), and the same for lift2/lift3

use effectual::control::{Maybe, Outcome};
use effectual::effect::Writer;
use effectual::typeclass::{Applicative, Identity, Monad};
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![any::<i32>().prop_map(Maybe::Just), Just(Maybe::Nothing)]
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::Val),
        "[a-z]{0,8}".prop_map(Outcome::Err),
    ]
}

fn halve_maybe(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing }
}

fn positive_outcome(n: i32) -> Outcome<i32, String> {
    if n > 0 {
        Outcome::Val(n)
    } else {
        Outcome::Err(format!("{n} is not positive"))
    }
}

// =============================================================================
// Identity
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_left_identity(value in any::<i32>()) {
        let function = |a: i32| Identity::of(a.wrapping_mul(3));
        prop_assert_eq!(Identity::of(value).and_then(function), function(value));
    }

    #[test]
    fn prop_identity_right_identity(value in any::<i32>()) {
        prop_assert_eq!(Identity::of(value).and_then(Identity::of), Identity::of(value));
    }

    #[test]
    fn prop_identity_lift(a in any::<i16>(), b in any::<i16>(), c in any::<i16>()) {
        let add = |x: i16, y: i16| i32::from(x) + i32::from(y);
        prop_assert_eq!(Identity::lift2(add)(Identity::of(a), Identity::of(b)), Identity::of(add(a, b)));
        prop_assert_eq!(
            Identity::lift3(|x: i16, y: i16, z: i16| i32::from(x) + i32::from(y) + i32::from(z))(
                Identity::of(a),
                Identity::of(b),
                Identity::of(c)
            ),
            Identity::of(i32::from(a) + i32::from(b) + i32::from(c))
        );
    }
}

// =============================================================================
// Maybe
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Maybe::pure(value).and_then(halve_maybe), halve_maybe(value));
    }

    #[test]
    fn prop_maybe_right_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.and_then(Maybe::pure), maybe);
    }

    #[test]
    fn prop_maybe_associativity(maybe in maybe_strategy()) {
        let left = maybe.and_then(halve_maybe).and_then(halve_maybe);
        let right = maybe.and_then(|x| halve_maybe(x).and_then(halve_maybe));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_trait_matches_inherent(maybe in maybe_strategy()) {
        prop_assert_eq!(Monad::flat_map(maybe, halve_maybe), maybe.and_then(halve_maybe));
        prop_assert_eq!(
            <Maybe<()> as Applicative>::pure(1).map2(maybe, |a: i32, b| a.wrapping_add(b)),
            maybe.map(|b| b.wrapping_add(1))
        );
    }

    #[test]
    fn prop_maybe_lift(value in any::<i32>()) {
        let function = |x: i32| x.wrapping_mul(2);
        prop_assert_eq!(Maybe::lift(function)(Maybe::pure(value)), Maybe::pure(function(value)));
        prop_assert_eq!(
            Maybe::lift2(i32::wrapping_add)(Maybe::pure(value), Maybe::pure(1)),
            Maybe::pure(value.wrapping_add(1))
        );
    }
}

// =============================================================================
// Outcome
// =============================================================================

proptest! {
    #[test]
    fn prop_outcome_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Outcome::of(value).and_then(positive_outcome), positive_outcome(value));
    }

    #[test]
    fn prop_outcome_right_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().and_then(Outcome::of), outcome);
    }

    #[test]
    fn prop_outcome_associativity(outcome in outcome_strategy()) {
        let decrement = |n: i32| positive_outcome(n.wrapping_sub(10));
        let left = outcome.clone().and_then(positive_outcome).and_then(decrement);
        let right = outcome.and_then(move |x| positive_outcome(x).and_then(decrement));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_outcome_first_error_wins(first in "[a-z]{1,4}", second in "[A-Z]{1,4}") {
        let chained = Outcome::<i32, String>::Err(first.clone())
            .and_then(|_| Outcome::<i32, String>::Err(second.clone()));
        prop_assert_eq!(chained, Outcome::Err(first));
    }

    #[test]
    fn prop_outcome_lift(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let lifted = Outcome::<i32, String>::lift3(|x: i32, y: i32, z: i32| x.wrapping_add(y).wrapping_add(z));
        prop_assert_eq!(
            lifted(Outcome::of(a), Outcome::of(b), Outcome::of(c)),
            Outcome::of(a.wrapping_add(b).wrapping_add(c))
        );
    }
}

// =============================================================================
// Writer
// =============================================================================

fn logged(n: i32) -> Writer<String, i32> {
    Writer::tell(format!("saw {n}")).then(Writer::of(n.wrapping_add(1)))
}

proptest! {
    #[test]
    fn prop_writer_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Writer::of(value).and_then(logged), logged(value));
    }

    #[test]
    fn prop_writer_right_identity(value in any::<i32>(), log in prop::collection::vec("[a-z]{1,3}", 0..4)) {
        let writer = Writer::new(value, log);
        prop_assert_eq!(writer.clone().and_then(Writer::of), writer);
    }

    #[test]
    fn prop_writer_associativity(value in any::<i32>()) {
        let left = logged(value).and_then(logged).and_then(logged);
        let right = logged(value).and_then(|x| logged(x).and_then(logged));
        prop_assert_eq!(left, right);
    }
}
