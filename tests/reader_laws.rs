#![cfg(feature = "effect")]
//! Property-based tests for Reader Monad laws.
//!
//! ## Functor Laws
//! - Identity: reader.map(|x| x) == reader
//! - Composition: reader.map(f).map(g) == reader.map(|x| g(f(x)))
//!
//! ## Monad Laws
//! - Left Identity: of(a).and_then(f) == f(a)
//! - Right Identity: m.and_then(of) == m
//! - Associativity: m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))
//!
//! ## Reader Laws
//! - Ask Retrieval: ask().run(r) == r
//! - Merge: merge2(r1, r2).run(e) == (r1.run(e), r2.run(e))

use effectual::effect::Reader;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_reader_functor_identity(environment in -1000i32..1000i32) {
        let reader: Reader<i32, i32> = Reader::asks(|environment: i32| environment * 3);
        prop_assert_eq!(reader.clone().map(|x| x).run(environment), reader.run(environment));
    }

    #[test]
    fn prop_reader_functor_composition(environment in -100i32..100i32) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);

        let reader: Reader<i32, i32> = Reader::ask();
        let left = reader.clone().map(function1).map(function2);
        let right = reader.map(move |x| function2(function1(x)));
        prop_assert_eq!(left.run(environment), right.run(environment));
    }

    #[test]
    fn prop_reader_monad_left_identity(value in -1000i32..1000i32, environment in -1000i32..1000i32) {
        let function = |a: i32| Reader::new(move |environment: i32| a.wrapping_add(environment));

        let left: Reader<i32, i32> = Reader::of(value).and_then(function);
        let right: Reader<i32, i32> = function(value);
        prop_assert_eq!(left.run(environment), right.run(environment));
    }

    #[test]
    fn prop_reader_monad_right_identity(environment in -1000i32..1000i32) {
        let reader: Reader<i32, i32> = Reader::ask();
        let right_identity = reader.clone().and_then(Reader::of);
        prop_assert_eq!(reader.run(environment), right_identity.run(environment));
    }

    #[test]
    fn prop_reader_monad_associativity(environment in -100i32..100i32) {
        let function1 = |a: i32| Reader::new(move |environment: i32| a.wrapping_add(environment));
        let function2 = |b: i32| Reader::new(move |environment: i32| b.wrapping_mul(environment));

        let reader: Reader<i32, i32> = Reader::ask();
        let left = reader.clone().and_then(function1).and_then(function2);
        let right = reader.and_then(move |x| function1(x).and_then(function2));
        prop_assert_eq!(left.run(environment), right.run(environment));
    }

    #[test]
    fn prop_reader_ask_retrieval(environment in any::<i64>()) {
        prop_assert_eq!(Reader::<i64, i64>::ask().run(environment), environment);
    }

    #[test]
    fn prop_reader_merge2_runs_both(environment in -1000i32..1000i32) {
        let first: Reader<i32, i32> = Reader::asks(|e: i32| e + 1);
        let second: Reader<i32, String> = Reader::asks(|e: i32| e.to_string());
        let merged = Reader::merge2(first.clone(), second.clone());
        prop_assert_eq!(merged.run(environment), (first.run(environment), second.run(environment)));
    }

    #[test]
    fn prop_reader_lift(environment in -1000i32..1000i32, value in -1000i32..1000i32) {
        let function = |x: i32| x * 2;
        prop_assert_eq!(
            Reader::lift(function)(Reader::<i32, i32>::of(value)).run(environment),
            function(value)
        );
    }
}
