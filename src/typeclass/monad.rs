//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to sequence computations where each step can depend on the
//! result of the previous step.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::control::Maybe;
//! use effectual::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     Maybe::of(text.parse::<i32>().ok().filter(|&n| n > 0))
//! }
//!
//! let result = Maybe::Just("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::Just(n * 2));
//! assert_eq!(result, Maybe::Just(84));
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// A type class for types that support sequencing of computations.
///
/// `flat_map` is the bind operation; it never re-wraps a terminal case, so a
/// chain stops at the first absence or error.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is a terminal case the failure propagates and `next` is
    /// dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}
