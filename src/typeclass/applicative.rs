//! Applicative type class - lifting values and combining independent computations.
//!
//! `Applicative` extends [`Functor`] with `pure`, which lifts a plain value
//! into the container, and `map2`/`map3`, which combine the contents of
//! several containers with an n-ary function. The `lift2`/`lift3` helpers on
//! each container are built from these operations.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! Self::pure(()).map2(v, |(), b| b) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! Self::pure(a).map2(Self::pure(b), f) == Self::pure(f(a, b))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::control::Maybe;
//! use effectual::typeclass::Applicative;
//!
//! let lifted: Maybe<i32> = <Maybe<()> as Applicative>::pure(42);
//! assert_eq!(lifted, Maybe::Just(42));
//!
//! let sum = Maybe::Just(1).map2(Maybe::Just(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::Just(3));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for functors that can lift values and combine contents.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::{Applicative, Identity};
    ///
    /// let x: Identity<i32> = <Identity<()>>::pure(42);
    /// assert_eq!(x, Identity::of(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side is in a terminal case (absence or error), that case is
    /// propagated; the left-hand side is inspected first.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::Maybe;
    /// use effectual::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::Just(1).product(Maybe::Just("a")), Maybe::Just((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Identity<B>, third: Identity<C>, function: F) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity(function(self.0, second.0, third.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_pure_wraps_value() {
        let wrapped: Identity<&str> = <Identity<()>>::pure("hello");
        assert_eq!(wrapped, Identity::of("hello"));
    }

    #[rstest]
    #[case(2, 3, 5)]
    #[case(-4, 4, 0)]
    fn identity_map2_combines(#[case] left: i32, #[case] right: i32, #[case] expected: i32) {
        let combined = Identity::of(left).map2(Identity::of(right), |a, b| a + b);
        assert_eq!(combined, Identity::of(expected));
    }

    #[rstest]
    fn identity_map3_combines() {
        let combined =
            Identity::of(2).map3(Identity::of(3), Identity::of(5), |a, b, c| a + b * c);
        assert_eq!(combined, Identity::of(17));
    }

    #[rstest]
    fn identity_product_pairs_values() {
        assert_eq!(
            Identity::of(1).product(Identity::of("one")),
            Identity::of((1, "one"))
        );
    }
}
