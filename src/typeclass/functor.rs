//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value while preserving the structure.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effectual::control::Maybe;
//! use effectual::typeclass::Functor;
//!
//! let present: Maybe<i32> = Maybe::Just(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Maybe::Just("5".to_string()));
//!
//! let absent: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(absent.fmap(|n| n.to_string()), Maybe::Nothing);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for types that can have a function mapped over their contents.
///
/// Containers with deferred, re-runnable computations (`IO`, `Reader`,
/// `State`, `Task` and the `Eff` family) expose an inherent `map` instead,
/// because their closures must be shared `Fn` values rather than `FnOnce`.
///
/// # Examples
///
/// ```rust
/// use effectual::typeclass::{Functor, Identity};
///
/// let x = Identity::of(5);
/// let y: Identity<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Identity::of("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::Maybe;
    /// use effectual::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Just(5).replace("replaced"), Maybe::Just("replaced"));
    /// assert_eq!(Maybe::<i32>::Nothing.replace("replaced"), Maybe::Nothing);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_fmap_transforms_value() {
        let wrapped = Identity::of(21);
        assert_eq!(wrapped.fmap(|x| x * 2), Identity::of(42));
    }

    #[rstest]
    fn identity_replace_and_void() {
        assert_eq!(Identity::of(1).replace("one"), Identity::of("one"));
        assert_eq!(Identity::of(1).void(), Identity::of(()));
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(-13)]
    fn identity_functor_identity_law(#[case] value: i32) {
        assert_eq!(Identity::of(value).fmap(|x| x), Identity::of(value));
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(-13)]
    fn identity_functor_composition_law(#[case] value: i32) {
        let first = |x: i32| x + 1;
        let second = |x: i32| x * 3;

        let composed = Identity::of(value).fmap(move |x| second(first(x)));
        let chained = Identity::of(value).fmap(first).fmap(second);
        assert_eq!(composed, chained);
    }
}
