//! Identity wrapper type - the identity functor.
//!
//! `Identity` is the simplest possible container: it holds exactly one value
//! and adds no behaviour. It is the baseline every other container's
//! composition laws are compared against.

use std::fmt;

use super::TypeConstructor;

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use effectual::typeclass::Identity;
///
/// let wrapped = Identity::of(42);
/// assert_eq!(wrapped.map(|n| n + 1), Identity::of(43));
/// assert_eq!(format!("{}", Identity::of(42)), "Identity 42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Wraps a value; the unit of the monad.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Identity;
    ///
    /// assert_eq!(Identity::of("hello").into_inner(), "hello");
    /// ```
    #[inline]
    pub const fn of(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Applies `function` to the wrapped value and wraps the result.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    /// Unwraps the value and hands it to `function`, returning its result
    /// directly (no double wrapping).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Identity;
    ///
    /// let doubled = Identity::of(42).and_then(|n| Identity::of(n * 2));
    /// assert_eq!(doubled, Identity::of(84));
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }

    /// Turns a unary function into one over `Identity` values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Identity;
    ///
    /// let add_three = Identity::lift(|n: i32| n + 3);
    /// assert_eq!(add_three(Identity::of(2)), Identity::of(5));
    /// ```
    pub fn lift<B, F>(function: F) -> impl Fn(Self) -> Identity<B>
    where
        F: Fn(A) -> B,
    {
        move |identity| identity.and_then(|a| Identity::of(function(a)))
    }

    /// Turns a binary function into one over `Identity` values.
    pub fn lift2<B, C, F>(function: F) -> impl Fn(Self, Identity<B>) -> Identity<C>
    where
        F: Fn(A, B) -> C,
    {
        move |first, second| {
            first.and_then(|a| second.and_then(|b| Identity::of(function(a, b))))
        }
    }

    /// Turns a ternary function into one over `Identity` values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::typeclass::Identity;
    ///
    /// let combine = Identity::lift3(|a: i32, b: i32, c: i32| a + b * c);
    /// assert_eq!(combine(Identity::of(2), Identity::of(3), Identity::of(5)), Identity::of(17));
    /// ```
    pub fn lift3<B, C, D, F>(
        function: F,
    ) -> impl Fn(Self, Identity<B>, Identity<C>) -> Identity<D>
    where
        F: Fn(A, B, C) -> D,
    {
        move |first, second, third| {
            first.and_then(|a| {
                second.and_then(|b| third.and_then(|c| Identity::of(function(a, b, c))))
            })
        }
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: fmt::Debug> fmt::Display for Identity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Identity {:?}", self.0)
    }
}
