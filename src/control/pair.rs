//! Pair type - an immutable two-element tuple.
//!
//! `Pair<A, B>` is a functor over its right component: [`Pair::map`]
//! transforms `B` and leaves `A` alone, the way a `Writer` keeps its log
//! while the value changes. [`Pair::map_both`] transforms the whole tuple.

use crate::typeclass::{Functor, TypeConstructor};

/// An immutable pair of values.
///
/// # Examples
///
/// ```rust
/// use effectual::control::Pair;
///
/// let pair = Pair::from("count", 2);
/// assert_eq!(pair.map(|n| n * 10).to_tuple(), ("count", 20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B> {
    left: A,
    right: B,
}

impl<A, B> Pair<A, B> {
    /// Builds a pair from its two components.
    #[inline]
    pub const fn from(left: A, right: B) -> Self {
        Self { left, right }
    }

    /// Builds a pair from a tuple.
    #[inline]
    pub fn of((left, right): (A, B)) -> Self {
        Self { left, right }
    }

    /// The left component.
    #[inline]
    pub const fn left(&self) -> &A {
        &self.left
    }

    /// The right component.
    #[inline]
    pub const fn right(&self) -> &B {
        &self.right
    }

    /// Copies both components out into a tuple.
    #[inline]
    pub fn to_tuple(&self) -> (A, B)
    where
        A: Clone,
        B: Clone,
    {
        (self.left.clone(), self.right.clone())
    }

    /// Consumes the pair and returns its components.
    #[inline]
    pub fn into_tuple(self) -> (A, B) {
        (self.left, self.right)
    }

    /// Transforms the right component; the left one is kept.
    #[inline]
    pub fn map<C, F>(self, function: F) -> Pair<A, C>
    where
        F: FnOnce(B) -> C,
    {
        Pair {
            left: self.left,
            right: function(self.right),
        }
    }

    /// Transforms the whole tuple at once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::Pair;
    ///
    /// let pair = Pair::from(1, 2).map_both(|(a, b)| (b, a + b));
    /// assert_eq!(pair.into_tuple(), (2, 3));
    /// ```
    #[inline]
    pub fn map_both<C, D, F>(self, function: F) -> Pair<C, D>
    where
        F: FnOnce((A, B)) -> (C, D),
    {
        Pair::of(function(self.into_tuple()))
    }

    /// Exchanges the components.
    #[inline]
    pub fn swap(self) -> Pair<B, A> {
        Pair {
            left: self.right,
            right: self.left,
        }
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from(value: (A, B)) -> Self {
        Self::of(value)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(value: Pair<A, B>) -> Self {
        value.into_tuple()
    }
}

impl<A, B> TypeConstructor for Pair<A, B> {
    type Inner = B;
    type WithType<C> = Pair<A, C>;
}

impl<A, B> Functor for Pair<A, B> {
    #[inline]
    fn fmap<C, F>(self, function: F) -> Pair<A, C>
    where
        F: FnOnce(B) -> C,
    {
        self.map(function)
    }
}
