//! Maybe type - an optional value.
//!
//! `Maybe<A>` is either `Just(a)` or `Nothing`. Absence is a first-class
//! value, not an error: `map` and `and_then` short-circuit on `Nothing` and
//! keep it as `Nothing`.
//!
//! # Examples
//!
//! ```rust
//! use effectual::control::Maybe;
//!
//! assert_eq!(Maybe::Just(2).map(|a| a + 3), Maybe::Just(5));
//! assert_eq!(Maybe::<i32>::Nothing.map(|a| a + 2), Maybe::Nothing);
//!
//! // `of` turns a possibly-missing value into a Maybe
//! assert_eq!(Maybe::of(Some(2)), Maybe::Just(2));
//! assert_eq!(Maybe::<i32>::of(None), Maybe::Nothing);
//! ```

use std::fmt;

use super::thrown::catch_thrown;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that may be absent.
///
/// `Nothing` carries no data, so every `Nothing` is interchangeable with
/// every other; there is no shared instance to protect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// A present value.
    Just(A),
    /// No value.
    Nothing,
}

impl<A> Maybe<A> {
    /// Returns `Nothing` for `None` and `Just(a)` for `Some(a)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::Maybe;
    ///
    /// let config_value: Option<&str> = None;
    /// assert!(Maybe::of(config_value).is_nothing());
    /// ```
    #[inline]
    pub fn of(value: Option<A>) -> Self {
        match value {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }

    /// Wraps a value in `Just`.
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self::Just(value)
    }

    /// The absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    /// Runs `function` and wraps its return value in `Just`; a panic yields
    /// `Nothing`.
    ///
    /// The value is wrapped in `Just` unconditionally, even when it is itself
    /// an empty `Option`: the function completed, so a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_throwable(|| "foo"), Maybe::Just("foo"));
    /// assert_eq!(Maybe::<&str>::from_throwable(|| panic!("no")), Maybe::Nothing);
    /// ```
    pub fn from_throwable<F>(function: F) -> Self
    where
        F: FnOnce() -> A,
    {
        match catch_thrown(function) {
            Ok(value) => Self::Just(value),
            Err(_) => Self::Nothing,
        }
    }

    /// Invokes exactly one of the handlers depending on the active case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::Maybe;
    ///
    /// let describe = |maybe: Maybe<i32>| maybe.cases(|a| format!("Just {a}"), || "Nothing".to_string());
    /// assert_eq!(describe(Maybe::Just(2)), "Just 2");
    /// assert_eq!(describe(Maybe::Nothing), "Nothing");
    /// ```
    #[inline]
    pub fn cases<B, J, N>(self, just: J, nothing: N) -> B
    where
        J: FnOnce(A) -> B,
        N: FnOnce() -> B,
    {
        match self {
            Self::Just(value) => just(value),
            Self::Nothing => nothing(),
        }
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        !self.is_just()
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Applies `function` to a present value; `Nothing` stays `Nothing`.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains a computation that may itself be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(2).and_then(|a| Maybe::Just(a + 2)), Maybe::Just(4));
    /// assert_eq!(Maybe::Just(2).and_then(|_| Maybe::<i32>::Nothing), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Turns a unary function into one over `Maybe` values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::Maybe;
    ///
    /// let add_two = Maybe::lift(|a: i32| a + 2);
    /// assert_eq!(add_two(Maybe::Just(3)), Maybe::Just(5));
    /// assert_eq!(add_two(Maybe::Nothing), Maybe::Nothing);
    /// ```
    pub fn lift<B, F>(function: F) -> impl Fn(Self) -> Maybe<B>
    where
        F: Fn(A) -> B,
    {
        move |maybe| maybe.map(&function)
    }

    /// Turns a binary function into one over `Maybe` values.
    pub fn lift2<B, C, F>(function: F) -> impl Fn(Self, Maybe<B>) -> Maybe<C>
    where
        F: Fn(A, B) -> C,
    {
        move |first, second| first.and_then(|a| second.map(|b| function(a, b)))
    }

    /// Turns a ternary function into one over `Maybe` values.
    pub fn lift3<B, C, D, F>(function: F) -> impl Fn(Self, Maybe<B>, Maybe<C>) -> Maybe<D>
    where
        F: Fn(A, B, C) -> D,
    {
        move |first, second, third| {
            first.and_then(|a| second.and_then(|b| third.map(|c| function(a, b, c))))
        }
    }
}

impl<F> Maybe<F> {
    /// Applies a wrapped function to a wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::Maybe;
    ///
    /// let add_one = Maybe::Just(|a: i32| a + 1);
    /// assert_eq!(add_one.ap(Maybe::Just(41)), Maybe::Just(42));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, value: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.and_then(|function| value.map(function))
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        Self::of(value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(value: Maybe<A>) -> Self {
        value.into_option()
    }
}

impl<A: fmt::Debug> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just {value:?}"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.and_then(|a| other.map(|b| function(a, b)))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.and_then(|a| second.and_then(|b| third.map(|c| function(a, b, c))))
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.and_then(function)
    }
}
