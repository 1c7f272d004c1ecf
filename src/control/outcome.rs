//! Outcome type - a success value or an error value.
//!
//! `Outcome<A, X>` is `Val(a)` or `Err(x)`. It is right-biased: `map` and
//! `and_then` act on the value and pass an error through untouched, while
//! [`Outcome::handle_error`] is the dual that acts on the error.
//!
//! The name keeps the type apart from [`std::result::Result`]; both convert
//! into each other with `From`.
//!
//! # Examples
//!
//! ```rust
//! use effectual::control::Outcome;
//!
//! let parsed: Outcome<i32, String> = Outcome::Val(2);
//! assert_eq!(parsed.map(|a| a + 3), Outcome::Val(5));
//!
//! let failed: Outcome<i32, String> = Outcome::Err("bad input".to_string());
//! assert_eq!(failed.clone().map(|a| a + 3), failed);
//! ```

use super::maybe::Maybe;
use super::thrown::{Thrown, catch_thrown};
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A success value (`Val`) or an error value (`Err`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<A, X> {
    /// A success value.
    Val(A),
    /// An error value.
    Err(X),
}

impl<A, X> Outcome<A, X> {
    /// Wraps a value in `Val`.
    #[inline]
    pub const fn of(value: A) -> Self {
        Self::Val(value)
    }

    /// Invokes exactly one of the handlers depending on the active case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Err("broken");
    /// let text = outcome.cases(|value| format!("ok {value}"), |error| format!("error {error}"));
    /// assert_eq!(text, "error broken");
    /// ```
    #[inline]
    pub fn cases<B, V, E>(self, val: V, err: E) -> B
    where
        V: FnOnce(A) -> B,
        E: FnOnce(X) -> B,
    {
        match self {
            Self::Val(value) => val(value),
            Self::Err(error) => err(error),
        }
    }

    /// Returns `true` for `Val`.
    #[inline]
    pub const fn is_val(&self) -> bool {
        matches!(self, Self::Val(_))
    }

    /// Returns `true` for `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_val()
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Val(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Applies `function` to a success value.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Outcome<B, X>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Val(value) => Outcome::Val(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Chains a computation that may fail with the same error type.
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Outcome<B, X>
    where
        F: FnOnce(A) -> Outcome<B, X>,
    {
        match self {
            Self::Val(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Recovers from an error; a success value passes through unchanged.
    ///
    /// The handler may return a new error, which lets the error type change
    /// as the failure is translated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::Outcome;
    ///
    /// let failed: Outcome<i32, i32> = Outcome::Err(2);
    /// assert_eq!(failed.handle_error(|e| Outcome::<i32, ()>::Val(e + 2)), Outcome::Val(4));
    /// ```
    #[inline]
    pub fn handle_error<Y, F>(self, function: F) -> Outcome<A, Y>
    where
        F: FnOnce(X) -> Outcome<A, Y>,
    {
        match self {
            Self::Val(value) => Outcome::Val(value),
            Self::Err(error) => function(error),
        }
    }

    /// Discards the error, mapping `Val` to `Just` and `Err` to `Nothing`.
    #[inline]
    pub fn to_maybe(self) -> Maybe<A> {
        match self {
            Self::Val(value) => Maybe::Just(value),
            Self::Err(_) => Maybe::Nothing,
        }
    }

    /// Converts into the standard library's `Result`.
    #[inline]
    pub fn into_result(self) -> Result<A, X> {
        match self {
            Self::Val(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&A, &X> {
        match self {
            Self::Val(value) => Outcome::Val(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Turns a unary function into one over `Outcome` values.
    pub fn lift<B, F>(function: F) -> impl Fn(Self) -> Outcome<B, X>
    where
        F: Fn(A) -> B,
    {
        move |outcome| outcome.map(&function)
    }

    /// Turns a binary function into one over `Outcome` values.
    ///
    /// The first error, scanning left to right, wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::Outcome;
    ///
    /// let add = Outcome::lift2(|a: i32, b: i32| a + b);
    /// assert_eq!(add(Outcome::<_, &str>::Val(3), Outcome::Val(2)), Outcome::Val(5));
    /// assert_eq!(add(Outcome::Err("first"), Outcome::Err("second")), Outcome::Err("first"));
    /// ```
    pub fn lift2<B, C, F>(function: F) -> impl Fn(Self, Outcome<B, X>) -> Outcome<C, X>
    where
        F: Fn(A, B) -> C,
    {
        move |first, second| first.and_then(|a| second.map(|b| function(a, b)))
    }

    /// Turns a ternary function into one over `Outcome` values.
    pub fn lift3<B, C, D, F>(
        function: F,
    ) -> impl Fn(Self, Outcome<B, X>, Outcome<C, X>) -> Outcome<D, X>
    where
        F: Fn(A, B, C) -> D,
    {
        move |first, second, third| {
            first.and_then(|a| second.and_then(|b| third.map(|c| function(a, b, c))))
        }
    }
}

impl<A> Outcome<A, Thrown> {
    /// Runs `function`; its return value becomes `Val`, a panic becomes
    /// `Err` carrying the panic message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::{Outcome, Thrown};
    ///
    /// assert_eq!(Outcome::from_throwable(|| 2), Outcome::Val(2));
    /// assert_eq!(
    ///     Outcome::<i32, Thrown>::from_throwable(|| panic!("bar")),
    ///     Outcome::Err(Thrown::new("bar"))
    /// );
    /// ```
    pub fn from_throwable<F>(function: F) -> Self
    where
        F: FnOnce() -> A,
    {
        catch_thrown(function).into()
    }
}

impl<A, X> From<Result<A, X>> for Outcome<A, X> {
    fn from(value: Result<A, X>) -> Self {
        match value {
            Ok(value) => Self::Val(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<A, X> From<Outcome<A, X>> for Result<A, X> {
    fn from(value: Outcome<A, X>) -> Self {
        value.into_result()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A, X> TypeConstructor for Outcome<A, X> {
    type Inner = A;
    type WithType<B> = Outcome<B, X>;
}

impl<A, X> Functor for Outcome<A, X> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, X>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<A, X> Applicative for Outcome<A, X> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, X> {
        Outcome::Val(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, X>, function: F) -> Outcome<C, X>
    where
        F: FnOnce(A, B) -> C,
    {
        self.and_then(|a| other.map(|b| function(a, b)))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Outcome<B, X>,
        third: Outcome<C, X>,
        function: F,
    ) -> Outcome<D, X>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.and_then(|a| second.and_then(|b| third.map(|c| function(a, b, c))))
    }
}

impl<A, X> Monad for Outcome<A, X> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, X>
    where
        F: FnOnce(A) -> Outcome<B, X>,
    {
        self.and_then(function)
    }
}
