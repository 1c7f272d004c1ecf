//! Writer Monad - computation with an accumulated log.
//!
//! A `Writer<E, A>` holds a result value together with an ordered log of
//! entries of type `E`. Sequencing two writers concatenates their logs in the
//! order the steps ran: the earlier step's entries come first.
//!
//! Unlike [`Reader`](super::Reader) and [`State`](super::State), a Writer is
//! an eager value, so it implements the crate's type class traits directly.
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::Writer;
//!
//! fn half(n: u32) -> Writer<String, u32> {
//!     Writer::tell(format!("I just halved {n}")).and_then(move |()| Writer::of(n / 2))
//! }
//!
//! let (log, value) = half(8).and_then(half).run_writer();
//! assert_eq!(log, vec!["I just halved 8", "I just halved 4"]);
//! assert_eq!(value, 2);
//! ```

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value paired with an append-only log.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Writer<E, A> {
    value: A,
    log: Vec<E>,
}

impl<E, A> Writer<E, A> {
    /// Creates a Writer from a value and an existing log.
    pub const fn new(value: A, log: Vec<E>) -> Self {
        Self { value, log }
    }

    /// Wraps a value with an empty log.
    pub const fn of(value: A) -> Self {
        Self::new(value, Vec::new())
    }

    /// The accumulated log.
    pub fn get_env(&self) -> &[E] {
        &self.log
    }

    /// The result value.
    pub const fn get_value(&self) -> &A {
        &self.value
    }

    /// Consumes the Writer, returning the log and the value.
    pub fn run_writer(self) -> (Vec<E>, A) {
        (self.log, self.value)
    }

    /// Transforms the value; the log is kept as is.
    pub fn map<B, F>(self, function: F) -> Writer<E, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer::new(function(self.value), self.log)
    }

    /// Chains a step that depends on the value, appending its log after
    /// this one's.
    pub fn and_then<B, F>(self, function: F) -> Writer<E, B>
    where
        F: FnOnce(A) -> Writer<E, B>,
    {
        let Self { value, mut log } = self;
        let Writer {
            value: next_value,
            log: next_log,
        } = function(value);
        log.extend(next_log);
        Writer::new(next_value, log)
    }

    /// Sequences two writers, keeping both logs and the second value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Writer;
    ///
    /// let steps = Writer::tell("a").then(Writer::tell("b")).then(Writer::of(42));
    /// assert_eq!(steps.get_env(), ["a", "b"]);
    /// assert_eq!(*steps.get_value(), 42);
    /// ```
    pub fn then<B>(self, next: Writer<E, B>) -> Writer<E, B> {
        self.and_then(|_| next)
    }
}

impl<E> Writer<E, ()> {
    /// A log holding exactly `entry`, with the unit value.
    pub fn tell(entry: E) -> Self {
        Self::new((), vec![entry])
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E, A> TypeConstructor for Writer<E, A> {
    type Inner = A;
    type WithType<B> = Writer<E, B>;
}

impl<E, A> Functor for Writer<E, A> {
    fn fmap<B, F>(self, function: F) -> Writer<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<E, A> Applicative for Writer<E, A> {
    fn pure<B>(value: B) -> Writer<E, B> {
        Writer::of(value)
    }

    fn map2<B, C, F>(self, other: Writer<E, B>, function: F) -> Writer<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.and_then(|a| other.map(|b| function(a, b)))
    }

    fn map3<B, C, D, F>(self, second: Writer<E, B>, third: Writer<E, C>, function: F) -> Writer<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.and_then(|a| second.and_then(|b| third.map(|c| function(a, b, c))))
    }
}

impl<E, A> Monad for Writer<E, A> {
    fn flat_map<B, F>(self, function: F) -> Writer<E, B>
    where
        F: FnOnce(A) -> Writer<E, B>,
    {
        self.and_then(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn half(n: u32) -> Writer<String, u32> {
        Writer::tell(format!("I just halved {n}")).and_then(move |()| Writer::of(n / 2))
    }

    #[rstest]
    fn of_has_empty_log() {
        let writer: Writer<&str, i32> = Writer::of(1);
        assert!(writer.get_env().is_empty());
        assert_eq!(*writer.get_value(), 1);
    }

    #[rstest]
    fn tell_logs_one_entry() {
        let writer = Writer::tell("a");
        assert_eq!(writer.get_env(), ["a"]);
    }

    #[rstest]
    fn and_then_concatenates_in_order() {
        let writer = Writer::tell('a').and_then(|()| Writer::tell('b'));
        assert_eq!(writer.get_env(), ['a', 'b']);
    }

    #[rstest]
    fn halving_example() {
        let (log, value) = half(8).and_then(half).run_writer();
        assert_eq!(log, vec!["I just halved 8", "I just halved 4"]);
        assert_eq!(value, 2);
    }

    #[rstest]
    fn map_keeps_log() {
        let writer = Writer::new(2, vec!["start"]).map(|n| n * 5);
        assert_eq!(writer, Writer::new(10, vec!["start"]));
    }

    #[rstest]
    fn applicative_combines_logs() {
        let left = Writer::new(1, vec!["left"]);
        let right = Writer::new(2, vec!["right"]);
        assert_eq!(left.map2(right, |a, b| a + b), Writer::new(3, vec!["left", "right"]));
    }
}
