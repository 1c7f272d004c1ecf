//! Reader Monad - environment reading computation.
//!
//! The Reader monad represents computations that depend on an environment.
//! It is useful for dependency injection, configuration access, and other
//! patterns where computations need read-only access to some shared context.
//!
//! # Overview
//!
//! A `Reader<E, A>` encapsulates a function `E -> A`, where `E` is the
//! environment type and `A` is the result type. The environment is supplied
//! when the reader is run and is never stored inside it.
//!
//! # Note on Type Classes
//!
//! Reader provides its own `map`, `and_then`, `map2`, etc. methods directly
//! on the type, rather than implementing the Functor/Applicative/Monad traits.
//! Its function is shared through `Rc<dyn Fn>`, which needs `'static` bounds
//! the type class traits don't carry.
//!
//! # Laws
//!
//! - Identity: `reader.map(|x| x) == reader`
//! - Composition: `reader.map(f).map(g) == reader.map(|x| g(f(x)))`
//! - Left Identity: `Reader::of(a).and_then(f) == f(a)`
//! - Right Identity: `m.and_then(Reader::of) == m`
//! - Ask Retrieval: `Reader::ask().run(r) == r`
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//!     host: String,
//! }
//!
//! fn get_port() -> Reader<Config, u16> {
//!     Reader::asks(|config: Config| config.port)
//! }
//!
//! fn get_host() -> Reader<Config, String> {
//!     Reader::asks(|config: Config| config.host)
//! }
//!
//! let address = Reader::merge2(get_host(), get_port())
//!     .map(|(host, port)| format!("{host}:{port}"));
//!
//! let config = Config {
//!     port: 8080,
//!     host: "localhost".to_string(),
//! };
//! assert_eq!(address.run(config), "localhost:8080");
//! ```

use std::rc::Rc;

/// A monad for computations that read from an environment.
///
/// # Type Parameters
///
/// - `E`: The environment type (read-only context)
/// - `A`: The result type
///
/// # Examples
///
/// ```rust
/// use effectual::effect::Reader;
///
/// let computation: Reader<i32, i32> = Reader::ask()
///     .and_then(|environment| Reader::of(environment * 2));
///
/// assert_eq!(computation.run(21), 42);
/// ```
pub struct Reader<E, A>
where
    E: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(E) -> A>,
}

impl<E, A> Reader<E, A>
where
    E: 'static,
    A: 'static,
{
    /// Creates a new Reader from a function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(E) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the Reader computation with the given environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|environment| environment + 1);
    /// assert_eq!(reader.run(41), 42);
    /// // Reader can be run multiple times
    /// assert_eq!(reader.run(0), 1);
    /// ```
    pub fn run(&self, environment: E) -> A {
        (self.run_function)(environment)
    }

    /// Creates a Reader that returns a constant value, ignoring the environment.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Alias for [`Reader::of`].
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::of(value)
    }

    /// Projects a value out of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(E) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Transforms the result of the Reader.
    pub fn map<B, F>(self, function: F) -> Reader<E, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Reader::new(move |environment| function(self.run(environment)))
    }

    /// Chains a Reader that depends on this one's result; both read the same
    /// environment.
    pub fn and_then<B, F>(self, function: F) -> Reader<E, B>
    where
        E: Clone,
        F: Fn(A) -> Reader<E, B> + 'static,
        B: 'static,
    {
        Reader::new(move |environment: E| {
            let value = self.run(environment.clone());
            function(value).run(environment)
        })
    }

    /// Runs two Readers against the same environment and combines the results.
    pub fn map2<B, C, F>(self, other: Reader<E, B>, function: F) -> Reader<E, C>
    where
        E: Clone,
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        Reader::new(move |environment: E| {
            let a = self.run(environment.clone());
            let b = other.run(environment);
            function(a, b)
        })
    }

    /// Runs two Readers against one environment and pairs the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Reader;
    ///
    /// let both = Reader::merge2(Reader::<i32, i32>::ask(), Reader::asks(|n: i32| n * 10));
    /// assert_eq!(both.run(4), (4, 40));
    /// ```
    pub fn merge2<B>(first: Self, second: Reader<E, B>) -> Reader<E, (A, B)>
    where
        E: Clone,
        B: 'static,
    {
        first.map2(second, |a, b| (a, b))
    }

    /// Runs three Readers against one environment and collects the results.
    pub fn merge3<B, C>(
        first: Self,
        second: Reader<E, B>,
        third: Reader<E, C>,
    ) -> Reader<E, (A, B, C)>
    where
        E: Clone,
        B: 'static,
        C: 'static,
    {
        Reader::new(move |environment: E| {
            (
                first.run(environment.clone()),
                second.run(environment.clone()),
                third.run(environment),
            )
        })
    }

    /// Runs every Reader against one environment, keeping their order.
    pub fn all(readers: Vec<Self>) -> Reader<E, Vec<A>>
    where
        E: Clone,
    {
        Reader::new(move |environment: E| {
            readers
                .iter()
                .map(|reader| reader.run(environment.clone()))
                .collect()
        })
    }

    /// Turns a unary function into one over Readers.
    pub fn lift<B, F>(function: F) -> impl Fn(Self) -> Reader<E, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        move |reader| {
            let function = Rc::clone(&function);
            reader.map(move |a| function(a))
        }
    }

    /// Turns a binary function into one over Readers.
    pub fn lift2<B, C, F>(function: F) -> impl Fn(Self, Reader<E, B>) -> Reader<E, C>
    where
        E: Clone,
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let function = Rc::new(function);
        move |first, second| {
            let function = Rc::clone(&function);
            first.map2(second, move |a, b| function(a, b))
        }
    }

    /// Turns a ternary function into one over Readers.
    pub fn lift3<B, C, D, F>(
        function: F,
    ) -> impl Fn(Self, Reader<E, B>, Reader<E, C>) -> Reader<E, D>
    where
        E: Clone,
        F: Fn(A, B, C) -> D + 'static,
        B: 'static,
        C: 'static,
        D: 'static,
    {
        let function = Rc::new(function);
        move |first, second, third| {
            let function = Rc::clone(&function);
            Self::merge3(first, second, third).map(move |(a, b, c)| function(a, b, c))
        }
    }
}

impl<E> Reader<E, E>
where
    E: 'static,
{
    /// Returns the environment itself.
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<E, A> Clone for Reader<E, A>
where
    E: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<E, A> std::fmt::Display for Reader<E, A>
where
    E: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Reader>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone)]
    struct Settings {
        name: &'static str,
        retries: u8,
    }

    #[rstest]
    fn test_display_reader() {
        let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
        assert_eq!(format!("{reader}"), "<Reader>");
    }

    #[rstest]
    fn reader_new_and_run() {
        let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
        assert_eq!(reader.run(21), 42);
    }

    #[rstest]
    fn reader_of_ignores_environment() {
        let reader: Reader<i32, &str> = Reader::of("constant");
        assert_eq!(reader.run(0), "constant");
        assert_eq!(reader.run(100), "constant");
    }

    #[rstest]
    fn reader_ask_returns_environment() {
        let reader: Reader<i32, i32> = Reader::ask();
        assert_eq!(reader.run(42), 42);
    }

    #[rstest]
    fn reader_asks_projects_environment() {
        let reader = Reader::asks(|settings: Settings| settings.name);
        assert_eq!(reader.run(Settings { name: "api", retries: 3 }), "api");
    }

    #[rstest]
    fn reader_and_then_shares_environment() {
        let reader: Reader<i32, i32> = Reader::ask();
        let chained = reader.and_then(|value| Reader::new(move |environment| value + environment));
        assert_eq!(chained.run(10), 20);
    }

    #[rstest]
    fn reader_merge_family() {
        let name = Reader::asks(|settings: Settings| settings.name);
        let retries = Reader::asks(|settings: Settings| settings.retries);
        let settings = Settings { name: "db", retries: 5 };

        assert_eq!(Reader::merge2(name.clone(), retries.clone()).run(settings.clone()), ("db", 5));
        assert_eq!(
            Reader::merge3(name, retries, Reader::of(true)).run(settings),
            ("db", 5, true)
        );
    }

    #[rstest]
    fn reader_all_keeps_order() {
        let readers: Vec<Reader<i32, i32>> = vec![
            Reader::ask(),
            Reader::asks(|n| n + 1),
            Reader::asks(|n| n * 10),
        ];
        assert_eq!(Reader::all(readers).run(2), vec![2, 3, 20]);
        assert_eq!(Reader::<i32, i32>::all(Vec::new()).run(2), Vec::<i32>::new());
    }

    #[rstest]
    fn reader_lift_family() {
        let ask: Reader<i32, i32> = Reader::ask();
        assert_eq!(Reader::lift(|a: i32| a + 2)(ask.clone()).run(3), 5);
        assert_eq!(Reader::lift2(|a: i32, b: i32| a * b)(ask.clone(), ask.clone()).run(3), 9);
        assert_eq!(
            Reader::lift3(|a: i32, b: i32, c: i32| a + b + c)(ask.clone(), ask.clone(), ask).run(3),
            9
        );
    }

    #[rstest]
    fn reader_clone_works() {
        let reader: Reader<i32, i32> = Reader::new(|environment| environment * 2);
        let cloned = reader.clone();
        assert_eq!(reader.run(21), 42);
        assert_eq!(cloned.run(21), 42);
    }
}
