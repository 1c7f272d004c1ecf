//! Eff - environment-dependent computation producing a plain value.
//!
//! The Eff family wraps a function from an environment `E` to an inner
//! effect:
//!
//! | Type | Inner effect |
//! |---|---|
//! | [`Eff<E, A>`](Eff) | a plain `A` |
//! | [`EffResult<E, A, X>`](super::EffResult) | an [`Outcome<A, X>`](crate::control::Outcome) |
//! | [`EffTask<E, A, X>`](super::EffTask) | a [`Task<A, X>`](super::Task) |
//! | [`EffIO<E, A>`](super::EffIO) | an [`IO<A>`](super::IO) |
//!
//! # Requirement merging
//!
//! A step built with `using::<T>` requires an environment that implements
//! `AsRef<T>`. Chaining steps unifies their environment type, so the bounds
//! of every step accumulate: a chain of a step using `Num` and a step using
//! `Factor` can only be run with an environment that provides both. At
//! runtime every step receives the same environment value.
//!
//! ```rust
//! use effectual::effect::Eff;
//!
//! #[derive(Clone)]
//! struct Num(i32);
//! #[derive(Clone)]
//! struct Factor(i32);
//!
//! #[derive(Clone)]
//! struct Env {
//!     num: Num,
//!     factor: Factor,
//! }
//!
//! impl AsRef<Num> for Env {
//!     fn as_ref(&self) -> &Num {
//!         &self.num
//!     }
//! }
//!
//! impl AsRef<Factor> for Env {
//!     fn as_ref(&self) -> &Factor {
//!         &self.factor
//!     }
//! }
//!
//! fn read_num<E: AsRef<Num> + Clone + 'static>() -> Eff<E, i32> {
//!     Eff::using(|num: &Num| num.0)
//! }
//!
//! fn scale<E: AsRef<Factor> + Clone + 'static>(n: i32) -> Eff<E, i32> {
//!     Eff::using(move |factor: &Factor| n * factor.0)
//! }
//!
//! let program = read_num().and_then(scale);
//! assert_eq!(program.run(Env { num: Num(42), factor: Factor(2) }), 84);
//! ```

use std::rc::Rc;

use super::eff_io::EffIO;
use super::eff_result::EffResult;
use super::eff_task::EffTask;
use super::io::IO;
use super::task::Task;
use crate::control::Outcome;

/// An environment-dependent computation producing a plain value.
pub struct Eff<E, A>
where
    E: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(E) -> A>,
}

impl<E, A> Eff<E, A>
where
    E: Clone + 'static,
    A: 'static,
{
    /// Creates an Eff from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(E) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Lifts an environment-consuming function; same as [`Eff::new`].
    pub fn requires<F>(function: F) -> Self
    where
        F: Fn(E) -> A + 'static,
    {
        Self::new(function)
    }

    /// Builds a step that reads the `T` part of the environment.
    pub fn using<T, F>(function: F) -> Self
    where
        E: AsRef<T>,
        T: ?Sized + 'static,
        F: Fn(&T) -> A + 'static,
    {
        Self::new(move |environment: E| function(environment.as_ref()))
    }

    /// Runs the computation against `environment`.
    pub fn run(&self, environment: E) -> A {
        (self.run_function)(environment)
    }

    /// A computation that ignores the environment.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Transforms the produced value.
    pub fn map<B, F>(self, function: F) -> Eff<E, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Eff::new(move |environment| function(self.run(environment)))
    }

    /// Chains a computation that depends on this one's value.
    pub fn and_then<B, F>(self, function: F) -> Eff<E, B>
    where
        F: Fn(A) -> Eff<E, B> + 'static,
        B: 'static,
    {
        Eff::new(move |environment: E| {
            let value = self.run(environment.clone());
            function(value).run(environment)
        })
    }

    /// Treats every produced value as a success.
    pub fn to_eff_result<X>(self) -> EffResult<E, A, X>
    where
        X: 'static,
    {
        EffResult::new(move |environment| Outcome::Val(self.run(environment)))
    }

    /// Wraps every produced value in a task that always succeeds.
    ///
    /// The computation runs when the task runs.
    pub fn to_eff_task<X>(self) -> EffTask<E, A, X>
    where
        X: 'static,
    {
        EffTask::new(move |environment: E| {
            let this = self.clone();
            Task::new(move |resolve, _| resolve(this.run(environment.clone())))
        })
    }

    /// Defers the computation into an IO.
    pub fn to_eff_io(self) -> EffIO<E, A> {
        EffIO::new(move |environment: E| {
            let this = self.clone();
            IO::new(move || this.run(environment.clone()))
        })
    }
}

impl<E> Eff<E, E>
where
    E: Clone + 'static,
{
    /// Returns the environment itself.
    pub fn require() -> Self {
        Self::new(|environment| environment)
    }
}

impl<E, A> Clone for Eff<E, A>
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

impl<E, A> std::fmt::Display for Eff<E, A>
where
    E: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Eff>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone)]
    struct Greeting(&'static str);

    #[derive(Clone)]
    struct Context {
        greeting: Greeting,
        name: String,
    }

    impl AsRef<Greeting> for Context {
        fn as_ref(&self) -> &Greeting {
            &self.greeting
        }
    }

    impl AsRef<str> for Context {
        fn as_ref(&self) -> &str {
            &self.name
        }
    }

    fn context() -> Context {
        Context {
            greeting: Greeting("hello"),
            name: "ada".to_string(),
        }
    }

    #[rstest]
    fn require_returns_environment() {
        assert_eq!(Eff::<i32, i32>::require().run(5), 5);
    }

    #[rstest]
    fn requires_lifts_function() {
        assert_eq!(Eff::requires(|n: i32| n * 2).run(5), 10);
    }

    #[rstest]
    fn of_ignores_environment() {
        assert_eq!(Eff::<i32, &str>::of("fixed").run(5), "fixed");
    }

    #[rstest]
    fn using_chains_merge_requirements() {
        let greeting = Eff::using(|greeting: &Greeting| greeting.0);
        let program = greeting.and_then(|word| Eff::using(move |name: &str| format!("{word}, {name}")));
        assert_eq!(program.run(context()), "hello, ada");
    }

    #[rstest]
    fn map_transforms_value() {
        let program = Eff::<i32, i32>::require().map(|n| n + 1);
        assert_eq!(program.run(1), 2);
    }

    #[rstest]
    fn conversions_wrap_as_success() {
        let eff = Eff::<i32, i32>::require().map(|n| n * 3);
        assert_eq!(eff.clone().to_eff_result::<String>().run(2), Outcome::Val(6));
        assert_eq!(eff.clone().to_eff_io().run(2).run(), 6);

        let seen = Rc::new(std::cell::Cell::new(0));
        let sink = Rc::clone(&seen);
        eff.to_eff_task::<()>()
            .run(2)
            .run(move |value| sink.set(value), |()| unreachable!());
        assert_eq!(seen.get(), 6);
    }
}
