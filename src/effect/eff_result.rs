//! `EffResult` - environment-dependent computation that may fail.

use std::rc::Rc;

use super::eff_task::EffTask;
use super::task::Task;
use crate::control::Outcome;

/// An environment-dependent computation producing an [`Outcome`].
///
/// `and_then` short-circuits on the first error; every step that does run
/// receives the same environment.
///
/// # Examples
///
/// ```rust
/// use effectual::control::Outcome;
/// use effectual::effect::EffResult;
///
/// let parse = EffResult::<String, i32, String>::requires(|text| {
///     text.parse::<i32>().map_err(|error| error.to_string()).into()
/// });
/// let doubled = parse.map(|n| n * 2);
///
/// assert_eq!(doubled.run("21".to_string()), Outcome::Val(42));
/// assert!(doubled.run("x".to_string()).is_err());
/// ```
pub struct EffResult<E, A, X>
where
    E: 'static,
    A: 'static,
    X: 'static,
{
    run_function: Rc<dyn Fn(E) -> Outcome<A, X>>,
}

impl<E, A, X> EffResult<E, A, X>
where
    E: Clone + 'static,
    A: 'static,
    X: 'static,
{
    /// Creates an `EffResult` from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(E) -> Outcome<A, X> + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Lifts an environment-consuming fallible function; same as
    /// [`EffResult::new`].
    pub fn requires<F>(function: F) -> Self
    where
        F: Fn(E) -> Outcome<A, X> + 'static,
    {
        Self::new(function)
    }

    /// Builds a step that reads the `T` part of the environment.
    pub fn using<T, F>(function: F) -> Self
    where
        E: AsRef<T>,
        T: ?Sized + 'static,
        F: Fn(&T) -> Outcome<A, X> + 'static,
    {
        Self::new(move |environment: E| function(environment.as_ref()))
    }

    /// Runs the computation against `environment`.
    pub fn run(&self, environment: E) -> Outcome<A, X> {
        (self.run_function)(environment)
    }

    /// Always yields `outcome`.
    pub fn from_result(outcome: Outcome<A, X>) -> Self
    where
        A: Clone,
        X: Clone,
    {
        Self::new(move |_| outcome.clone())
    }

    /// Always succeeds with `value`.
    pub fn val(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| Outcome::Val(value.clone()))
    }

    /// Alias for [`EffResult::val`].
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::val(value)
    }

    /// Always fails with `error`.
    pub fn err(error: X) -> Self
    where
        X: Clone,
    {
        Self::new(move |_| Outcome::Err(error.clone()))
    }

    /// Transforms the success value.
    pub fn map<B, F>(self, function: F) -> EffResult<E, B, X>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        EffResult::new(move |environment| self.run(environment).map(&function))
    }

    /// Chains a fallible step that depends on the success value.
    pub fn and_then<B, F>(self, function: F) -> EffResult<E, B, X>
    where
        F: Fn(A) -> EffResult<E, B, X> + 'static,
        B: 'static,
    {
        EffResult::new(move |environment: E| {
            self.run(environment.clone())
                .and_then(|value| function(value).run(environment))
        })
    }

    /// Recovers from an error with a step that sees the same environment.
    pub fn handle_error<Y, F>(self, function: F) -> EffResult<E, A, Y>
    where
        F: Fn(X) -> EffResult<E, A, Y> + 'static,
        Y: 'static,
    {
        EffResult::new(move |environment: E| {
            self.run(environment.clone())
                .handle_error(|error| function(error).run(environment))
        })
    }

    /// Moves the outcome into a task: `Val` succeeds and `Err` fails.
    ///
    /// The computation runs when the task runs.
    pub fn to_eff_task(self) -> EffTask<E, A, X> {
        EffTask::new(move |environment: E| {
            let this = self.clone();
            Task::new(move |resolve, reject| match this.run(environment.clone()) {
                Outcome::Val(value) => resolve(value),
                Outcome::Err(error) => reject(error),
            })
        })
    }
}

impl<E, X> EffResult<E, E, X>
where
    E: Clone + 'static,
    X: 'static,
{
    /// Succeeds with the environment itself.
    pub fn require() -> Self {
        Self::new(Outcome::Val)
    }
}

impl<E, A, X> Clone for EffResult<E, A, X>
where
    E: 'static,
    A: 'static,
    X: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<E, A, X> std::fmt::Display for EffResult<E, A, X>
where
    E: 'static,
    A: 'static,
    X: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<EffResult>")
    }
}
