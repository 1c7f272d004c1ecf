//! `EffIO` - environment-dependent deferred side effect.

use std::rc::Rc;

use super::eff_task::EffTask;
use super::io::IO;
use super::task::Task;

/// An environment-dependent computation producing an [`IO`].
///
/// # Examples
///
/// ```rust
/// use effectual::effect::{EffIO, IO};
///
/// let greet = EffIO::requires(|name: String| IO::new(move || format!("hello {name}")));
/// let shout = greet.map(|text| text.to_uppercase());
/// assert_eq!(shout.run("ada".to_string()).run(), "HELLO ADA");
/// ```
pub struct EffIO<E, A>
where
    E: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(E) -> IO<A>>,
}

impl<E, A> EffIO<E, A>
where
    E: Clone + 'static,
    A: 'static,
{
    /// Creates an `EffIO` from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(E) -> IO<A> + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Same as [`EffIO::new`].
    pub fn requires<F>(function: F) -> Self
    where
        F: Fn(E) -> IO<A> + 'static,
    {
        Self::new(function)
    }

    /// Builds a step that reads the `T` part of the environment.
    pub fn using<T, F>(function: F) -> Self
    where
        E: AsRef<T>,
        T: ?Sized + 'static,
        F: Fn(&T) -> IO<A> + 'static,
    {
        Self::new(move |environment: E| function(environment.as_ref()))
    }

    /// Produces the action for `environment` without running it.
    pub fn run(&self, environment: E) -> IO<A> {
        (self.run_function)(environment)
    }

    /// An action that yields `value`.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        let io = IO::of(value);
        Self::new(move |_| io.clone())
    }

    /// Transforms the produced value.
    pub fn map<B, F>(self, function: F) -> EffIO<E, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        EffIO::new(move |environment| {
            let function = Rc::clone(&function);
            self.run(environment).map(move |value| function(value))
        })
    }

    /// Chains an action that depends on this one's value.
    pub fn and_then<B, F>(self, function: F) -> EffIO<E, B>
    where
        F: Fn(A) -> EffIO<E, B> + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        EffIO::new(move |environment: E| {
            let function = Rc::clone(&function);
            let next_environment = environment.clone();
            self.run(environment)
                .and_then(move |value| function(value).run(next_environment.clone()))
        })
    }

    /// Runs the action inside an always-succeeding task.
    pub fn to_eff_task<X>(self) -> EffTask<E, A, X>
    where
        X: 'static,
    {
        EffTask::new(move |environment| Task::from_io(self.run(environment)))
    }
}

impl<E> EffIO<E, E>
where
    E: Clone + 'static,
{
    /// An action that yields the environment itself.
    pub fn require() -> Self {
        Self::new(|environment: E| IO::new(move || environment.clone()))
    }
}

impl<E, A> Clone for EffIO<E, A>
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

impl<E, A> std::fmt::Display for EffIO<E, A>
where
    E: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<EffIO>")
    }
}
