//! `EffTask` - environment-dependent asynchronous computation.
//!
//! Each run of an `EffTask` against an environment produces a fresh
//! [`Task`]; the environment is cloned into every step of the chain, so a
//! step that settles later still sees it.

use std::rc::Rc;

use super::eff_io::EffIO;
use super::eff_result::EffResult;
use super::task::Task;

/// An environment-dependent computation producing a [`Task`].
///
/// # Examples
///
/// ```rust
/// use effectual::effect::{EffTask, Task};
///
/// #[derive(Clone)]
/// struct Num(i32);
/// #[derive(Clone)]
/// struct Factor(i32);
///
/// #[derive(Clone)]
/// struct Env {
///     num: Num,
///     factor: Factor,
/// }
///
/// impl AsRef<Num> for Env {
///     fn as_ref(&self) -> &Num {
///         &self.num
///     }
/// }
///
/// impl AsRef<Factor> for Env {
///     fn as_ref(&self) -> &Factor {
///         &self.factor
///     }
/// }
///
/// fn read_num<E: AsRef<Num> + Clone + 'static>() -> EffTask<E, i32, String> {
///     EffTask::using(|num: &Num| Task::success(num.0))
/// }
///
/// fn scale<E: AsRef<Factor> + Clone + 'static>(n: i32) -> EffTask<E, i32, String> {
///     EffTask::using(move |factor: &Factor| Task::success(n * factor.0))
/// }
///
/// let program = read_num().and_then(scale);
///
/// program
///     .run(Env { num: Num(42), factor: Factor(2) })
///     .run(|value| assert_eq!(value, 84), |_| unreachable!());
/// ```
pub struct EffTask<E, A, X>
where
    E: 'static,
    A: 'static,
    X: 'static,
{
    run_function: Rc<dyn Fn(E) -> Task<A, X>>,
}

impl<E, A, X> EffTask<E, A, X>
where
    E: Clone + 'static,
    A: 'static,
    X: 'static,
{
    /// Creates an `EffTask` from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(E) -> Task<A, X> + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Lifts an environment-consuming task function; same as
    /// [`EffTask::new`].
    pub fn requires<F>(function: F) -> Self
    where
        F: Fn(E) -> Task<A, X> + 'static,
    {
        Self::new(function)
    }

    /// Builds a step that reads the `T` part of the environment.
    pub fn using<T, F>(function: F) -> Self
    where
        E: AsRef<T>,
        T: ?Sized + 'static,
        F: Fn(&T) -> Task<A, X> + 'static,
    {
        Self::new(move |environment: E| function(environment.as_ref()))
    }

    /// Produces the task for `environment`. Nothing runs until the task does.
    pub fn run(&self, environment: E) -> Task<A, X> {
        (self.run_function)(environment)
    }

    /// Always succeeds with `value`.
    pub fn success(value: A) -> Self
    where
        A: Clone,
    {
        Self::from_task(Task::success(value))
    }

    /// Alias for [`EffTask::success`].
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::success(value)
    }

    /// Always fails with `error`.
    pub fn fail(error: X) -> Self
    where
        X: Clone,
    {
        Self::from_task(Task::fail(error))
    }

    /// Ignores the environment and yields `task`.
    pub fn from_task(task: Task<A, X>) -> Self {
        Self::new(move |_| task.clone())
    }

    /// Routes an [`EffResult`]'s outcome into the task channels.
    pub fn from_eff_result(eff: EffResult<E, A, X>) -> Self {
        eff.to_eff_task()
    }

    /// Runs an [`EffIO`]'s action when the task runs and succeeds with its value.
    pub fn from_eff_io(eff: EffIO<E, A>) -> Self {
        eff.to_eff_task()
    }

    /// Transforms the success value.
    pub fn map<B, F>(self, function: F) -> EffTask<E, B, X>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        EffTask::new(move |environment| {
            let function = Rc::clone(&function);
            self.run(environment).map(move |value| function(value))
        })
    }

    /// Chains a step that depends on the success value; both steps see the
    /// same environment.
    pub fn and_then<B, F>(self, function: F) -> EffTask<E, B, X>
    where
        F: Fn(A) -> EffTask<E, B, X> + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        EffTask::new(move |environment: E| {
            let function = Rc::clone(&function);
            let next_environment = environment.clone();
            self.run(environment)
                .and_then(move |value| function(value).run(next_environment.clone()))
        })
    }

    /// Recovers from a failure with a step that sees the same environment.
    pub fn handle_error<Y, F>(self, function: F) -> EffTask<E, A, Y>
    where
        F: Fn(X) -> EffTask<E, A, Y> + 'static,
        Y: 'static,
    {
        let function = Rc::new(function);
        EffTask::new(move |environment: E| {
            let function = Rc::clone(&function);
            let next_environment = environment.clone();
            self.run(environment)
                .handle_error(move |error| function(error).run(next_environment.clone()))
        })
    }
}

impl<E, X> EffTask<E, E, X>
where
    E: Clone + 'static,
    X: 'static,
{
    /// Succeeds with the environment itself.
    pub fn require() -> Self {
        Self::new(|environment: E| Task::new(move |resolve, _| resolve(environment.clone())))
    }
}

impl<E, A, X> Clone for EffTask<E, A, X>
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

impl<E, A, X> std::fmt::Display for EffTask<E, A, X>
where
    E: 'static,
    A: 'static,
    X: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<EffTask>")
    }
}
