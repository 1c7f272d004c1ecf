//! Task - a re-runnable computation that settles through callbacks.
//!
//! A `Task<A, X>` wraps an *executor*: a function that receives a success
//! callback and a failure callback and eventually invokes exactly one of them
//! exactly once. The executor runs every time [`Task::run`] is called, so a
//! Task is not memoized and is not a promise: running it twice repeats every
//! side effect behind it.
//!
//! Task schedules nothing itself. Whether a callback fires synchronously
//! inside `run` or later is decided by the executor; callers must not assume
//! either.
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::Task;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let settled = Rc::new(Cell::new(None));
//! let on_failure = Rc::clone(&settled);
//!
//! Task::<i32, i32>::success(42)
//!     .and_then(|a| Task::<i32, i32>::fail(a + 3))
//!     .run(|_| unreachable!(), move |error| on_failure.set(Some(error)));
//!
//! assert_eq!(settled.get(), Some(45));
//! ```
//!
//! # Bridging futures
//!
//! With the `async` feature, [`Task::from_future`], [`Task::from_future_fn`]
//! and [`Task::into_future`] convert between tasks and futures. The futures
//! are driven by `tokio::task::spawn_local`, so they must run inside a
//! `tokio::task::LocalSet`.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::marker::PhantomData;
use std::rc::Rc;

use super::erased::{Erased, erase, unerase};
use super::io::IO;
use crate::control::{Maybe, Outcome, Thrown, catch_thrown};

/// The success callback handed to an executor.
pub type Resolve<A> = Box<dyn FnOnce(A)>;

/// The failure callback handed to an executor.
pub type Reject<X> = Box<dyn FnOnce(X)>;

/// The error-first callback handed to a [`Task::from_callback`] function.
pub type NodeCallback<A, X> = Box<dyn FnOnce(Option<X>, Option<A>)>;

type Settled = Result<Erased, Erased>;

type Deliver = Box<dyn FnOnce(Settled)>;

/// A callback shared by two branches of which at most one fires.
struct Settle<T: 'static>(Rc<Cell<Option<Box<dyn FnOnce(T)>>>>);

impl<T: 'static> Settle<T> {
    fn new(callback: Box<dyn FnOnce(T)>) -> Self {
        Self(Rc::new(Cell::new(Some(callback))))
    }

    fn call(&self, value: T) {
        if let Some(callback) = self.0.take() {
            callback(value);
        }
    }
}

impl<T: 'static> Clone for Settle<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

#[derive(Clone)]
enum Step {
    Map(Rc<dyn Fn(Erased) -> Erased>),
    AndThen(Rc<dyn Fn(Erased) -> Rc<Program>>),
    HandleError(Rc<dyn Fn(Erased) -> Rc<Program>>),
    Recover(Rc<dyn Fn(Erased) -> Erased>),
}

/// The executor that settles first, followed by the steps applied to its
/// settlement in order.
#[derive(Clone)]
struct Program {
    executor: Rc<dyn Fn(Deliver)>,
    steps: Vec<Step>,
}

enum Slot {
    Running,
    Settled(Settled),
    Waiting(Machine),
    Done,
}

enum Advance {
    Next(Rc<Program>),
    Finished(Settled),
}

/// One run of a program: the steps still to apply and the caller's callback.
///
/// Synchronous settlements are consumed by the loop in [`Machine::drive`].
/// When an executor returns without settling, the machine parks itself in
/// the executor's slot and the eventual callback resumes the loop.
struct Machine {
    frames: Vec<(Rc<Program>, usize)>,
    finish: Deliver,
}

impl Machine {
    fn drive(mut self, mut program: Rc<Program>) {
        loop {
            let slot = Rc::new(RefCell::new(Slot::Running));
            let callback_slot = Rc::clone(&slot);
            (program.executor)(Box::new(move |settled| deliver(&callback_slot, settled)));
            if !program.steps.is_empty() {
                self.frames.push((program, 0));
            }

            let settled = {
                let mut state = slot.borrow_mut();
                match std::mem::replace(&mut *state, Slot::Done) {
                    Slot::Settled(settled) => settled,
                    _ => {
                        *state = Slot::Waiting(self);
                        return;
                    }
                }
            };
            match self.advance(settled) {
                Advance::Next(next) => program = next,
                Advance::Finished(settled) => {
                    (self.finish)(settled);
                    return;
                }
            }
        }
    }

    fn resume(mut self, settled: Settled) {
        match self.advance(settled) {
            Advance::Next(next) => self.drive(next),
            Advance::Finished(settled) => (self.finish)(settled),
        }
    }

    fn advance(&mut self, mut settled: Settled) -> Advance {
        while let Some((program, index)) = self.frames.pop() {
            let Some(step) = program.steps.get(index).cloned() else {
                continue;
            };
            if index + 1 < program.steps.len() {
                self.frames.push((program, index + 1));
            }
            settled = match (step, settled) {
                (Step::Map(function), Ok(value)) => Ok(function(value)),
                (Step::AndThen(function), Ok(value)) => return Advance::Next(function(value)),
                (Step::HandleError(function), Err(error)) => return Advance::Next(function(error)),
                (Step::Recover(function), Err(error)) => Ok(function(error)),
                (_, passing) => passing,
            };
        }
        Advance::Finished(settled)
    }
}

fn deliver(slot: &Rc<RefCell<Slot>>, settled: Settled) {
    let machine = {
        let mut state = slot.borrow_mut();
        match std::mem::replace(&mut *state, Slot::Done) {
            Slot::Running => {
                *state = Slot::Settled(settled);
                return;
            }
            Slot::Waiting(machine) => machine,
            other => {
                *state = other;
                return;
            }
        }
    };
    machine.resume(settled);
}

/// A deferred computation with a success channel `A` and a failure channel `X`.
///
/// `map`, `and_then`, `handle_error` and `to_maybe` append a step to a flat
/// list rather than nesting executors, and `run` applies the steps in a
/// loop. Settlements that happen synchronously inside an executor never
/// deepen the stack, so chains of any length are safe to run.
///
/// # Type Parameters
///
/// - `A`: The success type
/// - `X`: The failure type
pub struct Task<A, X>
where
    A: 'static,
    X: 'static,
{
    program: Rc<Program>,
    marker: PhantomData<fn() -> (A, X)>,
}

impl<A, X> Task<A, X>
where
    A: 'static,
    X: 'static,
{
    /// Creates a Task from an executor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Task;
    ///
    /// let task: Task<i32, String> = Task::new(|resolve, _reject| resolve(42));
    /// task.run(|value| assert_eq!(value, 42), |_| unreachable!());
    /// ```
    pub fn new<F>(executor: F) -> Self
    where
        F: Fn(Resolve<A>, Reject<X>) + 'static,
    {
        Self::from_program(Program {
            executor: Rc::new(move |deliver: Deliver| {
                let on_success = Settle::new(deliver);
                let on_failure = on_success.clone();
                executor(
                    Box::new(move |value: A| on_success.call(Ok(erase(value)))),
                    Box::new(move |error: X| on_failure.call(Err(erase(error)))),
                );
            }),
            steps: Vec::new(),
        })
    }

    fn from_program(program: Program) -> Self {
        Self {
            program: Rc::new(program),
            marker: PhantomData,
        }
    }

    fn push<B: 'static, Y: 'static>(self, step: Step) -> Task<B, Y> {
        let mut program = Rc::unwrap_or_clone(self.program);
        program.steps.push(step);
        Task::from_program(program)
    }

    /// Runs the executor with the given callbacks.
    ///
    /// Each call runs the executor again.
    pub fn run<S, F>(&self, on_success: S, on_failure: F)
    where
        S: FnOnce(A) + 'static,
        F: FnOnce(X) + 'static,
    {
        let machine = Machine {
            frames: Vec::new(),
            finish: Box::new(move |settled: Settled| match settled {
                Ok(value) => on_success(unerase(value)),
                Err(error) => on_failure(unerase(error)),
            }),
        };
        machine.drive(Rc::clone(&self.program));
    }

    /// A task that always succeeds with `value`.
    pub fn success(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |resolve, _| resolve(value.clone()))
    }

    /// Alias for [`Task::success`].
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::success(value)
    }

    /// A task that always fails with `error`.
    pub fn fail(error: X) -> Self
    where
        X: Clone,
    {
        Self::new(move |_, reject| reject(error.clone()))
    }

    /// Settles with the case held by `outcome`.
    pub fn from_result(outcome: Outcome<A, X>) -> Self
    where
        A: Clone,
        X: Clone,
    {
        Self::new(move |resolve, reject| match outcome.clone() {
            Outcome::Val(value) => resolve(value),
            Outcome::Err(error) => reject(error),
        })
    }

    /// Runs `io` on every run and succeeds with its value.
    ///
    /// A panic inside the IO is not converted into a failure; it propagates
    /// out of `run`.
    pub fn from_io(io: IO<A>) -> Self {
        Self::new(move |resolve, _| resolve(io.run()))
    }

    /// Transforms the success value; failures pass through unchanged.
    pub fn map<B, F>(self, function: F) -> Task<B, X>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.push(Step::Map(Rc::new(move |value| erase(function(unerase(value))))))
    }

    /// On success, runs the task built by `function` and adopts its
    /// settlement; a failure short-circuits.
    pub fn and_then<B, F>(self, function: F) -> Task<B, X>
    where
        F: Fn(A) -> Task<B, X> + 'static,
        B: 'static,
    {
        self.push(Step::AndThen(Rc::new(move |value| function(unerase(value)).program)))
    }

    /// On failure, runs the task built by `function` and adopts its
    /// settlement; a success passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Task;
    ///
    /// let recovered = Task::<i32, i32>::fail(7).handle_error(|e| Task::<i32, ()>::success(e));
    /// recovered.run(|value| assert_eq!(value, 7), |()| unreachable!());
    /// ```
    pub fn handle_error<Y, F>(self, function: F) -> Task<A, Y>
    where
        F: Fn(X) -> Task<A, Y> + 'static,
        Y: 'static,
    {
        self.push(Step::HandleError(Rc::new(move |error| function(unerase(error)).program)))
    }

    /// A task that always succeeds: `Just` the value, or `Nothing` where
    /// this task would have failed.
    pub fn to_maybe(self) -> Task<Maybe<A>, Infallible> {
        self.map(Maybe::Just)
            .push(Step::Recover(Rc::new(|_: Erased| erase(Maybe::<A>::Nothing))))
    }

    /// Runs both tasks one after the other and combines their values.
    ///
    /// The second task only starts once the first has succeeded.
    pub fn map2<B, C, F>(self, other: Task<B, X>, function: F) -> Task<C, X>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let function = Rc::new(function);
        Task::new(move |resolve, reject| {
            let function = Rc::clone(&function);
            let other = other.clone();
            let reject = Settle::new(reject);
            let inner_reject = reject.clone();
            self.run(
                move |a| other.run(move |b| resolve(function(a, b)), move |error| inner_reject.call(error)),
                move |error| reject.call(error),
            );
        })
    }

    /// Turns a unary function into one over tasks.
    pub fn lift<B, F>(function: F) -> impl Fn(Self) -> Task<B, X>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        move |task| {
            let function = Rc::clone(&function);
            task.map(move |a| function(a))
        }
    }

    /// Turns a binary function into one over tasks.
    pub fn lift2<B, C, F>(function: F) -> impl Fn(Self, Task<B, X>) -> Task<C, X>
    where
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

    /// Turns a ternary function into one over tasks.
    pub fn lift3<B, C, D, F>(function: F) -> impl Fn(Self, Task<B, X>, Task<C, X>) -> Task<D, X>
    where
        F: Fn(A, B, C) -> D + 'static,
        B: 'static,
        C: 'static,
        D: 'static,
    {
        let function = Rc::new(function);
        move |first, second, third| {
            let function = Rc::clone(&function);
            first
                .map2(second, |a, b| (a, b))
                .map2(third, move |(a, b), c| function(a, b, c))
        }
    }
}

impl<A, X> Task<Option<A>, X>
where
    A: 'static,
    X: 'static,
{
    /// Bridges an error-first callback API.
    ///
    /// `function` receives a callback taking `(error, value)`. A `Some`
    /// error fails the task; otherwise it succeeds with the value, which may
    /// itself be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::Task;
    ///
    /// let read = Task::<Option<&str>, String>::from_callback(|callback| callback(None, Some("contents")));
    /// read.run(|value| assert_eq!(value, Some("contents")), |_| unreachable!());
    ///
    /// let missing = Task::<Option<&str>, String>::from_callback(|callback| {
    ///     callback(Some("ENOENT".to_string()), None)
    /// });
    /// missing.run(|_| unreachable!(), |error| assert_eq!(error, "ENOENT"));
    /// ```
    pub fn from_callback<F>(function: F) -> Self
    where
        F: Fn(NodeCallback<A, X>) + 'static,
    {
        Self::new(move |resolve, reject| {
            function(Box::new(move |error, value| match error {
                Some(error) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!("error-first callback reported a failure");
                    reject(error);
                }
                None => resolve(value),
            }));
        })
    }
}

impl<A> Task<A, Thrown>
where
    A: 'static,
{
    /// Runs `function` on every run; a return value succeeds, a panic fails
    /// with the captured message.
    pub fn from_throwable<F>(function: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self::new(move |resolve, reject| match catch_thrown(&function) {
            Ok(value) => resolve(value),
            Err(thrown) => reject(thrown),
        })
    }
}

#[cfg(feature = "async")]
mod bridge {
    use std::cell::Cell;
    use std::future::Future;
    use std::rc::Rc;

    use futures::FutureExt;
    use futures::channel::oneshot;

    use super::Task;
    use crate::effect::TaskError;

    impl<A, X> Task<A, X>
    where
        A: 'static,
        X: 'static,
    {
        /// Bridges a single future.
        ///
        /// The future is shared: every run of the task observes the same
        /// settled output, the way a promise behaves. `Ok` succeeds and `Err`
        /// fails.
        ///
        /// # Panics
        ///
        /// Running the task outside a `tokio::task::LocalSet` panics.
        pub fn from_future<Fut>(future: Fut) -> Self
        where
            Fut: Future<Output = Result<A, X>> + 'static,
            A: Clone,
            X: Clone,
        {
            let shared = future.boxed_local().shared();
            Self::new(move |resolve, reject| {
                let shared = shared.clone();
                tokio::task::spawn_local(async move {
                    match shared.await {
                        Ok(value) => resolve(value),
                        Err(error) => reject(error),
                    }
                });
            })
        }

        /// Bridges a future factory; each run awaits a fresh future.
        ///
        /// # Panics
        ///
        /// Running the task outside a `tokio::task::LocalSet` panics.
        pub fn from_future_fn<Fut, F>(factory: F) -> Self
        where
            F: Fn() -> Fut + 'static,
            Fut: Future<Output = Result<A, X>> + 'static,
        {
            Self::new(move |resolve, reject| {
                let future = factory();
                tokio::task::spawn_local(async move {
                    match future.await {
                        Ok(value) => resolve(value),
                        Err(error) => reject(error),
                    }
                });
            })
        }

        /// Runs the task once and exposes its settlement as a future.
        ///
        /// The task starts immediately; the returned future only reports the
        /// outcome. If both callbacks are dropped without being invoked the
        /// future resolves to [`TaskError::Dropped`].
        pub fn into_future(&self) -> impl Future<Output = Result<A, TaskError<X>>> + 'static {
            let (sender, receiver) = oneshot::channel();
            let sender = Rc::new(Cell::new(Some(sender)));
            let failure_sender = Rc::clone(&sender);
            self.run(
                move |value| settle(&sender, Ok(value)),
                move |error| settle(&failure_sender, Err(TaskError::Failed(error))),
            );
            async move {
                receiver.await.unwrap_or_else(|_| {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("task dropped its callbacks without settling");
                    Err(TaskError::Dropped)
                })
            }
        }
    }

    type Sender<A, X> = Rc<Cell<Option<oneshot::Sender<Result<A, TaskError<X>>>>>>;

    fn settle<A, X>(sender: &Sender<A, X>, outcome: Result<A, TaskError<X>>) {
        if let Some(sender) = sender.take()
            && sender.send(outcome).is_err()
        {
            #[cfg(feature = "tracing")]
            tracing::warn!("task settled after its future was dropped");
        }
    }
}

impl<A, X> Clone for Task<A, X>
where
    A: 'static,
    X: 'static,
{
    fn clone(&self) -> Self {
        Self {
            program: Rc::clone(&self.program),
            marker: PhantomData,
        }
    }
}

impl<A, X> std::fmt::Display for Task<A, X>
where
    A: 'static,
    X: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Task>")
    }
}

static_assertions::assert_not_impl_any!(Task<i32, String>: Send, Sync);
