//! IO Monad - Deferred side effect handling.
//!
//! The `IO` type represents a computation that may perform side effects.
//! Side effects are not executed until `run` is called, and every call to
//! `run` executes them again: an `IO` is a description, never a cached
//! result.
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::IO;
//!
//! let io = IO::of(10)
//!     .map(|x| x * 2)
//!     .and_then(|x| IO::of(x + 1));
//! assert_eq!(io.run(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use effectual::effect::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//! let io = IO::new(move || {
//!     counter.set(counter.get() + 1);
//!     counter.get()
//! });
//!
//! // Not executed yet
//! assert_eq!(calls.get(), 0);
//!
//! // Each run re-executes the action
//! assert_eq!(io.run(), 1);
//! assert_eq!(io.run(), 2);
//! ```
//!
//! # Failures
//!
//! `IO` has no failure channel. A panic inside the wrapped function (or a
//! function passed to `map`/`and_then`) propagates out of `run` untouched.
//!
//! # Stack Safety
//!
//! `map` and `and_then` append a step to a flat list instead of wrapping
//! the previous action in a new closure, and `run` walks that list in a
//! loop. Chains of any length, and actions that recursively return
//! themselves from `and_then`, run in constant stack.

use std::marker::PhantomData;
use std::rc::Rc;

use super::erased::{Erased, erase, unerase};

#[derive(Clone)]
enum Step {
    Map(Rc<dyn Fn(Erased) -> Erased>),
    AndThen(Rc<dyn Fn(Erased) -> Rc<Program>>),
}

/// The action that produces the first value, followed by the steps applied
/// to it in order.
#[derive(Clone)]
struct Program {
    action: Rc<dyn Fn() -> Erased>,
    steps: Vec<Step>,
}

impl Program {
    fn run(program: &Rc<Program>) -> Erased {
        let mut value = (program.action)();
        let mut frames = vec![(Rc::clone(program), 0)];
        while let Some((program, index)) = frames.pop() {
            let Some(step) = program.steps.get(index).cloned() else {
                continue;
            };
            if index + 1 < program.steps.len() {
                frames.push((program, index + 1));
            }
            match step {
                Step::Map(function) => value = function(value),
                Step::AndThen(function) => {
                    let next = function(value);
                    value = (next.action)();
                    frames.push((next, 0));
                }
            }
        }
        value
    }
}

/// A monad representing deferred, re-runnable side effects.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IO::of(a).and_then(f) == f(a)`
/// 2. **Right Identity**: `m.and_then(IO::of) == m`
/// 3. **Associativity**: `m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))`
///
/// Equality here means "running both produces the same value".
pub struct IO<A>
where
    A: 'static,
{
    program: Rc<Program>,
    marker: PhantomData<fn() -> A>,
}

impl<A: 'static> IO<A> {
    /// Creates a new IO action from a closure.
    ///
    /// The closure will not be executed until `run` is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::IO;
    ///
    /// let io = IO::new(|| {
    ///     println!("Side effect!");
    ///     42
    /// });
    /// // Nothing is printed yet
    /// assert_eq!(io.run(), 42);
    /// ```
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self::from_program(Program {
            action: Rc::new(move || erase(action())),
            steps: Vec::new(),
        })
    }

    fn from_program(program: Program) -> Self {
        Self {
            program: Rc::new(program),
            marker: PhantomData,
        }
    }

    fn push<B: 'static>(self, step: Step) -> IO<B> {
        let mut program = Rc::unwrap_or_clone(self.program);
        program.steps.push(step);
        IO::from_program(program)
    }

    /// Same as [`IO::new`].
    pub fn from<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self::new(action)
    }

    /// Wraps a constant value; running it performs no side effects.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Executes the action and returns its result.
    ///
    /// Each call runs the wrapped function again.
    pub fn run(&self) -> A {
        unerase(Program::run(&self.program))
    }

    /// Transforms the result of the action without running it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::IO;
    ///
    /// let io = IO::of(21).map(|x| x * 2);
    /// assert_eq!(io.run(), 42);
    /// ```
    pub fn map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.push(Step::Map(Rc::new(move |value| erase(function(unerase(value))))))
    }

    /// Runs this action, passes the result to `function` and runs the action
    /// it returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::IO;
    ///
    /// let io = IO::of(10).and_then(|x| IO::of(x * 2));
    /// assert_eq!(io.run(), 20);
    /// ```
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.push(Step::AndThen(Rc::new(move |value| function(unerase(value)).program)))
    }

    /// Sequences two actions, discarding the result of the first.
    ///
    /// The first action is still executed for its side effects.
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        self.and_then(move |_| next.clone())
    }

    /// Runs both actions left to right and combines their results.
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        IO::new(move || {
            let a = self.run();
            let b = other.run();
            function(a, b)
        })
    }

    /// Turns a unary function into one over `IO` actions.
    pub fn lift<B, F>(function: F) -> impl Fn(Self) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        move |io| {
            let function = Rc::clone(&function);
            io.map(move |a| function(a))
        }
    }

    /// Turns a binary function into one over `IO` actions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::IO;
    ///
    /// let add = IO::lift2(|a: i32, b: i32| a + b);
    /// assert_eq!(add(IO::of(3), IO::of(2)).run(), 5);
    /// ```
    pub fn lift2<B, C, F>(function: F) -> impl Fn(Self, IO<B>) -> IO<C>
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

    /// Turns a ternary function into one over `IO` actions.
    pub fn lift3<B, C, D, F>(function: F) -> impl Fn(Self, IO<B>, IO<C>) -> IO<D>
    where
        F: Fn(A, B, C) -> D + 'static,
        B: 'static,
        C: 'static,
        D: 'static,
    {
        let function = Rc::new(function);
        move |first, second, third| {
            let function = Rc::clone(&function);
            IO::new(move || {
                let a = first.run();
                let b = second.run();
                let c = third.run();
                function(a, b, c)
            })
        }
    }
}

impl<A: 'static> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            program: Rc::clone(&self.program),
            marker: PhantomData,
        }
    }
}

impl<A: 'static> std::fmt::Display for IO<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<IO>")
    }
}

static_assertions::assert_not_impl_any!(IO<i32>: Send, Sync);
