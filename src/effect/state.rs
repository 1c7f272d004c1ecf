//! State Monad - stateful computation threading.
//!
//! A `State<S, A>` encapsulates a function `S -> Transition<S, A>`: given an
//! initial state it produces a resulting state and a value. Sequencing with
//! `and_then` feeds the resulting state of one step into the next, so state
//! is threaded explicitly without any mutation.
//!
//! # Laws
//!
//! - Left Identity: `State::of(a).and_then(f) == f(a)`
//! - Right Identity: `m.and_then(State::of) == m`
//! - Get-Put: `State::get().and_then(|s| State::put(f(s)))` replaces the
//!   state with `f(s)` and yields `()`, exactly like `State::modify(f)`
//!
//! # Examples
//!
//! ```rust
//! use effectual::effect::State;
//!
//! let next_id = State::get().and_then(|id: u32| State::put(id + 1).map(move |()| id));
//! let three_ids = next_id.clone().map2(next_id.clone(), |a, b| (a, b)).map2(next_id, |(a, b), c| vec![a, b, c]);
//!
//! let result = three_ids.run(100);
//! assert_eq!(result.value, vec![100, 101, 102]);
//! assert_eq!(result.state, 103);
//! ```

use std::rc::Rc;

/// The outcome of running one state step: the resulting state and a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Transition<S, A> {
    /// The state after the step.
    pub state: S,
    /// The value the step produced.
    pub value: A,
}

impl<S, A> Transition<S, A> {
    /// Creates a transition.
    pub const fn new(state: S, value: A) -> Self {
        Self { state, value }
    }
}

impl<S, A> From<Transition<S, A>> for (S, A) {
    fn from(transition: Transition<S, A>) -> Self {
        (transition.state, transition.value)
    }
}

/// A monad for computations that thread state through a sequence of steps.
///
/// # Examples
///
/// ```rust
/// use effectual::effect::{State, Transition};
///
/// let step: State<i32, String> = State::new(|s| Transition::new(s + 1, format!("was {s}")));
/// assert_eq!(step.get_state(10), 11);
/// assert_eq!(step.get_value(10), "was 10");
/// ```
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(S) -> Transition<S, A>>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a new State from a state transition function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> Transition<S, A> + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation from `initial_state`.
    pub fn run(&self, initial_state: S) -> Transition<S, A> {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and keeps only the resulting state.
    pub fn get_state(&self, initial_state: S) -> S {
        self.run(initial_state).state
    }

    /// Runs the computation and keeps only the produced value.
    pub fn get_value(&self, initial_state: S) -> A {
        self.run(initial_state).value
    }

    /// Produces `value` and leaves the state as it was.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| Transition::new(state, value.clone()))
    }

    /// Transforms the produced value; the resulting state is unchanged.
    pub fn map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        State::new(move |initial_state| {
            let Transition { state, value } = self.run(initial_state);
            Transition::new(state, function(value))
        })
    }

    /// Runs this step, then the step `function` builds from its value,
    /// starting from the state this step left behind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::effect::State;
    ///
    /// let computation = State::get().and_then(|s: i32| State::put(s + 2));
    /// assert_eq!(computation.get_state(3), 5);
    /// let () = computation.get_value(3);
    /// ```
    pub fn and_then<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        self.map(function).join()
    }

    /// Runs both steps in order and combines their values.
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        State::new(move |initial_state| {
            let first = self.run(initial_state);
            let second = other.run(first.state);
            Transition::new(second.state, function(first.value, second.value))
        })
    }

    /// Sequences two steps, discarding the first value.
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.map2(next, |_, b| b)
    }
}

impl<S, A> State<S, State<S, A>>
where
    S: 'static,
    A: 'static,
{
    /// Flattens a step that produces another step.
    pub fn join(self) -> State<S, A> {
        State::new(move |initial_state| {
            let Transition { state, value: inner } = self.run(initial_state);
            inner.run(state)
        })
    }
}

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Yields the current state as the value, leaving it unchanged.
    pub fn get() -> Self {
        Self::new(|state: S| Transition::new(state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: 'static,
{
    /// Replaces the state with `state`.
    pub fn put(state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| Transition::new(state.clone(), ()))
    }

    /// Replaces the state with `function(current)`.
    pub fn modify<F>(function: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| Transition::new(function(state), ()))
    }
}

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<S, A> std::fmt::Display for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<State>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn run_returns_state_and_value() {
        let step: State<i32, i32> = State::new(|s| Transition::new(s * 2, s + 1));
        assert_eq!(step.run(10), Transition { state: 20, value: 11 });
        assert_eq!(step.get_state(10), 20);
        assert_eq!(step.get_value(10), 11);
    }

    #[rstest]
    fn of_keeps_incoming_state() {
        let step: State<i32, &str> = State::of("value");
        assert_eq!(step.run(7), Transition::new(7, "value"));
    }

    #[rstest]
    fn map_changes_only_value() {
        let step: State<i32, i32> = State::get();
        assert_eq!(step.map(|s| s * 10).run(4), Transition::new(4, 40));
    }

    #[rstest]
    fn get_then_put() {
        let step = State::get().and_then(|s: i32| State::put(s + 2));
        assert_eq!(step.get_state(3), 5);
        let () = step.get_value(3);
    }

    #[rstest]
    fn modify_matches_get_then_put() {
        let via_modify = State::modify(|s: i32| s * 3);
        let via_get_put = State::get().and_then(|s: i32| State::put(s * 3));
        assert_eq!(via_modify.run(4), via_get_put.run(4));
    }

    #[rstest]
    fn join_threads_state_into_inner_step() {
        let outer: State<i32, State<i32, i32>> =
            State::new(|s| Transition::new(s + 1, State::new(|t| Transition::new(t * 2, t))));
        assert_eq!(outer.join().run(5), Transition::new(12, 6));
    }

    #[rstest]
    fn then_discards_first_value() {
        let step = State::put(1).then(State::get());
        assert_eq!(step.run(0), Transition::new(1, 1));
    }

    #[rstest]
    fn transition_into_tuple() {
        let tuple: (i32, char) = Transition::new(1, 'a').into();
        assert_eq!(tuple, (1, 'a'));
    }

    #[rstest]
    fn is_rerunnable() {
        let step = State::modify(|s: i32| s + 1);
        assert_eq!(step.get_state(1), 2);
        assert_eq!(step.get_state(1), 2);
    }
}
