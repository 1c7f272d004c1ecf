//! Deferred and environment-dependent effects.
//!
//! # Base Monads
//!
//! - [`IO`]: Re-runnable deferred side effects
//! - [`Reader`]: Computations that read from an environment
//! - [`State`]: Computations that thread a state value
//! - [`Writer`]: Values with an append-only log
//! - [`Task`]: Re-runnable computations that settle through a success or a
//!   failure callback
//!
//! # Eff Family
//!
//! [`Eff`], [`EffResult`], [`EffTask`] and [`EffIO`] combine environment
//! injection with a plain value, an [`Outcome`](crate::control::Outcome),
//! a [`Task`] or an [`IO`]. Their `using` constructors read one part of the
//! environment through `AsRef`, so chaining steps merges what each step
//! requires of the environment.
//!
//! # Execution Model
//!
//! Everything here is single-threaded: the deferred types share their
//! functions through `Rc` and are neither `Send` nor `Sync`. Nothing runs
//! until `run` is called, and every `run` executes the computation again.
//!
//! ```rust
//! use effectual::effect::{IO, Task};
//!
//! let io = IO::of(10)
//!     .map(|x| x * 2)
//!     .and_then(|x| IO::of(x + 1));
//! assert_eq!(io.run(), 21);
//!
//! Task::<i32, String>::from_io(io)
//!     .map(|x| x * 2)
//!     .run(|value| assert_eq!(value, 42), |_| unreachable!());
//! ```

// =============================================================================
// Base Monads
// =============================================================================

mod io;
mod reader;
mod state;
mod writer;

pub use io::IO;
pub use reader::Reader;
pub use state::{State, Transition};
pub use writer::Writer;

// =============================================================================
// Task
// =============================================================================

mod erased;
mod error;
mod task;

pub use error::TaskError;
pub use task::{NodeCallback, Reject, Resolve, Task};

pub use crate::control::Thrown;

// =============================================================================
// Eff Family
// =============================================================================

mod eff;
mod eff_io;
mod eff_result;
mod eff_task;

pub use eff::Eff;
pub use eff_io::EffIO;
pub use eff_result::EffResult;
pub use eff_task::EffTask;
