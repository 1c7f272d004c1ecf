//! # effectual
//!
//! Small, composable containers for values and effects.
//!
//! ## Overview
//!
//! Every container offers the same composition interface (`map` and
//! `and_then`) plus constructors and inspectors specific to what it models:
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` and the `Identity`
//!   baseline
//! - **Eager Containers**: `Maybe` (absence), `Outcome` (success or error),
//!   `Pair`
//! - **Effects**: `IO`, `Reader`, `State`, `Writer`, `Task` and the Eff
//!   family (`Eff`, `EffResult`, `EffTask`, `EffIO`)
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and `Identity`
//! - `control`: `Maybe`, `Outcome`, `Pair`
//! - `effect`: `IO`, `Reader`, `State`, `Writer`, `Task`, Eff family
//! - `async`: Future bridges for `Task` (tokio, futures)
//! - `serde`: Serialization for the plain data containers
//! - `tracing`: Debug logging of captured panics and dropped tasks
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use effectual::prelude::*;
//!
//! let total = Maybe::of("40".parse::<i32>().ok())
//!     .map(|n| n + 2)
//!     .get_or_else(0);
//! assert_eq!(total, 42);
//!
//! let checked: Outcome<i32, String> = Outcome::Val(total).and_then(|n| {
//!     if n > 0 { Outcome::Val(n) } else { Outcome::Err("negative".to_string()) }
//! });
//! assert_eq!(checked.to_maybe(), Maybe::Just(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use effectual::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
