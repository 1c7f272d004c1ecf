//! Eager data containers.
//!
//! This module provides the containers whose contents are already computed:
//!
//! - [`Maybe`]: A value that may be absent
//! - [`Outcome`]: A success value or an error value
//! - [`Pair`]: An immutable two-element tuple, a functor over its right side
//! - [`Thrown`]: The captured payload of a panicking `from_throwable` closure
//!
//! # Examples
//!
//! ## Absence
//!
//! ```rust
//! use effectual::control::Maybe;
//!
//! let port = Maybe::of("8080".parse::<u16>().ok()).get_or_else(80);
//! assert_eq!(port, 8080);
//! ```
//!
//! ## Failure and Recovery
//!
//! ```rust
//! use effectual::control::Outcome;
//!
//! fn divide(a: i32, b: i32) -> Outcome<i32, String> {
//!     if b == 0 {
//!         Outcome::Err("division by zero".to_string())
//!     } else {
//!         Outcome::Val(a / b)
//!     }
//! }
//!
//! let recovered = divide(10, 0).handle_error(|_| Outcome::<i32, String>::Val(0));
//! assert_eq!(recovered, Outcome::Val(0));
//! assert_eq!(divide(10, 2).and_then(|n| divide(n, 5)), Outcome::Val(1));
//! ```

mod maybe;
mod outcome;
mod pair;
mod thrown;

pub use maybe::Maybe;
pub use outcome::Outcome;
pub use pair::Pair;
pub use thrown::Thrown;

pub(crate) use thrown::catch_thrown;
