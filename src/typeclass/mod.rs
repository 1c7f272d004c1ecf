//! Type class traits for functional programming abstractions.
//!
//! This module provides the type classes (traits) shared by the containers
//! of this crate:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! which lets `Functor` and `Monad` be stated once for every container.
//!
//! ## Foundation Types
//!
//! - [`Identity`]: Identity wrapper type, the composition baseline
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{Applicative, Functor, Identity, Monad};
//!
//! let value = <Identity<()>>::pure(20)
//!     .fmap(|n| n + 1)
//!     .flat_map(|n| Identity::of(n * 2));
//! assert_eq!(value, Identity::of(42));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
