//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] records the type a container is currently applied to
//! and how to re-apply the same constructor to another type, which is enough
//! to state `Functor` and `Monad` generically.
//!
//! # Example
//!
//! ```rust
//! use effectual::typeclass::{Identity, TypeConstructor};
//!
//! fn rewrap<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let rewrapped: Identity<String> = rewrap(Identity::of(42));
//! assert_eq!(rewrapped, Identity::of(String::new()));
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be the same type as `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;

    #[test]
    fn identity_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Identity<i32>>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Identity<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_bool::<Step2>();
    }

    #[cfg(feature = "control")]
    #[test]
    fn outcome_with_type_preserves_error_type() {
        use crate::control::Outcome;

        fn assert_outcome_with_type<T, E, B>()
        where
            Outcome<T, E>: TypeConstructor<Inner = T, WithType<B> = Outcome<B, E>>,
        {
        }

        assert_outcome_with_type::<i32, String, bool>();
        assert_outcome_with_type::<String, (), i32>();
    }

    #[cfg(feature = "control")]
    #[test]
    fn pair_constructor_ranges_over_right_component() {
        use crate::control::Pair;

        fn assert_pair<T: TypeConstructor<Inner = u8, WithType<bool> = Pair<&'static str, bool>>>() {}
        assert_pair::<Pair<&'static str, u8>>();
    }
}
