//! Type-erased values for the step interpreters behind [`IO`](super::IO)
//! and [`Task`](super::Task).
//!
//! A chain of `map`/`and_then` calls is stored as a flat list of steps whose
//! intermediate types differ, so the values flowing between steps travel as
//! `Box<dyn Any>` and are recovered at the typed boundary.

use std::any::Any;

/// A value whose type was erased by a typed constructor.
pub(crate) type Erased = Box<dyn Any>;

#[inline]
pub(crate) fn erase<T: 'static>(value: T) -> Erased {
    Box::new(value)
}

/// Recovers a value erased by [`erase`].
///
/// # Panics
///
/// Panics if `value` was erased from a type other than `T`. The typed
/// wrappers only ever hand a step the value its predecessor produced, so
/// this indicates a bug in this crate.
#[inline]
pub(crate) fn unerase<T: 'static>(value: Erased) -> T {
    match value.downcast::<T>() {
        Ok(value) => *value,
        Err(_) => unreachable!("erased value does not have the expected type"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unerase_recovers_original_value() {
        assert_eq!(unerase::<String>(erase("kept".to_string())), "kept");
    }

    #[rstest]
    #[should_panic(expected = "erased value does not have the expected type")]
    fn unerase_with_wrong_type_panics() {
        let _ = unerase::<u8>(erase(1_i64));
    }
}
