//! Panic capture for the `from_throwable` constructors.
//!
//! A "throwing" function in this crate is one that panics. The
//! `from_throwable` constructors on [`Maybe`](super::Maybe),
//! [`Outcome`](super::Outcome) and `Task` run their closure under
//! [`std::panic::catch_unwind`] and turn a panic into the container's failure
//! case. Every other operation lets panics propagate to the caller.

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// The payload of a panic captured by a `from_throwable` constructor.
///
/// # Examples
///
/// ```rust
/// use effectual::control::{Outcome, Thrown};
///
/// let outcome: Outcome<i32, Thrown> = Outcome::from_throwable(|| panic!("boom"));
/// let thrown = outcome.cases(|_| unreachable!(), |thrown| thrown);
/// assert_eq!(thrown.message(), "boom");
/// assert_eq!(thrown.to_string(), "thrown: boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Thrown {
    message: String,
}

impl Thrown {
    /// Creates a `Thrown` carrying the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The panic message, or `"Unknown panic"` for non-string payloads.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(string) = payload.downcast_ref::<&str>() {
            (*string).to_string()
        } else if let Some(string) = payload.downcast_ref::<String>() {
            string.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self { message }
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "thrown: {}", self.message)
    }
}

impl std::error::Error for Thrown {}

/// Runs `function`, converting a panic into [`Thrown`].
pub(crate) fn catch_thrown<A, F>(function: F) -> Result<A, Thrown>
where
    F: FnOnce() -> A,
{
    catch_unwind(AssertUnwindSafe(function)).map_err(|payload| {
        let thrown = Thrown::from_payload(payload);
        #[cfg(feature = "tracing")]
        tracing::debug!(panic = %thrown.message(), "captured panic from throwable function");
        thrown
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn catch_thrown_passes_values_through() {
        assert_eq!(catch_thrown(|| 42), Ok(42));
    }

    #[rstest]
    fn catch_thrown_captures_str_payload() {
        let result: Result<i32, Thrown> = catch_thrown(|| panic!("static message"));
        assert_eq!(result, Err(Thrown::new("static message")));
    }

    #[rstest]
    fn catch_thrown_captures_formatted_payload() {
        let code = 7;
        let result: Result<(), Thrown> = catch_thrown(|| panic!("failed with {code}"));
        assert_eq!(result.unwrap_err().message(), "failed with 7");
    }

    #[rstest]
    fn from_payload_handles_unknown_types() {
        let thrown = Thrown::from_payload(Box::new(42_u8));
        assert_eq!(thrown.message(), "Unknown panic");
    }

    #[rstest]
    fn display_prefixes_message() {
        assert_eq!(Thrown::new("oops").to_string(), "thrown: oops");
    }
}
