//! Error types for the effect system.
//!
//! [`TaskError`] is what a [`Task`](super::Task) settles with once it has
//! been bridged into a future. Panics captured by `from_throwable` are
//! reported as [`Thrown`](crate::control::Thrown).

/// Represents the ways a bridged `Task` can fail to produce a value.
///
/// # Examples
///
/// ```rust
/// use effectual::effect::TaskError;
///
/// let error: TaskError<String> = TaskError::Failed("timeout".to_string());
/// assert_eq!(format!("{}", error), "task failed: timeout");
/// assert_eq!(format!("{}", TaskError::<String>::Dropped), "task dropped without settling");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError<X> {
    /// The task invoked its failure callback with this value.
    Failed(X),
    /// Both callbacks were dropped before either was invoked.
    Dropped,
}

impl<X> TaskError<X> {
    /// Returns the failure value, if the task actually failed.
    pub fn into_failure(self) -> Option<X> {
        match self {
            Self::Failed(error) => Some(error),
            Self::Dropped => None,
        }
    }
}

impl<X: std::fmt::Display> std::fmt::Display for TaskError<X> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failed(error) => write!(formatter, "task failed: {error}"),
            Self::Dropped => write!(formatter, "task dropped without settling"),
        }
    }
}

impl<X: std::fmt::Debug + std::fmt::Display> std::error::Error for TaskError<X> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_failed() {
        let error = TaskError::Failed(42);
        assert_eq!(error.to_string(), "task failed: 42");
    }

    #[rstest]
    fn display_dropped() {
        assert_eq!(TaskError::<i32>::Dropped.to_string(), "task dropped without settling");
    }

    #[rstest]
    fn into_failure_extracts_value() {
        assert_eq!(TaskError::Failed("e").into_failure(), Some("e"));
        assert_eq!(TaskError::<&str>::Dropped.into_failure(), None);
    }

    #[rstest]
    fn is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&TaskError::Failed("boom".to_string()));
    }
}
