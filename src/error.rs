use thiserror::Error;

/// Failures surfaced by [`Record`](crate::Record) operations.
///
/// Division is the only fallible operation; everything else on the fixture is
/// total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A zero divisor was passed to [`Record::divide`](crate::Record::divide).
    #[error("division by zero")]
    DivisionByZero,
}
