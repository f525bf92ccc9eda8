use thiserror::Error;

/// Errors signalled when the arguments of a posting call are malformed.
///
/// These indicate a bug in the calling code and are reported before any domain is touched; they
/// are unrelated to infeasibility encountered during propagation, which is reported through the
/// failure state of the solver instead.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// The same start-time variable occurs in two different positions, or a start-time variable
    /// also occurs as a duration or end variable.
    #[error("the argument variables alias one another")]
    Aliasing,
    /// The parallel argument sequences of one posting call differ in length.
    #[error("the argument sequences differ in length")]
    SizeMismatch,
    /// A fixed duration is negative, or a task's latest end does not fit in the solver's integer
    /// range.
    #[error("an argument value is outside the representable range")]
    OutOfRange,
}
