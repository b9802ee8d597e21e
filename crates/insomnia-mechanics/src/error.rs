//! Error types for the mechanics engine.

/// Errors that can occur when building or resolving a roll.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechanicsError {
    /// The pool sizes do not match the number of faces supplied.
    #[error("pool sizes call for {expected} dice but {actual} faces were supplied")]
    PoolSizeMismatch {
        /// Total dice the pool sizes call for.
        expected: u32,
        /// Number of faces actually supplied.
        actual: u32,
    },

    /// A die face lies outside the 1-6 range.
    #[error("die face {0} is outside 1-6")]
    FaceOutOfRange(u32),

    /// All three pools are empty, so there is nothing to roll.
    #[error("no dice to roll")]
    EmptyRoll,
}

/// Convenience result type for mechanics operations.
pub type MechanicsResult<T> = Result<T, MechanicsError>;
