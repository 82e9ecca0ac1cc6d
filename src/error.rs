//! Error types for `Either` access and async chain evaluation.
//!
//! A `Left` value is never an error: it is ordinary data travelling down the
//! alternate track. [`EitherError`] only reports defects, either a checked
//! accessor used on the wrong variant or a chain whose node shapes disagree
//! with what forcing actually produced.

use std::fmt;

/// One of the two variants of an [`Either`](crate::Either).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The `Left` variant.
    Left,
    /// The `Right` variant.
    Right,
}

impl Side {
    /// The variant opposite to this one.
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("Left"),
            Side::Right => f.write_str("Right"),
        }
    }
}

/// Error returned by checked accessors and by forcing an async chain.
///
/// Both kinds signal a bug, never caller data, and neither is recovered
/// internally: they propagate out of [`AsyncEither::force`] unchanged.
///
/// # Examples
///
/// ```rust
/// use eddy::{Either, EitherError, Side};
///
/// let e: Either<&str, i32> = Either::right(1);
/// assert_eq!(
///     e.try_left(),
///     Err(EitherError::WrongVariantAccess { expected: Side::Left })
/// );
/// ```
///
/// [`AsyncEither::force`]: crate::AsyncEither::force
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EitherError {
    /// The value of one variant was requested from the other variant.
    WrongVariantAccess {
        /// The variant the caller asked for.
        expected: Side,
    },
    /// A node statically known to be `Right` observed a `Left` predecessor.
    InvariantViolation {
        /// Which invariant was broken.
        message: &'static str,
    },
}

impl EitherError {
    /// Create a wrong-variant error for a request of `expected`.
    pub fn wrong_variant(expected: Side) -> Self {
        Self::WrongVariantAccess { expected }
    }

    /// Create an invariant violation error.
    pub fn invariant(message: &'static str) -> Self {
        Self::InvariantViolation { message }
    }

    /// Returns true if this is a wrong-variant access.
    pub fn is_wrong_variant(&self) -> bool {
        matches!(self, Self::WrongVariantAccess { .. })
    }

    /// Returns true if this is an invariant violation.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}

impl fmt::Display for EitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongVariantAccess { expected } => write!(
                f,
                "wrong variant access: expected {}, found {}",
                expected,
                expected.opposite()
            ),
            Self::InvariantViolation { message } => {
                write!(f, "invariant violation: {}", message)
            }
        }
    }
}

impl std::error::Error for EitherError {}
