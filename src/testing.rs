//! Testing utilities for code built on `Either` chains.
//!
//! # Examples
//!
//! ```rust
//! use eddy::{assert_left, assert_right, Either};
//!
//! let right: Either<&str, i32> = Either::right(42);
//! assert_right!(right);
//! assert_right!(right, 42);
//!
//! let left: Either<&str, i32> = Either::left("stop");
//! assert_left!(left, "stop");
//! ```

/// Assert that an `Either` is `Left`, optionally with a given value.
///
/// # Example
///
/// ```rust
/// use eddy::{assert_left, Either};
///
/// let e: Either<&str, i32> = Either::left("a");
/// assert_left!(e);
/// assert_left!(e, "a");
/// ```
#[macro_export]
macro_rules! assert_left {
    ($either:expr) => {
        match $either {
            $crate::Either::Left(_) => {}
            $crate::Either::Right(v) => {
                panic!("Expected Left, got Right: {:?}", v);
            }
        }
    };
    ($either:expr, $expected:expr) => {
        match $either {
            $crate::Either::Left(v) => {
                assert_eq!(v, $expected);
            }
            $crate::Either::Right(v) => {
                panic!("Expected Left({:?}), got Right: {:?}", $expected, v);
            }
        }
    };
}

/// Assert that an `Either` is `Right`, optionally with a given value.
///
/// # Example
///
/// ```rust
/// use eddy::{assert_right, Either};
///
/// let e: Either<&str, i32> = Either::right(8);
/// assert_right!(e);
/// assert_right!(e, 8);
/// ```
#[macro_export]
macro_rules! assert_right {
    ($either:expr) => {
        match $either {
            $crate::Either::Right(_) => {}
            $crate::Either::Left(v) => {
                panic!("Expected Right, got Left: {:?}", v);
            }
        }
    };
    ($either:expr, $expected:expr) => {
        match $either {
            $crate::Either::Right(v) => {
                assert_eq!(v, $expected);
            }
            $crate::Either::Left(v) => {
                panic!("Expected Right({:?}), got Left: {:?}", $expected, v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<A, B> Arbitrary for crate::Either<A, B>
where
    A: Arbitrary + 'static,
    B: Arbitrary + 'static,
{
    type Parameters = (A::Parameters, B::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (a_params, b_params) = args;
        prop_oneof![
            any_with::<A>(a_params).prop_map(crate::Either::left),
            any_with::<B>(b_params).prop_map(crate::Either::right),
        ]
        .boxed()
    }
}
