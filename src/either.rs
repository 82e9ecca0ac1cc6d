//! A right-biased sum type for values that take one of two tracks.
//!
//! `Either<A, B>` holds exactly one of `Left(A)` or `Right(B)`. By convention
//! `Right` is the continuing value and `Left` the alternate one: combinators
//! such as [`map`](Either::map) and [`flatmap`](Either::flatmap) only touch
//! the `Right` track and carry a `Left` through untouched.
//!
//! Unlike `Result`, a `Left` is not an error. It is a first-class outcome
//! that short-circuits the rest of a pipeline.
//!
//! # Examples
//!
//! ```rust
//! use eddy::Either;
//!
//! fn halve(x: i32) -> Either<String, i32> {
//!     if x % 2 == 0 {
//!         Either::right(x / 2)
//!     } else {
//!         Either::left(format!("{} is odd", x))
//!     }
//! }
//!
//! assert_eq!(Either::right(8).flatmap(halve).flatmap(halve), Either::right(2));
//! assert_eq!(
//!     Either::right(6).flatmap(halve).flatmap(halve),
//!     Either::left("3 is odd".to_string())
//! );
//! ```
//!
//! Steps that need to `.await` something are attached with
//! [`mapa`](Either::mapa) and [`flatmapa`](Either::flatmapa), which move the
//! value into a deferred [`AsyncEither`] chain.

use std::future::Future;

use crate::chain::AsyncEither;
use crate::error::{EitherError, Side};

/// A value that is either `Left(A)` or `Right(B)`.
///
/// The variant is fixed at construction. Exactly one of
/// [`is_left`](Either::is_left) and [`is_right`](Either::is_right) is true.
///
/// # Example
///
/// ```rust
/// use eddy::Either;
///
/// let left: Either<&str, i32> = Either::left("a");
/// let right: Either<&str, i32> = Either::right(1);
///
/// assert_eq!(left.fold(|s| s.len(), |x| x as usize * 2), 1);
/// assert_eq!(right.fold(|s| s.len(), |x| x as usize * 2), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<A, B> {
    /// The alternate track.
    Left(A),
    /// The continuing track.
    Right(B),
}

impl<A, B> Either<A, B> {
    // ========== Constructors ==========

    /// Create a Left value.
    #[inline]
    pub fn left(value: A) -> Self {
        Either::Left(value)
    }

    /// Create a Right value.
    #[inline]
    pub fn right(value: B) -> Self {
        Either::Right(value)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// The variant this value holds.
    #[inline]
    pub fn side(&self) -> Side {
        match self {
            Either::Left(_) => Side::Left,
            Either::Right(_) => Side::Right,
        }
    }

    // ========== Extractors ==========

    /// Returns the left value, or `WrongVariantAccess` if this is a `Right`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::{Either, EitherError, Side};
    ///
    /// let left: Either<i32, &str> = Either::left(42);
    /// assert_eq!(left.try_left(), Ok(42));
    ///
    /// let right: Either<i32, &str> = Either::right("x");
    /// assert_eq!(right.try_left(), Err(EitherError::wrong_variant(Side::Left)));
    /// ```
    #[inline]
    pub fn try_left(self) -> Result<A, EitherError> {
        match self {
            Either::Left(a) => Ok(a),
            Either::Right(_) => Err(EitherError::wrong_variant(Side::Left)),
        }
    }

    /// Returns the right value, or `WrongVariantAccess` if this is a `Left`.
    #[inline]
    pub fn try_right(self) -> Result<B, EitherError> {
        match self {
            Either::Left(_) => Err(EitherError::wrong_variant(Side::Right)),
            Either::Right(b) => Ok(b),
        }
    }

    /// Returns the left value if present, consuming self.
    #[inline]
    pub fn into_left(self) -> Option<A> {
        self.try_left().ok()
    }

    /// Returns the right value if present, consuming self.
    #[inline]
    pub fn into_right(self) -> Option<B> {
        self.try_right().ok()
    }

    /// Extract the left value, panicking if Right.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Right`.
    #[inline]
    pub fn unwrap_left(self) -> A {
        match self {
            Either::Left(a) => a,
            Either::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Extract the right value, panicking if Left.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Left`.
    #[inline]
    pub fn unwrap_right(self) -> B {
        match self {
            Either::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Either::Right(b) => b,
        }
    }

    /// Convert from `&Either<A, B>` to `Either<&A, &B>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&A, &B> {
        match self {
            Either::Left(a) => Either::Left(a),
            Either::Right(b) => Either::Right(b),
        }
    }

    // ========== Folding ==========

    /// Eliminate the value by supplying one handler per variant.
    #[inline]
    pub fn fold<C, F, G>(self, on_left: F, on_right: G) -> C
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> C,
    {
        match self {
            Either::Left(a) => on_left(a),
            Either::Right(b) => on_right(b),
        }
    }

    /// Exchange the variants: `Left(x)` becomes `Right(x)` and vice versa.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::Either;
    ///
    /// let e: Either<&str, i32> = Either::left("a");
    /// assert_eq!(e.swap(), Either::right("a"));
    /// assert_eq!(e.swap().swap(), e);
    /// ```
    #[inline]
    pub fn swap(self) -> Either<B, A> {
        match self {
            Either::Left(a) => Either::Right(a),
            Either::Right(b) => Either::Left(b),
        }
    }

    /// Returns the right value, or `default` if this is a `Left`.
    #[inline]
    pub fn get_or_else(self, default: B) -> B {
        match self {
            Either::Left(_) => default,
            Either::Right(b) => b,
        }
    }

    /// Returns `self` if Right, otherwise `alternative`.
    ///
    /// The left type of the alternative may differ from this one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::Either;
    ///
    /// let l: Either<&str, i32> = Either::left("a");
    /// let r: Either<&str, i32> = Either::right(1);
    ///
    /// assert_eq!(l.or_else(Either::<char, i32>::left('b')), Either::left('b'));
    /// assert_eq!(r.or_else(Either::<char, i32>::left('b')), Either::right(1));
    /// ```
    #[inline]
    pub fn or_else<A1>(self, alternative: Either<A1, B>) -> Either<A1, B> {
        match self {
            Either::Left(_) => alternative,
            Either::Right(b) => Either::Right(b),
        }
    }

    /// Returns `true` if this is a `Right` equal to `value`.
    #[inline]
    pub fn contains<T>(&self, value: &T) -> bool
    where
        B: PartialEq<T>,
    {
        match self {
            Either::Left(_) => false,
            Either::Right(b) => b == value,
        }
    }

    /// Returns `true` if this is a `Right` whose value satisfies `predicate`.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&B) -> bool,
    {
        match self {
            Either::Left(_) => false,
            Either::Right(b) => predicate(b),
        }
    }

    // ========== Transformations ==========

    /// Transform the right value, leaving a `Left` untouched.
    #[inline]
    pub fn map<B1, F>(self, f: F) -> Either<A, B1>
    where
        F: FnOnce(B) -> B1,
    {
        match self {
            Either::Left(a) => Either::Left(a),
            Either::Right(b) => Either::Right(f(b)),
        }
    }

    /// Transform the left value, leaving a `Right` untouched.
    #[inline]
    pub fn map_left<A1, F>(self, f: F) -> Either<A1, B>
    where
        F: FnOnce(A) -> A1,
    {
        match self {
            Either::Left(a) => Either::Left(f(a)),
            Either::Right(b) => Either::Right(b),
        }
    }

    /// Transform both sides with separate functions.
    #[inline]
    pub fn bimap<A1, B1, F, G>(self, f: F, g: G) -> Either<A1, B1>
    where
        F: FnOnce(A) -> A1,
        G: FnOnce(B) -> B1,
    {
        match self {
            Either::Left(a) => Either::Left(f(a)),
            Either::Right(b) => Either::Right(g(b)),
        }
    }

    /// Chain a step that may itself switch to the `Left` track.
    ///
    /// `Right(x)` becomes `f(x)`; a `Left` is returned as is and `f` is never
    /// called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::Either;
    ///
    /// let e: Either<&str, i32> = Either::right(2);
    /// let out = e
    ///     .map(|x| x * 2)
    ///     .flatmap(|x| if x % 2 == 0 { Either::left("b") } else { Either::right(1) });
    /// assert_eq!(out, Either::left("b"));
    /// ```
    #[inline]
    pub fn flatmap<B1, F>(self, f: F) -> Either<A, B1>
    where
        F: FnOnce(B) -> Either<A, B1>,
    {
        match self {
            Either::Left(a) => Either::Left(a),
            Either::Right(b) => f(b),
        }
    }

    // ========== Conversions ==========

    /// The right value as a zero- or one-element `Vec`.
    #[inline]
    pub fn to_seq(self) -> Vec<B> {
        match self {
            Either::Left(_) => Vec::new(),
            Either::Right(b) => vec![b],
        }
    }

    /// The right value, or `None` for a `Left`.
    #[inline]
    pub fn to_option(self) -> Option<B> {
        self.into_right()
    }

    /// Convert to a `Result`, with `Right` as `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<B, A> {
        match self {
            Either::Left(a) => Err(a),
            Either::Right(b) => Ok(b),
        }
    }

    /// Returns an iterator over the right value, if present.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &B> {
        self.as_ref().into_right().into_iter()
    }

    // ========== Async chain entry points ==========

    /// Lift this value into an [`AsyncEither`] chain without adding a step.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::Either;
    ///
    /// # tokio_test::block_on(async {
    /// let e: Either<&str, i32> = Either::right(2);
    /// let chain = e.into_async().map(|x| x + 1);
    /// assert_eq!(chain.force().await, Ok(Either::right(3)));
    /// # });
    /// ```
    #[inline]
    pub fn into_async<'a>(self) -> AsyncEither<'a, A, B, B>
    where
        A: Send + 'a,
        B: Send + 'a,
    {
        AsyncEither::base(self)
    }

    /// Attach an async transformation of the right value.
    ///
    /// Nothing runs until the returned chain is forced. On a `Left` the
    /// function is dropped without being called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::Either;
    ///
    /// async fn double(x: i32) -> i32 {
    ///     x * 2
    /// }
    ///
    /// # tokio_test::block_on(async {
    /// let chain = Either::<&str, i32>::right(2).mapa(double).mapa(double);
    /// assert_eq!(chain.force().await, Ok(Either::right(8)));
    /// # });
    /// ```
    pub fn mapa<'a, B1, F, Fut>(self, f: F) -> AsyncEither<'a, A, B, B1>
    where
        A: Send + 'a,
        B: Send + 'a,
        B1: Send + 'a,
        F: FnOnce(B) -> Fut + Send + 'a,
        Fut: Future<Output = B1> + Send + 'a,
    {
        self.into_async().mapa(f)
    }

    /// Attach an async step that produces a new `Either`.
    ///
    /// Nothing runs until the returned chain is forced. On a `Left` the
    /// function is dropped without being called.
    pub fn flatmapa<'a, B1, F, Fut>(self, f: F) -> AsyncEither<'a, A, B, B1>
    where
        A: Send + 'a,
        B: Send + 'a,
        B1: Send + 'a,
        F: FnOnce(B) -> Fut + Send + 'a,
        Fut: Future<Output = Either<A, B1>> + Send + 'a,
    {
        self.into_async().flatmapa(f)
    }
}

impl<A, B> Either<A, Either<A, B>> {
    /// Flatten a nested Either.
    #[inline]
    pub fn flatten(self) -> Either<A, B> {
        self.flatmap(|inner| inner)
    }
}

impl<A, B> From<Result<B, A>> for Either<A, B> {
    fn from(result: Result<B, A>) -> Self {
        match result {
            Ok(b) => Either::Right(b),
            Err(a) => Either::Left(a),
        }
    }
}

impl<A, B> From<Either<A, B>> for Result<B, A> {
    fn from(either: Either<A, B>) -> Self {
        either.into_result()
    }
}

impl<A, B> IntoIterator for Either<A, B> {
    type Item = B;
    type IntoIter = std::option::IntoIter<B>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_right().into_iter()
    }
}

impl<'a, A, B> IntoIterator for &'a Either<A, B> {
    type Item = &'a B;
    type IntoIter = std::option::IntoIter<&'a B>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_right().into_iter()
    }
}

/// Split an iterator of `Either` values into lefts and rights, keeping order.
///
/// # Example
///
/// ```rust
/// use eddy::either::partition;
/// use eddy::Either;
///
/// let items = vec![Either::left(1), Either::right("a"), Either::left(2)];
/// let (lefts, rights) = partition(items);
/// assert_eq!(lefts, vec![1, 2]);
/// assert_eq!(rights, vec!["a"]);
/// ```
pub fn partition<A, B, I>(iter: I) -> (Vec<A>, Vec<B>)
where
    I: IntoIterator<Item = Either<A, B>>,
{
    let mut lefts = Vec::new();
    let mut rights = Vec::new();
    for item in iter {
        match item {
            Either::Left(a) => lefts.push(a),
            Either::Right(b) => rights.push(b),
        }
    }
    (lefts, rights)
}

/// Yield only the left values of an iterator of `Either`.
pub fn lefts<A, B, I>(iter: I) -> impl Iterator<Item = A>
where
    I: IntoIterator<Item = Either<A, B>>,
{
    iter.into_iter().filter_map(Either::into_left)
}

/// Yield only the right values of an iterator of `Either`.
pub fn rights<A, B, I>(iter: I) -> impl Iterator<Item = B>
where
    I: IntoIterator<Item = Either<A, B>>,
{
    iter.into_iter().filter_map(Either::into_right)
}
