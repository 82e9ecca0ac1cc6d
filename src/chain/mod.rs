//! Deferred async composition over [`Either`].
//!
//! An [`AsyncEither`] is "an `Either` that becomes available after zero or
//! more suspend points". Calling a combinator on it does not run anything:
//! the step is captured as a new node that owns the previous one. Only
//! [`AsyncEither::force`] (or the terminal [`AsyncEither::fold`]) walks the
//! chain, from the resolved `Either` at its root to the most recent step.
//!
//! # Short-circuiting
//!
//! A chain that is already known to be `Left` never captures more work:
//! `map`, `mapa`, `flatmap` and `flatmapa` drop their function and return a
//! passthrough node instead. Downstream functions therefore never see a
//! `Left` value, and async functions on the dead track are never polled.
//!
//! ```rust
//! use eddy::Either;
//!
//! async fn double(x: i32) -> i32 {
//!     x * 2
//! }
//!
//! async fn never(_: i32) -> Either<&'static str, i32> {
//!     unreachable!("never called on a Left")
//! }
//!
//! # tokio_test::block_on(async {
//! let chain = Either::<&str, i32>::left("2").mapa(double).flatmapa(never);
//!
//! assert!(chain.is_left());
//! assert_eq!(chain.force().await, Ok(Either::left("2")));
//! # });
//! ```
//!
//! # Static shape
//!
//! [`is_left`](AsyncEither::is_left) and [`is_right`](AsyncEither::is_right)
//! never suspend. Every node except the root answers from its kind alone; a
//! step node reports `Right` because it is only ever built on a chain that
//! was `Right` when the step was attached.
//!
//! # Ownership
//!
//! `force` consumes the chain: every captured function is `FnOnce`. Results
//! are not memoized, so evaluating the same pipeline twice means building it
//! twice and every step runs again.

use std::fmt;
use std::future::Future;

use futures::FutureExt;

use crate::either::Either;
use crate::error::EitherError;

use self::node::{Node, Pred};

/// Emit a tracing event when the `tracing` feature is enabled.
macro_rules! chain_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)+);
    };
}

mod force;
mod node;
#[cfg(feature = "tracing")]
mod tracing;

#[cfg(test)]
mod tests;

/// A deferred chain of steps over an `Either<A, _>`.
///
/// * `A` - the left type, fixed for the whole chain
/// * `B1` - the right type before the most recent step
/// * `B2` - the right type this chain resolves to
///
/// Chains are created from an [`Either`] with [`Either::into_async`],
/// [`Either::mapa`] or [`Either::flatmapa`], and extended with the
/// combinators below. There is no public constructor for intermediate nodes.
///
/// # Example
///
/// ```rust
/// use eddy::Either;
///
/// async fn lookup(id: u32) -> Either<String, &'static str> {
///     match id {
///         1 => Either::right("alice"),
///         _ => Either::left(format!("no user {}", id)),
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let greeting = Either::<String, u32>::right(1)
///     .flatmapa(lookup)
///     .map(|name| format!("hello, {}", name));
///
/// assert!(greeting.is_right());
/// assert_eq!(
///     greeting.force().await,
///     Ok(Either::right("hello, alice".to_string()))
/// );
/// # });
/// ```
pub struct AsyncEither<'a, A, B1, B2> {
    node: Node<'a, A, B1, B2>,
    certain: bool,
    depth: usize,
}

impl<A, B1, B2> fmt::Debug for AsyncEither<'_, A, B1, B2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncEither")
            .field("node", &self.node.kind())
            .field("is_left", &self.node.is_left())
            .field("depth", &self.depth)
            .finish()
    }
}

impl<'a, A, B> AsyncEither<'a, A, B, B>
where
    A: Send + 'a,
    B: Send + 'a,
{
    /// Root node over an already resolved value.
    pub(crate) fn base(value: Either<A, B>) -> Self {
        AsyncEither {
            node: Node::Base(value),
            certain: true,
            depth: 0,
        }
    }
}

impl<'a, A, B> From<Either<A, B>> for AsyncEither<'a, A, B, B>
where
    A: Send + 'a,
    B: Send + 'a,
{
    fn from(value: Either<A, B>) -> Self {
        AsyncEither::base(value)
    }
}

impl<'a, A, B1, B2> AsyncEither<'a, A, B1, B2>
where
    A: Send + 'a,
    B1: Send + 'a,
    B2: Send + 'a,
{
    /// Returns `true` if this chain is known to resolve to `Left`.
    ///
    /// Never suspends and never runs a step.
    pub fn is_left(&self) -> bool {
        self.node.is_left()
    }

    /// Returns `true` if this chain resolves to `Right` as far as can be told
    /// without forcing it.
    ///
    /// A `flatmap` step may still switch the value to `Left` when forced.
    pub fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// Number of steps attached since the root value.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn kind(&self) -> &'static str {
        self.node.kind()
    }

    /// Wrap `self` as the predecessor of a new node.
    fn step<B3>(
        self,
        certain: bool,
        build: impl FnOnce(Pred<'a, A, B2>) -> Node<'a, A, B2, B3>,
    ) -> AsyncEither<'a, A, B2, B3> {
        let depth = self.depth + 1;
        let inner: Pred<'a, A, B2> = Box::new(self);
        AsyncEither {
            node: build(inner),
            certain,
            depth,
        }
    }

    /// Re-type a known-`Left` chain without capturing any work.
    fn pass_left<B3>(self) -> AsyncEither<'a, A, B2, B3> {
        chain_event!(trace, depth = self.depth, "left track, step dropped");
        self.step(true, Node::LeftPassthrough)
    }

    /// Attach a synchronous transformation of the right value.
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
    /// let chain = Either::<&str, i32>::right(2).mapa(double).map(|x| x * 2);
    /// assert_eq!(chain.force().await, Ok(Either::right(8)));
    /// # });
    /// ```
    pub fn map<B3, F>(self, f: F) -> AsyncEither<'a, A, B2, B3>
    where
        B3: Send + 'a,
        F: FnOnce(B2) -> B3 + Send + 'a,
    {
        if self.is_left() {
            return self.pass_left();
        }
        let certain = self.certain;
        self.step(certain, |inner| Node::RightMap(inner, Box::new(f)))
    }

    /// Attach an async transformation of the right value.
    pub fn mapa<B3, F, Fut>(self, f: F) -> AsyncEither<'a, A, B2, B3>
    where
        B3: Send + 'a,
        F: FnOnce(B2) -> Fut + Send + 'a,
        Fut: Future<Output = B3> + Send + 'a,
    {
        if self.is_left() {
            return self.pass_left();
        }
        let certain = self.certain;
        self.step(certain, |inner| {
            Node::RightMapAsync(inner, Box::new(move |value| f(value).boxed()))
        })
    }

    /// Attach a synchronous step that produces a new `Either`.
    ///
    /// The step may switch the chain to `Left`; later steps then pass the
    /// `Left` through when forced.
    pub fn flatmap<B3, F>(self, f: F) -> AsyncEither<'a, A, B2, B3>
    where
        B3: Send + 'a,
        F: FnOnce(B2) -> Either<A, B3> + Send + 'a,
    {
        if self.is_left() {
            return self.pass_left();
        }
        self.step(false, |inner| Node::RightFlatMap(inner, Box::new(f)))
    }

    /// Attach an async step that produces a new `Either`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eddy::Either;
    ///
    /// async fn check(x: i32) -> Either<&'static str, i32> {
    ///     if x > 4 {
    ///         Either::left("too big")
    ///     } else {
    ///         Either::right(x * 2)
    ///     }
    /// }
    ///
    /// # tokio_test::block_on(async {
    /// let small = Either::<&str, i32>::right(2).flatmapa(check).flatmapa(check);
    /// assert_eq!(small.force().await, Ok(Either::right(8)));
    ///
    /// let big = Either::<&str, i32>::right(3).flatmapa(check).flatmapa(check);
    /// assert_eq!(big.force().await, Ok(Either::left("too big")));
    /// # });
    /// ```
    pub fn flatmapa<B3, F, Fut>(self, f: F) -> AsyncEither<'a, A, B2, B3>
    where
        B3: Send + 'a,
        F: FnOnce(B2) -> Fut + Send + 'a,
        Fut: Future<Output = Either<A, B3>> + Send + 'a,
    {
        if self.is_left() {
            return self.pass_left();
        }
        self.step(false, |inner| {
            Node::RightFlatMapAsync(inner, Box::new(move |value| f(value).boxed()))
        })
    }

    /// Force the chain, then eliminate the result with one handler per
    /// variant.
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
    /// let ok = chain.fold(|_| false, |x| x == 8).await;
    /// assert_eq!(ok, Ok(true));
    /// # });
    /// ```
    pub async fn fold<C, F, G>(self, on_left: F, on_right: G) -> Result<C, EitherError>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B2) -> C,
    {
        Ok(self.force().await?.fold(on_left, on_right))
    }

    /// Force the chain and return the right value, or `default` on `Left`.
    pub async fn get_or_else(self, default: B2) -> Result<B2, EitherError> {
        Ok(self.force().await?.get_or_else(default))
    }

    /// Force the chain and return the right value, if any.
    pub async fn to_option(self) -> Result<Option<B2>, EitherError> {
        Ok(self.force().await?.to_option())
    }
}
