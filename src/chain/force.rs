//! Forcing: the single evaluation entry point of a chain.
//!
//! Forcing is a recursive walk. Each node forces its predecessor to
//! completion first, including every suspension the predecessor performs,
//! and only then applies its own step. No two steps of one chain ever run
//! concurrently, and suspension only happens at `RightMapAsync` and
//! `RightFlatMapAsync` nodes whose predecessor resolved to `Right`.

use futures::future::BoxFuture;
use futures::FutureExt;

use super::node::{Forced, Forcible, Node};
use super::AsyncEither;
use crate::either::Either;
use crate::error::EitherError;

const ASYNC_RIGHT_MUST_BE_RIGHT: &str = "AsyncRight must be right";

impl<'a, A, B1, B2> AsyncEither<'a, A, B1, B2>
where
    A: Send + 'a,
    B1: Send + 'a,
    B2: Send + 'a,
{
    /// Run every pending step and return the resolved `Either`.
    ///
    /// This is the only place work happens. A `Left` produced anywhere in
    /// the chain is carried to the end without calling any later step.
    ///
    /// # Errors
    ///
    /// Returns an [`EitherError`] only if the chain's static shape disagrees
    /// with what its steps produced. Chains built through the public
    /// combinators never do.
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
    pub async fn force(self) -> Result<Either<A, B2>, EitherError> {
        chain_event!(trace, node = self.node.kind(), depth = self.depth, "forcing node");

        match self.node {
            Node::Base(value) => Ok(value),
            Node::LeftPassthrough(inner) => {
                let left = inner.force_boxed().await?.try_left()?;
                Ok(Either::Left(left))
            }
            Node::RightMap(inner, f) => Ok(inner.force_boxed().await?.map(f)),
            Node::RightMapAsync(inner, f) => {
                let certain = inner.is_certain();
                match inner.force_boxed().await? {
                    Either::Left(_) if certain => Err(invariant_violation()),
                    Either::Left(left) => Ok(Either::Left(left)),
                    Either::Right(value) => Ok(Either::Right(f(value).await)),
                }
            }
            Node::RightFlatMap(inner, f) => Ok(inner.force_boxed().await?.flatmap(f)),
            Node::RightFlatMapAsync(inner, f) => {
                let certain = inner.is_certain();
                match inner.force_boxed().await? {
                    Either::Left(_) if certain => Err(invariant_violation()),
                    Either::Left(left) => Ok(Either::Left(left)),
                    Either::Right(value) => Ok(f(value).await),
                }
            }
        }
    }
}

fn invariant_violation() -> EitherError {
    chain_event!(error, "{}", ASYNC_RIGHT_MUST_BE_RIGHT);
    EitherError::invariant(ASYNC_RIGHT_MUST_BE_RIGHT)
}

impl<'a, A, B1, B2> Forcible<'a, A, B2> for AsyncEither<'a, A, B1, B2>
where
    A: Send + 'a,
    B1: Send + 'a,
    B2: Send + 'a,
{
    fn is_certain(&self) -> bool {
        self.certain
    }

    fn force_boxed(self: Box<Self>) -> BoxFuture<'a, Forced<A, B2>> {
        (*self).force().boxed()
    }
}
