//! Tracing support for async chains.
//!
//! With the `tracing` feature enabled, forcing emits a `trace` event per node
//! and an `error` event when a chain's shape is found to be inconsistent.
//! [`AsyncEither::instrument`] additionally runs the whole evaluation inside
//! a caller-provided span.

use tracing::Instrument as _;

use super::AsyncEither;
use crate::either::Either;
use crate::error::EitherError;

impl<'a, A, B1, B2> AsyncEither<'a, A, B1, B2>
where
    A: Send + 'a,
    B1: Send + 'a,
    B2: Send + 'a,
{
    /// Force the chain inside `span`.
    ///
    /// The span is entered every time the evaluation is polled and exited
    /// when it yields, following the `tracing::Instrument` pattern for async
    /// code.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use eddy::Either;
    /// use tracing::info_span;
    ///
    /// let order = Either::<String, u64>::right(order_id)
    ///     .flatmapa(fetch_order)
    ///     .mapa(price_order)
    ///     .instrument(info_span!("checkout", order_id))
    ///     .await?;
    /// ```
    pub async fn instrument(self, span: tracing::Span) -> Result<Either<A, B2>, EitherError> {
        self.force().instrument(span).await
    }
}
