//! # Eddy
//!
//! > *A value that runs down one of two tracks, and a chain that waits to run.*
//!
//! A right-biased [`Either`] and a deferred async counterpart,
//! [`AsyncEither`], for composing steps that may short-circuit.
//!
//! ## Philosophy
//!
//! - **Right** is the continuing track; every combinator works on it.
//! - **Left** is the alternate track. Once a value is `Left`, no later step
//!   runs and no later async function is ever polled.
//! - **Nothing runs early.** Async steps are captured, not executed, until
//!   the chain is forced.
//!
//! ## Quick Example
//!
//! ```rust
//! use eddy::Either;
//!
//! async fn fetch_stock(sku: &'static str) -> Either<String, u32> {
//!     match sku {
//!         "apple" => Either::right(3),
//!         _ => Either::left(format!("unknown sku {}", sku)),
//!     }
//! }
//!
//! async fn reserve(count: u32) -> u32 {
//!     count - 1
//! }
//!
//! # tokio_test::block_on(async {
//! let order = Either::<String, &str>::right("apple")
//!     .flatmapa(fetch_stock)
//!     .mapa(reserve)
//!     .map(|left| format!("{} left", left));
//!
//! // Nothing has run yet.
//! assert!(order.is_right());
//!
//! assert_eq!(order.force().await, Ok(Either::right("2 left".to_string())));
//! # });
//! ```
//!
//! ## Cargo features
//!
//! - `tracing`: trace events while forcing, plus [`AsyncEither::instrument`].
//! - `serde`: `Serialize` / `Deserialize` for [`Either`] and [`Side`].
//! - `proptest`: an `Arbitrary` implementation for [`Either`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod chain;
pub mod either;
pub mod error;
pub mod testing;

// Re-exports
pub use chain::AsyncEither;
pub use either::Either;
pub use error::{EitherError, Side};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::chain::AsyncEither;
    pub use crate::either::Either;
    pub use crate::error::{EitherError, Side};
}
