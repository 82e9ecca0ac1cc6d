//! The closed set of deferred chain nodes.

use futures::future::BoxFuture;

use crate::either::Either;
use crate::error::EitherError;

/// Result of forcing a chain.
pub(crate) type Forced<A, B> = Result<Either<A, B>, EitherError>;

/// A predecessor node with its own input type erased.
///
/// Every chain node is an `AsyncEither<'a, A, B0, B>` for some `B0` the
/// successor has no business knowing, so predecessors are held behind this
/// trait object.
pub(crate) type Pred<'a, A, B> = Box<dyn Forcible<'a, A, B> + 'a>;

/// Sync transformation held by a `RightMap` node.
pub(crate) type MapFn<'a, B1, B2> = Box<dyn FnOnce(B1) -> B2 + Send + 'a>;

/// Async transformation held by a `RightMapAsync` node.
pub(crate) type MapAsyncFn<'a, B1, B2> = Box<dyn FnOnce(B1) -> BoxFuture<'a, B2> + Send + 'a>;

/// Sync step held by a `RightFlatMap` node.
pub(crate) type FlatMapFn<'a, A, B1, B2> = Box<dyn FnOnce(B1) -> Either<A, B2> + Send + 'a>;

/// Async step held by a `RightFlatMapAsync` node.
pub(crate) type FlatMapAsyncFn<'a, A, B1, B2> =
    Box<dyn FnOnce(B1) -> BoxFuture<'a, Either<A, B2>> + Send + 'a>;

/// What a successor needs to know about its predecessor.
///
/// Implemented by `AsyncEither`; sealed inside the crate so that no caller
/// can hand a chain a predecessor that lies about its shape.
pub(crate) trait Forcible<'a, A, B>: Send {
    /// Whether the node's static shape is guaranteed to match what forcing
    /// produces.
    ///
    /// False once any step in the chain may have switched `Right` to `Left`.
    fn is_certain(&self) -> bool;

    /// Force this node and everything before it.
    fn force_boxed(self: Box<Self>) -> BoxFuture<'a, Forced<A, B>>;
}

/// One node of a deferred chain.
///
/// `B1` is the right type of the predecessor, `B2` the right type this node
/// resolves to. A `Base` node has no predecessor and `B1 == B2`.
pub(crate) enum Node<'a, A, B1, B2> {
    /// An already resolved value.
    Base(Either<A, B2>),
    /// A predecessor known to be `Left`, carried through unchanged.
    LeftPassthrough(Pred<'a, A, B1>),
    RightMap(Pred<'a, A, B1>, MapFn<'a, B1, B2>),
    RightMapAsync(Pred<'a, A, B1>, MapAsyncFn<'a, B1, B2>),
    RightFlatMap(Pred<'a, A, B1>, FlatMapFn<'a, A, B1, B2>),
    RightFlatMapAsync(Pred<'a, A, B1>, FlatMapAsyncFn<'a, A, B1, B2>),
}

impl<A, B1, B2> Node<'_, A, B1, B2> {
    /// Node kind name, for `Debug` output and trace events.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Node::Base(_) => "Base",
            Node::LeftPassthrough(_) => "LeftPassthrough",
            Node::RightMap(..) => "RightMap",
            Node::RightMapAsync(..) => "RightMapAsync",
            Node::RightFlatMap(..) => "RightFlatMap",
            Node::RightFlatMapAsync(..) => "RightFlatMapAsync",
        }
    }

    /// Static shape of the node: only `Base` has to look at its value.
    pub(crate) fn is_left(&self) -> bool {
        match self {
            Node::Base(value) => value.is_left(),
            Node::LeftPassthrough(_) => true,
            Node::RightMap(..)
            | Node::RightMapAsync(..)
            | Node::RightFlatMap(..)
            | Node::RightFlatMapAsync(..) => false,
        }
    }
}
