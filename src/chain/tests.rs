//! Tests for chain construction and forcing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures::FutureExt;

use super::node::Node;
use super::AsyncEither;
use crate::either::Either;
use crate::error::{EitherError, Side};

async fn double(x: i32) -> i32 {
    tokio::task::yield_now().await;
    x * 2
}

async fn double_or_stop(x: i32) -> Either<&'static str, i32> {
    tokio::task::yield_now().await;
    if x == 8 {
        Either::left("2")
    } else {
        Either::right(x * 2)
    }
}

fn counting(counter: &Arc<AtomicUsize>) -> impl Fn(i32) -> i32 + Send + Sync + 'static {
    let counter = Arc::clone(counter);
    move |x| {
        counter.fetch_add(1, Ordering::SeqCst);
        x
    }
}

// Node shape tests
#[test]
fn test_into_async_is_base() {
    let right = Either::<&str, i32>::right(2).into_async();
    let left = Either::<&str, i32>::left("2").into_async();

    assert_eq!(right.kind(), "Base");
    assert!(right.is_right());
    assert!(!right.is_left());
    assert_eq!(left.kind(), "Base");
    assert!(left.is_left());
    assert!(!left.is_right());
    assert_eq!(right.depth(), 0);
}

#[test]
fn test_right_steps_build_matching_kinds() {
    let r = || Either::<&str, i32>::right(2);

    assert_eq!(r().into_async().map(|x| x).kind(), "RightMap");
    assert_eq!(r().mapa(double).kind(), "RightMapAsync");
    assert_eq!(r().into_async().flatmap(Either::right).kind(), "RightFlatMap");
    assert_eq!(r().flatmapa(double_or_stop).kind(), "RightFlatMapAsync");
}

#[test]
fn test_left_steps_build_passthrough() {
    let l = || Either::<&str, i32>::left("2");

    assert_eq!(l().mapa(double).kind(), "LeftPassthrough");
    assert_eq!(l().flatmapa(double_or_stop).kind(), "LeftPassthrough");
    assert_eq!(l().mapa(double).map(|x| x).kind(), "LeftPassthrough");
    assert_eq!(l().mapa(double).flatmap(Either::right).kind(), "LeftPassthrough");
    assert!(l().mapa(double).mapa(double).is_left());
}

#[test]
fn test_depth_counts_steps() {
    let chain = Either::<&str, i32>::right(2)
        .mapa(double)
        .map(|x| x + 1)
        .flatmapa(double_or_stop);
    assert_eq!(chain.depth(), 3);
}

#[test]
fn test_shape_known_without_forcing() {
    async fn explode(_: i32) -> i32 {
        panic!("forced while asking for shape")
    }

    async fn explode_either(_: i32) -> Either<&'static str, i32> {
        panic!("forced while asking for shape")
    }

    let chain = Either::<&str, i32>::right(2)
        .mapa(explode)
        .flatmapa(explode_either);

    assert!(chain.is_right());
    assert!(!chain.is_left());
}

#[test]
fn test_debug_names_node() {
    let chain = Either::<&str, i32>::left("2").mapa(double);
    let debug = format!("{:?}", chain);

    assert!(debug.contains("LeftPassthrough"));
    assert!(debug.contains("is_left: true"));
}

// Deferral tests
#[tokio::test]
async fn test_construction_runs_nothing() {
    let counter = Arc::new(AtomicUsize::new(0));
    let f = counting(&counter);
    let g = counting(&counter);

    let chain = Either::<&str, i32>::right(1)
        .into_async()
        .map(f)
        .flatmap(move |x| Either::right(g(x)));
    assert_eq!(counter.load(Ordering::SeqCst), 0);

    assert_eq!(chain.force().await, Ok(Either::right(1)));
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_rebuilt_chain_runs_again() {
    let counter = Arc::new(AtomicUsize::new(0));
    let build = || {
        let f = counting(&counter);
        Either::<&str, i32>::right(3).mapa(move |x| async move { f(x) })
    };

    assert_eq!(build().force().await, Ok(Either::right(3)));
    assert_eq!(build().force().await, Ok(Either::right(3)));
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_steps_run_in_chain_order() {
    let log = Arc::new(Mutex::new(Vec::new()));

    let step = |name: &'static str| {
        let log = Arc::clone(&log);
        move |x: i32| async move {
            log.lock().unwrap().push(format!("{} start", name));
            tokio::task::yield_now().await;
            log.lock().unwrap().push(format!("{} end", name));
            x + 1
        }
    };

    let chain = Either::<&str, i32>::right(0)
        .mapa(step("first"))
        .mapa(step("second"))
        .flatmapa({
            let log = Arc::clone(&log);
            move |x| async move {
                log.lock().unwrap().push("third".to_string());
                Either::right(x + 1)
            }
        });

    assert_eq!(chain.force().await, Ok(Either::right(3)));
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "first start".to_string(),
            "first end".to_string(),
            "second start".to_string(),
            "second end".to_string(),
            "third".to_string(),
        ]
    );
}

// Short-circuit tests
#[tokio::test]
async fn test_left_never_invokes_steps() {
    let counter = Arc::new(AtomicUsize::new(0));
    let (a, b, c) = (
        counting(&counter),
        counting(&counter),
        counting(&counter),
    );

    let chain = Either::<&str, i32>::left("2")
        .mapa(move |x| async move { a(x) })
        .map(b)
        .flatmapa(move |x| async move { Either::right(c(x)) });

    assert_eq!(chain.force().await, Ok(Either::left("2")));
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_flatmap_switch_to_left_passes_through_async_steps() {
    let chain = Either::<&str, i32>::right(2)
        .into_async()
        .flatmap(|_| Either::<&str, i32>::left("b"))
        .mapa(double)
        .flatmapa(double_or_stop);

    // The flatmap step may switch tracks, so the chain still reports Right.
    assert!(chain.is_right());
    assert_eq!(chain.force().await, Ok(Either::left("b")));
}

#[tokio::test]
async fn test_flatmapa_switch_to_left_stops_later_steps() {
    let counter = Arc::new(AtomicUsize::new(0));
    let f = counting(&counter);

    let chain = Either::<&str, i32>::right(2)
        .mapa(double)
        .mapa(double)
        .flatmapa(double_or_stop)
        .map(f);

    assert_eq!(chain.force().await, Ok(Either::left("2")));
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

// Terminal operations
#[tokio::test]
async fn test_fold_forces_chain() {
    let fa = |_: &str| false;
    let fb = |_: i32| true;

    let r = || Either::<&str, i32>::right(2);
    let l = || Either::<&str, i32>::left("2");

    assert_eq!(
        r().mapa(double).mapa(double).mapa(double).mapa(double).fold(fa, fb).await,
        Ok(true)
    );
    assert_eq!(
        l().mapa(double).mapa(double).mapa(double).mapa(double).fold(fa, fb).await,
        Ok(false)
    );
    assert_eq!(
        r().mapa(double).mapa(double).flatmapa(double_or_stop).fold(fa, fb).await,
        Ok(false)
    );
    assert_eq!(
        r().mapa(double)
            .mapa(double)
            .mapa(double)
            .flatmapa(double_or_stop)
            .fold(fa, fb)
            .await,
        Ok(true)
    );
    assert_eq!(l().flatmapa(double_or_stop).fold(fa, fb).await, Ok(false));
}

#[tokio::test]
async fn test_get_or_else_and_to_option() {
    let r = Either::<&str, i32>::right(2).mapa(double);
    let l = Either::<&str, i32>::left("2").mapa(double);

    assert_eq!(r.get_or_else(0).await, Ok(4));
    assert_eq!(l.get_or_else(0).await, Ok(0));

    assert_eq!(
        Either::<&str, i32>::right(2).mapa(double).to_option().await,
        Ok(Some(4))
    );
    assert_eq!(
        Either::<&str, i32>::left("2").mapa(double).to_option().await,
        Ok(None)
    );
}

#[tokio::test]
async fn test_from_either() {
    let chain: AsyncEither<'_, &str, i32, i32> = Either::right(5).into();
    assert_eq!(chain.map(|x| x + 1).force().await, Ok(Either::right(6)));
}

#[tokio::test]
async fn test_borrowing_steps() {
    let suffix = String::from("!");
    let suffix_ref = &suffix;

    let chain = Either::<&str, String>::right("hi".to_string())
        .mapa(move |s| async move { format!("{}{}", s, suffix_ref) })
        .map(|s| format!("{}{}", s, suffix));

    assert_eq!(chain.force().await, Ok(Either::right("hi!!".to_string())));
}

// Defect detection
#[tokio::test]
async fn test_async_right_over_certain_left_is_invariant_violation() {
    let base = AsyncEither::base(Either::<&str, i32>::left("x"));
    let broken: AsyncEither<'_, &str, i32, i32> = AsyncEither {
        node: Node::RightMapAsync(Box::new(base), Box::new(|x: i32| async move { x }.boxed())),
        certain: true,
        depth: 1,
    };

    assert!(broken.is_right());
    assert_eq!(
        broken.force().await,
        Err(EitherError::invariant("AsyncRight must be right"))
    );
}

#[tokio::test]
async fn test_async_flatmap_over_certain_left_is_invariant_violation() {
    let base = AsyncEither::base(Either::<&str, i32>::left("x"));
    let broken: AsyncEither<'_, &str, i32, i32> = AsyncEither {
        node: Node::RightFlatMapAsync(
            Box::new(base),
            Box::new(|x: i32| async move { Either::right(x) }.boxed()),
        ),
        certain: false,
        depth: 1,
    };

    let err = broken.force().await.unwrap_err();
    assert!(err.is_invariant_violation());
}

#[tokio::test]
async fn test_left_passthrough_over_right_is_wrong_variant() {
    let base = AsyncEither::base(Either::<&str, i32>::right(1));
    let broken: AsyncEither<'_, &str, i32, String> = AsyncEither {
        node: Node::LeftPassthrough(Box::new(base)),
        certain: true,
        depth: 1,
    };

    assert!(broken.is_left());
    assert_eq!(
        broken.force().await,
        Err(EitherError::wrong_variant(Side::Left))
    );
}

#[tokio::test]
async fn test_errors_propagate_through_later_steps() {
    let counter = Arc::new(AtomicUsize::new(0));
    let f = counting(&counter);

    let base = AsyncEither::base(Either::<&str, i32>::left("x"));
    let broken: AsyncEither<'_, &str, i32, i32> = AsyncEither {
        node: Node::RightMapAsync(Box::new(base), Box::new(|x: i32| async move { x }.boxed())),
        certain: true,
        depth: 1,
    };
    let chain = broken.map(f).mapa(double);

    assert_eq!(
        chain.fold(|_| 0, |x| x).await,
        Err(EitherError::invariant("AsyncRight must be right"))
    );
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}
