//! Pipeline Example
//!
//! Demonstrates building a deferred chain of sync and async steps over an
//! `Either`, and how a `Left` short-circuits the rest of the chain.
//!
//! Run with `cargo run --example pipeline --features tracing`.

use std::time::Duration;

use eddy::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Order {
    sku: &'static str,
    quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
enum Rejected {
    UnknownSku(&'static str),
    OutOfStock { sku: &'static str, available: u32 },
}

fn parse(line: &'static str) -> Either<Rejected, Order> {
    let mut parts = line.split(':');
    match (parts.next(), parts.next().and_then(|q| q.parse::<u32>().ok())) {
        (Some(sku), Some(quantity)) => Either::right(Order { sku, quantity }),
        _ => Either::left(Rejected::UnknownSku(line)),
    }
}

async fn check_stock(order: Order) -> Either<Rejected, Order> {
    tokio::time::sleep(Duration::from_millis(5)).await;
    let available = match order.sku {
        "apple" => 10,
        "pear" => 1,
        other => return Either::left(Rejected::UnknownSku(other)),
    };
    if order.quantity > available {
        Either::left(Rejected::OutOfStock {
            sku: order.sku,
            available,
        })
    } else {
        Either::right(order)
    }
}

async fn price(order: Order) -> u32 {
    tokio::time::sleep(Duration::from_millis(5)).await;
    order.quantity * 3
}

async fn process(line: &'static str) -> Result<String, EitherError> {
    let chain = parse(line)
        .flatmapa(check_stock)
        .mapa(price)
        .map(|cents| format!("total {} cents", cents));

    println!("  built {:?}", chain);

    chain
        .fold(|rejected| format!("rejected: {:?}", rejected), |ok| ok)
        .await
}

#[tokio::main]
async fn main() -> Result<(), EitherError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("\n=== Pipeline ===");
    for line in ["apple:4", "pear:2", "plum:1", "garbage"] {
        println!("{}", line);
        println!("  {}", process(line).await?);
    }

    println!("\n=== Left track captures no work ===");
    let dead = Either::<&str, i32>::left("stopped early")
        .mapa(|x| async move { x * 2 })
        .map(|x| x + 1);
    println!("  {:?}", dead);
    println!("  forced: {:?}", dead.force().await?);

    Ok(())
}
