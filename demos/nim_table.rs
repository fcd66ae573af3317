//! Prints the nim-multiplication table of the field with 16 elements and a
//! few products in the full 64-bit field.
//!
//! Run with `RUST_LOG=debug cargo run --example nim_table`.

use anyhow::{ensure, Result};
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

use vellum::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("nim-products of 0..16 (a subfield of order 16)");
    for x in 0..16u64 {
        let row: Vec<String> = (0..16u64).map(|y| format!("{:>2}", nim_mul(x, y))).collect();
        println!("{}", row.join(" "));
    }

    for (x, y) in [(2u64, 2u64), (8, 8), (1 << 32, 1 << 32), (u64::MAX, u64::MAX)] {
        let p = Nimber(x) * Nimber(y);
        info!(x, y, product = p.value(), "nim-product");
    }

    let a = Nimber(0x0123_4567_89ab_cdef);
    let inv = a.inv().ok_or_else(|| anyhow::anyhow!("{a} has no inverse"))?;
    debug!(%a, %inv, "inverse");
    ensure!(a * inv == Nimber::one(), "inverse check failed");
    info!("{a} * {inv} = *1");

    Ok(())
}
