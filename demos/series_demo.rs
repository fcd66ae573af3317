//! Computes a few classic generating functions with the power-series
//! kernels and checks them against known values.
//!
//! Run with `RUST_LOG=trace cargo run --example series_demo` to see the
//! Newton steps.

use anyhow::{ensure, Result};
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

use vellum::prelude::*;

type F = Mod998244353;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let n = 16;

    // Bell numbers: Σ B_k x^k / k! = exp(e^x - 1).
    let facts = Factorials::<F>::new(n)?;
    let e_minus_one = PowerSeries::from_coeffs(
        (0..n).map(|k| if k == 0 { F::new(0) } else { facts.inv_factorial(k) }).collect(),
    );
    let egf = e_minus_one.exp()?;
    let bell: Vec<u64> = (0..n).map(|k| (egf.coeff(k) * facts.factorial(k)).value()).collect();
    info!(?bell, "Bell numbers");
    ensure!(bell[..6] == [1, 1, 2, 5, 15, 52], "unexpected Bell numbers");

    // Catalan numbers: iterate C <- 1 + x C^2, one more correct term per pass.
    let mut c = PowerSeries::one(n);
    for _ in 0..n {
        let c2 = &c * &c;
        let mut next = vec![F::new(1)];
        next.extend(c2.coeffs()[..n - 1].iter().copied());
        c = PowerSeries::from_coeffs(next);
    }
    let catalan: Vec<u64> = c.coeffs().iter().map(|v| v.value()).collect();
    info!(?catalan, "Catalan numbers");
    ensure!(catalan[..6] == [1, 1, 2, 5, 14, 42], "unexpected Catalan numbers");

    // Partitions: Π 1/(1 - x^k) = exp(Σ σ(m) x^m / m).
    let mut sigma = vec![F::new(0); n];
    for k in 1..n {
        for m in (k..n).step_by(k) {
            sigma[m] += F::new(k as u64);
        }
    }
    let inv = vellum::series::inverse_table::<F>(n)?;
    let log_p = PowerSeries::from_coeffs(sigma.iter().zip(&inv).map(|(&s, &i)| s * i).collect());
    let partitions: Vec<u64> = log_p.exp()?.coeffs().iter().map(|v| v.value()).collect();
    info!(?partitions, "partition numbers");
    ensure!(partitions[..8] == [1, 1, 2, 3, 5, 7, 11, 15], "unexpected partition numbers");

    // Multipoint: evaluate x^3 + 1 at 0..8 and interpolate it back.
    let p = DensePoly::new(vec![F::new(1), F::new(0), F::new(0), F::new(1)]);
    let xs: Vec<F> = (0..8).map(F::new).collect();
    let ys = evaluate(&p, &xs);
    ensure!(interpolate(&xs, &ys)? == p, "interpolation did not recover the polynomial");
    info!(%p, "interpolated");

    Ok(())
}
