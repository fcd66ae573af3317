//! Multiplication kernels.
//!
//! This module contains:
//! - The power-of-two transform engine shared by the NTT and the FFT
//! - Floating-point FFT multiplication (real and arbitrary modulus)
//! - Schoolbook and Karatsuba multiplication over any ring
//! - Newton iteration for power-series inverses

pub mod fft;
pub mod karatsuba;
pub mod newton;
pub mod ntt;
