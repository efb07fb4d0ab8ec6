//! Full precision `a * b / denominator` over fixed width unsigned integers.
//!
//! The product is kept exact in two words even when it does not fit in one
//! ("phantom overflow"), and the division by the denominator is exact, done by
//! multiplying with a modular inverse. Only the final quotient has to fit.

pub mod math;

pub use math::{
    constants::{Q128, Q96},
    error::FullMathError,
    exact_division::{div_wide, inv_mod_pow2},
    full_math::{mul_div, mul_div_rounding_up, mul_div_with, FullMath},
    rounding::{div_rounding_up, Rounding},
    wide_product::{wide_mul, WideProduct},
};
