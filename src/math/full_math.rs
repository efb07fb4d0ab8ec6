use alloy::primitives::{Uint, U256};

use super::{
    error::FullMathError,
    exact_division::divide,
    rounding::Rounding,
    wide_product::wide_mul,
};

/// Full precision multiply-then-divide for [`Uint`] types of any width.
pub trait FullMath: Sized {
    /// floor(self * b / denominator)
    fn mul_div(self, b: Self, denominator: Self) -> Result<Self, FullMathError>;

    /// ceil(self * b / denominator)
    fn mul_div_rounding_up(self, b: Self, denominator: Self) -> Result<Self, FullMathError>;

    fn mul_div_with(
        self,
        b: Self,
        denominator: Self,
        rounding: Rounding,
    ) -> Result<Self, FullMathError>;
}

impl<const BITS: usize, const LIMBS: usize> FullMath for Uint<BITS, LIMBS> {
    #[inline]
    fn mul_div(self, b: Self, denominator: Self) -> Result<Self, FullMathError> {
        self.mul_div_with(b, denominator, Rounding::Down)
    }

    #[inline]
    fn mul_div_rounding_up(self, b: Self, denominator: Self) -> Result<Self, FullMathError> {
        self.mul_div_with(b, denominator, Rounding::Up)
    }

    fn mul_div_with(
        self,
        b: Self,
        denominator: Self,
        rounding: Rounding,
    ) -> Result<Self, FullMathError> {
        // mul_mod reports zero for a zero modulus, so reject it up front
        if denominator.is_zero() {
            return Err(FullMathError::DivisionByZero);
        }

        let remainder = self.mul_mod(b, denominator);
        let quotient = divide(wide_mul(self, b), remainder, denominator)?;

        rounding.apply(quotient, remainder)
    }
}

/// @notice Calculates floor(a×b÷denominator) with full precision. Throws if result overflows a uint256 or denominator == 0
/// @param a The multiplicand
/// @param b The multiplier
/// @param denominator The divisor
/// @return result The 256-bit result
/// @dev Credit to Remco Bloemen under MIT license https://xn--2-umb.com/21/muldiv
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, FullMathError> {
    FullMath::mul_div(a, b, denominator)
}

/// @notice Calculates ceil(a×b÷denominator) with full precision. Throws if result overflows a uint256 or denominator == 0
/// @param a The multiplicand
/// @param b The multiplier
/// @param denominator The divisor
/// @return result The 256-bit result
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> Result<U256, FullMathError> {
    FullMath::mul_div_rounding_up(a, b, denominator)
}

/// Like [`mul_div`] and [`mul_div_rounding_up`], with the direction picked at runtime.
pub fn mul_div_with(
    a: U256,
    b: U256,
    denominator: U256,
    rounding: Rounding,
) -> Result<U256, FullMathError> {
    FullMath::mul_div_with(a, b, denominator, rounding)
}
