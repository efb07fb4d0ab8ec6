use thiserror::Error;

/// Reasons a full precision multiply-then-divide can fail.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FullMathError {
    #[error("denominator is zero")]
    DivisionByZero,
    /// The exact result, before or after rounding, needs more bits than the operands have.
    #[error("result overflows the integer width")]
    ResultOverflow,
}
