pub mod constants;
pub mod error;
pub mod exact_division;
pub mod full_math;
pub mod rounding;
pub mod wide_product;
