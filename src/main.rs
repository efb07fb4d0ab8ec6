use alloy::primitives::U256;
use clap::{Parser, ValueEnum};
use eyre::{Result, WrapErr};
use full_math::{mul_div_with, wide_mul, Rounding};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Calculates a×b÷denominator over 256-bit unsigned integers with a full
/// 512-bit intermediate product.
#[derive(Parser)]
#[clap(version)]
struct Arguments {
    /// Tracing filter, e.g. `debug` or `full_math=trace`.
    #[clap(long, env, default_value = "warn")]
    log_filter: String,

    #[clap(long, value_enum, default_value = "down")]
    rounding: RoundingArg,

    /// The multiplicand: decimal, 0x-prefixed hex, or 2^K.
    #[clap(value_parser = parse_u256)]
    a: U256,

    /// The multiplier.
    #[clap(value_parser = parse_u256)]
    b: U256,

    /// The divisor.
    #[clap(value_parser = parse_u256)]
    denominator: U256,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RoundingArg {
    Down,
    Up,
}

impl From<RoundingArg> for Rounding {
    fn from(value: RoundingArg) -> Self {
        match value {
            RoundingArg::Down => Rounding::Down,
            RoundingArg::Up => Rounding::Up,
        }
    }
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    initialize_tracing(&args.log_filter);

    let rounding = Rounding::from(args.rounding);
    tracing::debug!(a = %args.a, b = %args.b, denominator = %args.denominator, ?rounding, "evaluating");

    let product = wide_mul(args.a, args.b);
    tracing::debug!(high = %product.high, low = %product.low, "wide product");

    let result = match mul_div_with(args.a, args.b, args.denominator, rounding) {
        Ok(result) => result,
        Err(err) => {
            tracing::error!(%err, "mul div failed");
            return Err(err).wrap_err_with(|| {
                format!(
                    "{} × {} ÷ {} rounding {rounding:?}",
                    args.a, args.b, args.denominator
                )
            });
        }
    };

    println!("{result}");
    Ok(())
}

/// Logs go to stderr so stdout only carries the result.
fn initialize_tracing(env_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .init();
}

fn parse_u256(value: &str) -> Result<U256, String> {
    let value = value.trim();
    match value.split_once('^') {
        Some(("2", exponent)) => {
            let exponent: usize = exponent.trim().parse().map_err(|e| format!("{e}"))?;
            if exponent >= 256 {
                return Err(format!("2^{exponent} does not fit in 256 bits"));
            }
            Ok(U256::from(1u64) << exponent)
        }
        Some(_) => Err(format!("only powers of two can be written with ^, got {value}")),
        None => U256::from_str(value).map_err(|e| e.to_string()),
    }
}
