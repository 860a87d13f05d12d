//! Conversions between human readable decimal amounts and token base units.

use anchor_lang::prelude::*;
use fix::prelude::*;
use fix::typenum::Integer;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::CoreError::{DecimalConversion, InvalidArgument};

fn pow10(places: u32) -> Result<Decimal> {
  10u64
    .checked_pow(places)
    .map(Decimal::from)
    .ok_or(DecimalConversion.into())
}

/// Converts a UI amount into base units, `round(amount * 10^decimals)`.
/// Midpoints round away from zero.
pub fn scale(amount: Decimal, decimals: u8) -> Result<u64> {
  if amount.is_sign_negative() {
    return Err(InvalidArgument.into());
  }
  amount
    .checked_mul(pow10(u32::from(decimals))?)
    .map(|d| d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    .and_then(|d| d.to_u64())
    .ok_or(DecimalConversion.into())
}

/// Converts base units back into a UI amount.
pub fn to_human(amount: u64, decimals: u8) -> Result<Decimal> {
  Decimal::try_from_i128_with_scale(i128::from(amount), u32::from(decimals))
    .map_err(|_| DecimalConversion.into())
}

/// Converts a UI price (quote per base) into a fixed-point price of quote base
/// units per base base unit.
///
/// ```txt
/// price = human_price * 10^quote_decimals / 10^base_decimals
/// ```
pub fn amm_price<Exp: Integer>(
  human_price: Decimal,
  base_decimals: u8,
  quote_decimals: u8,
) -> Result<UFix128<Exp>> {
  if human_price.is_sign_negative() {
    return Err(InvalidArgument.into());
  }
  let places =
    u32::try_from(-Exp::to_i32()).map_err(|_| InvalidArgument)?;
  human_price
    .checked_mul(pow10(u32::from(quote_decimals))?)
    .and_then(|p| p.checked_mul(pow10(places).ok()?))
    .and_then(|p| p.checked_div(pow10(u32::from(base_decimals)).ok()?))
    .and_then(|p| p.trunc().to_u128())
    .map(UFix128::new)
    .ok_or(DecimalConversion.into())
}

/// Inverse of [`amm_price`], truncated to the decimal's precision.
pub fn human_price<Exp: Integer>(
  price: UFix128<Exp>,
  base_decimals: u8,
  quote_decimals: u8,
) -> Result<Decimal> {
  let places =
    u32::try_from(-Exp::to_i32()).map_err(|_| InvalidArgument)?;
  i128::try_from(price.bits)
    .ok()
    .and_then(|bits| Decimal::try_from_i128_with_scale(bits, places).ok())
    .and_then(|p| p.checked_mul(pow10(u32::from(base_decimals)).ok()?))
    .and_then(|p| p.checked_div(pow10(u32::from(quote_decimals)).ok()?))
    .map(|p| p.normalize())
    .ok_or(DecimalConversion.into())
}
