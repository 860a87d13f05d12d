use anchor_lang::prelude::*;
use fix::prelude::*;
use fix::typenum::{Integer, N12, N2};

use crate::amm_state::ReservePair;
use crate::error::CoreError::{
  ArithmeticOverflow, DivisionByZero, InvalidArgument,
};
use crate::util::mul_div_floor;

/// Price at the scale the client has always read pools with (x100).
pub type ClientPrice = UFix128<N2>;

/// Price at the on-chain oracle's 10^12 scale.
pub type ScaledPrice = UFix128<N12>;

/// Single sample of the pool's instantaneous price in quote base units per
/// base base unit. The exponent picks the scale.
///
/// Backed by `u128` so any pair of `u64` reserves has a price at scales up to
/// 10^19.
///
/// ```txt
/// price = quote_reserves * 10^-Exp / base_reserves
/// ```
pub fn compute_twap<Exp: Integer>(
  reserves: ReservePair,
) -> Result<UFix128<Exp>> {
  if reserves.base_reserves == 0 {
    return Err(DivisionByZero.into());
  }
  reserves.validate()?;
  mul_div_floor(
    u128::from(reserves.quote_reserves),
    price_scale::<Exp>()?,
    u128::from(reserves.base_reserves),
  )
  .map(UFix128::new)
}

/// `10^-Exp`, only defined for fractional exponents.
fn price_scale<Exp: Integer>() -> Result<u128> {
  let places = u32::try_from(-Exp::to_i32()).map_err(|_| InvalidArgument)?;
  10u128.checked_pow(places).ok_or(ArithmeticOverflow.into())
}
