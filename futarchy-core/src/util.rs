use anchor_lang::prelude::*;

use crate::error::CoreError::{
  ArithmeticOverflow, CastingOverflow, DivisionByZero,
};

/// `a * b / c` in `u128`, floored.
pub fn mul_div_floor(a: u128, b: u128, c: u128) -> Result<u128> {
  if c == 0 {
    return Err(DivisionByZero.into());
  }
  a.checked_mul(b)
    .map(|product| product / c)
    .ok_or(ArithmeticOverflow.into())
}

/// Narrows a wide intermediate back to a token amount.
pub fn to_amount(value: u128) -> Result<u64> {
  u64::try_from(value).map_err(|_| CastingOverflow.into())
}

/// Serde adapter that writes a `Pubkey` as its base58 string.
pub mod serde_pubkey {
  use std::str::FromStr;

  use anchor_lang::prelude::Pubkey;
  use serde::de::Error;
  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S: Serializer>(
    key: &Pubkey,
    serializer: S,
  ) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(key)
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> std::result::Result<Pubkey, D::Error> {
    let encoded = String::deserialize(deserializer)?;
    Pubkey::from_str(&encoded).map_err(D::Error::custom)
  }
}

#[cfg(test)]
pub mod proptest {
  use proptest::prelude::*;

  use crate::amm_state::ReservePair;

  /// Pool with reserves in realistic ranges for 6 and 9 decimal mints.
  #[derive(Debug, Clone, Copy)]
  pub struct PoolState {
    pub reserves: ReservePair,
  }

  prop_compose! {
    pub fn pool_state(_: ())
      (base_reserves in reserve_amount(),
      quote_reserves in reserve_amount()) -> PoolState {
      PoolState {
        reserves: ReservePair::new(base_reserves, quote_reserves),
      }
    }
  }

  pub fn reserve_amount() -> BoxedStrategy<u64> {
    (1_000_000u64..1_000_000_000_000_000u64).boxed()
  }

  pub fn swap_amount() -> BoxedStrategy<u64> {
    (1u64..1_000_000_000_000u64).boxed()
  }

  pub fn slippage_bps() -> BoxedStrategy<u64> {
    (0u64..=10_000u64).boxed()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mul_div_wide_intermediate() -> Result<()> {
    let max = u128::from(u64::MAX);
    assert_eq!(max, mul_div_floor(max, max, max)?);
    Ok(())
  }

  #[test]
  fn mul_div_zero_divisor() {
    assert_eq!(mul_div_floor(1, 1, 0), Err(DivisionByZero.into()));
  }

  #[test]
  fn mul_div_overflow_guard() {
    assert_eq!(
      mul_div_floor(u128::MAX, 2, 1),
      Err(ArithmeticOverflow.into())
    );
  }

  #[test]
  fn narrowing_overflow() {
    let too_big = u128::from(u64::MAX) + 1;
    assert_eq!(to_amount(too_big), Err(CastingOverflow.into()));
  }
}
