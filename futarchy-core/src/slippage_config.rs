use crate::error::CoreError::{InvalidArgument, SlippageExceeded};
use crate::util::{mul_div_floor, to_amount};

use anchor_lang::prelude::*;
use fix::prelude::*;

/// Lowest acceptable amount after allowing for `slippage` of `amount`.
///
/// Slippage is in basis points (`bips x 10^-4`) and must not exceed 100%.
///
/// ```txt
/// amount - floor(amount * slippage / 10_000)
/// ```
pub fn subtract_slippage(amount: u64, slippage: UFix64<N4>) -> Result<u64> {
  let one = UFix64::<N4>::one();
  if slippage > one {
    return Err(InvalidArgument.into());
  }
  let deduction = mul_div_floor(
    u128::from(amount),
    u128::from(slippage.bits),
    u128::from(one.bits),
  )?;
  // deduction <= amount since slippage <= 1
  to_amount(u128::from(amount) - deduction)
}

/// Client specified slippage tolerance paired with expected token amount.
#[derive(Copy, Clone, Debug)]
pub struct SlippageConfig {
  expected_token_out: u64,
  slippage_tolerance: UFix64<N4>,
}

impl SlippageConfig {
  #[must_use]
  pub fn new(
    expected_token_out: u64,
    slippage_tolerance: UFix64<N4>,
  ) -> SlippageConfig {
    SlippageConfig {
      expected_token_out,
      slippage_tolerance,
    }
  }

  #[must_use]
  pub fn expected_token_out(&self) -> u64 {
    self.expected_token_out
  }

  #[must_use]
  pub fn slippage_tolerance(&self) -> UFix64<N4> {
    self.slippage_tolerance
  }

  /// Lowest tolerable amount, which is what goes on the wire as
  /// `output_amount_min`.
  pub fn min_token_out(&self) -> Result<u64> {
    subtract_slippage(self.expected_token_out, self.slippage_tolerance)
  }

  /// Checks token amount against the configured lowest tolerable amount
  pub fn validate_token_out(&self, token_out: u64) -> Result<()> {
    if token_out >= self.min_token_out()? {
      Ok(())
    } else {
      Err(SlippageExceeded.into())
    }
  }
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;

  use super::*;
  use crate::util::proptest::slippage_bps;

  proptest! {
    #[test]
    fn slippage_bounds(amount in any::<u64>()) {
      prop_assert_eq!(subtract_slippage(amount, UFix64::zero())?, amount);
      prop_assert_eq!(subtract_slippage(amount, UFix64::one())?, 0);
    }

    #[test]
    fn slippage_never_exceeds_amount(
      amount in any::<u64>(),
      bps in slippage_bps(),
    ) {
      let out = subtract_slippage(amount, UFix64::new(bps))?;
      prop_assert!(out <= amount);
    }
  }

  #[test]
  fn slippage_floor_of_deduction() -> Result<()> {
    // 98_029_507 * 50 / 10_000 = 490_147.535, floored deduction
    let out = subtract_slippage(98_029_507, UFix64::new(50))?;
    assert_eq!(97_539_360, out);
    Ok(())
  }

  #[test]
  fn slippage_out_of_range() {
    let out = subtract_slippage(1_000, UFix64::new(10_001));
    assert_eq!(out, Err(InvalidArgument.into()));
  }

  #[test]
  fn slippage_neg() {
    let config = SlippageConfig::new(1_201_346, UFix64::new(20));
    let out = config.validate_token_out(1_198_942);
    assert_eq!(out, Err(SlippageExceeded.into()));
  }

  #[test]
  fn slippage_pos() {
    let config = SlippageConfig::new(99_411_501, UFix64::new(10));
    let out = config.validate_token_out(99_312_090);
    assert!(out.is_ok());
  }

  #[test]
  fn slippage_exact_minimum() -> Result<()> {
    let config = SlippageConfig::new(900_818_926, UFix64::new(100));
    let min = config.min_token_out()?;
    assert_eq!(891_810_737, min);
    assert!(config.validate_token_out(min).is_ok());
    assert_eq!(
      config.validate_token_out(min - 1),
      Err(SlippageExceeded.into())
    );
    Ok(())
  }
}
