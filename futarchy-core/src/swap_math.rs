use anchor_lang::prelude::*;
use fix::prelude::*;
use serde::{Deserialize, Serialize};

use crate::amm_state::ReservePair;
use crate::error::CoreError::{ArithmeticOverflow, ArithmeticUnderflow};
use crate::slippage_config::subtract_slippage;
use crate::util::to_amount;

/// Share of the input kept after the 1% swap fee, out of [`FEE_SCALE`].
pub const FEE_COMPLEMENT: u128 = 99;

pub const FEE_SCALE: u128 = 100;

/// Side of the pool a swap trades against.
#[derive(
  Copy,
  Clone,
  Debug,
  PartialEq,
  Eq,
  AnchorSerialize,
  AnchorDeserialize,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SwapDirection {
  /// Swap quote tokens into base tokens
  Buy,
  /// Swap base tokens into quote tokens
  Sell,
}

impl SwapDirection {
  /// `(input_reserves, output_reserves)` for this direction.
  #[must_use]
  pub fn split(self, reserves: ReservePair) -> (u128, u128) {
    let base = u128::from(reserves.base_reserves);
    let quote = u128::from(reserves.quote_reserves);
    match self {
      SwapDirection::Buy => (quote, base),
      SwapDirection::Sell => (base, quote),
    }
  }

  #[must_use]
  pub fn reverse(self) -> SwapDirection {
    match self {
      SwapDirection::Buy => SwapDirection::Sell,
      SwapDirection::Sell => SwapDirection::Buy,
    }
  }
}

/// How the fee-adjusted input amount is derived before pricing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapCurve {
  /// Uniswap v1 style: `input * 99`.
  #[default]
  ConstantProduct,
  /// Input first rescaled by the reserve ratio:
  /// `input * quote / (base -+ input) * 99`.
  ReserveScaled,
}

/// Result of a simulated swap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapQuote {
  pub expected_out: u64,
  pub new_base_reserves: u64,
  pub new_quote_reserves: u64,
  pub min_expected_out: Option<u64>,
}

impl SwapQuote {
  #[must_use]
  pub fn new_reserves(&self) -> ReservePair {
    ReservePair::new(self.new_base_reserves, self.new_quote_reserves)
  }
}

impl SwapCurve {
  /// Input amount scaled by the fee complement, per curve.
  pub fn input_with_fee(
    self,
    input_amount: u64,
    direction: SwapDirection,
    reserves: ReservePair,
  ) -> Result<u128> {
    let input = u128::from(input_amount);
    let scaled = match self {
      SwapCurve::ConstantProduct => input,
      SwapCurve::ReserveScaled => {
        let base = u128::from(reserves.base_reserves);
        let quote = u128::from(reserves.quote_reserves);
        let divisor = match direction {
          SwapDirection::Buy => base
            .checked_sub(input)
            .filter(|d| *d > 0)
            .ok_or(ArithmeticUnderflow)?,
          SwapDirection::Sell => base + input,
        };
        input
          .checked_mul(quote)
          .map(|n| n / divisor)
          .ok_or(ArithmeticOverflow)?
      }
    };
    scaled
      .checked_mul(FEE_COMPLEMENT)
      .ok_or(ArithmeticOverflow.into())
  }

  /// Simulates a swap of `input_amount` against `reserves`.
  ///
  /// ```txt
  ///                   with_fee * output_reserves
  /// expected_out = ----------------------------------
  ///                 input_reserves * 100 + with_fee
  /// ```
  pub fn simulate_swap(
    self,
    input_amount: u64,
    direction: SwapDirection,
    reserves: ReservePair,
    slippage: Option<UFix64<N4>>,
  ) -> Result<SwapQuote> {
    reserves.validate()?;
    let (input_reserves, output_reserves) = direction.split(reserves);
    let with_fee = self.input_with_fee(input_amount, direction, reserves)?;

    let numerator = with_fee
      .checked_mul(output_reserves)
      .ok_or(ArithmeticOverflow)?;
    let denominator = input_reserves
      .checked_mul(FEE_SCALE)
      .and_then(|r| r.checked_add(with_fee))
      .ok_or(ArithmeticOverflow)?;
    let expected_out = to_amount(numerator / denominator)?;

    let min_expected_out = slippage
      .map(|bps| subtract_slippage(expected_out, bps))
      .transpose()?;

    let ReservePair {
      base_reserves,
      quote_reserves,
    } = reserves;
    let (new_base_reserves, new_quote_reserves) = match direction {
      SwapDirection::Buy => (
        base_reserves
          .checked_sub(expected_out)
          .ok_or(ArithmeticUnderflow)?,
        quote_reserves
          .checked_add(input_amount)
          .ok_or(ArithmeticOverflow)?,
      ),
      SwapDirection::Sell => (
        base_reserves
          .checked_add(input_amount)
          .ok_or(ArithmeticOverflow)?,
        quote_reserves
          .checked_sub(expected_out)
          .ok_or(ArithmeticUnderflow)?,
      ),
    };

    Ok(SwapQuote {
      expected_out,
      new_base_reserves,
      new_quote_reserves,
      min_expected_out,
    })
  }
}

/// Simulates a swap on the default constant product curve.
pub fn simulate_swap(
  input_amount: u64,
  direction: SwapDirection,
  reserves: ReservePair,
  slippage: Option<UFix64<N4>>,
) -> Result<SwapQuote> {
  SwapCurve::default().simulate_swap(input_amount, direction, reserves, slippage)
}
