use anchor_lang::prelude::*;
use fix::prelude::*;
use serde::{Deserialize, Serialize};

use crate::amm_state::ReservePair;
use crate::error::CoreError::{DivisionByZero, InvalidArgument};
use crate::slippage_config::subtract_slippage;
use crate::util::{mul_div_floor, to_amount};

/// Expected token amounts from burning LP tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveLiquidityQuote {
  pub expected_base_out: u64,
  pub expected_quote_out: u64,
  pub min_base_out: Option<u64>,
  pub min_quote_out: Option<u64>,
}

/// Pro-rata share of one reserve for `lp_tokens_to_burn`.
///
/// ```txt
///             lp_tokens_to_burn * reserve
/// amount = --------------------------------
///                 lp_total_supply
/// ```
pub fn amount_to_withdraw(
  lp_tokens_to_burn: u64,
  reserve: u64,
  lp_total_supply: u64,
) -> Result<u64> {
  mul_div_floor(
    u128::from(lp_tokens_to_burn),
    u128::from(reserve),
    u128::from(lp_total_supply),
  )
  .and_then(to_amount)
}

/// Simulates redeeming `lp_tokens_to_burn` against the pool's reserves.
/// Slippage, if given, is applied to each side independently.
pub fn simulate_remove_liquidity(
  lp_tokens_to_burn: u64,
  reserves: ReservePair,
  lp_total_supply: u64,
  slippage: Option<UFix64<N4>>,
) -> Result<RemoveLiquidityQuote> {
  if lp_total_supply == 0 {
    return Err(DivisionByZero.into());
  }
  if lp_tokens_to_burn > lp_total_supply {
    return Err(InvalidArgument.into());
  }
  let expected_base_out = amount_to_withdraw(
    lp_tokens_to_burn,
    reserves.base_reserves,
    lp_total_supply,
  )?;
  let expected_quote_out = amount_to_withdraw(
    lp_tokens_to_burn,
    reserves.quote_reserves,
    lp_total_supply,
  )?;

  let (min_base_out, min_quote_out) = match slippage {
    Some(bps) => (
      Some(subtract_slippage(expected_base_out, bps)?),
      Some(subtract_slippage(expected_quote_out, bps)?),
    ),
    None => (None, None),
  };

  Ok(RemoveLiquidityQuote {
    expected_base_out,
    expected_quote_out,
    min_base_out,
    min_quote_out,
  })
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;

  use super::*;
  use crate::util::proptest::{pool_state, PoolState};

  fn supply() -> BoxedStrategy<u64> {
    (1u64..u64::MAX).boxed()
  }

  proptest! {
    #[test]
    fn full_redemption_is_exact(
      PoolState { reserves } in pool_state(()),
      lp_total_supply in supply(),
    ) {
      let quote = simulate_remove_liquidity(
        lp_total_supply,
        reserves,
        lp_total_supply,
        None,
      )?;
      prop_assert_eq!(quote.expected_base_out, reserves.base_reserves);
      prop_assert_eq!(quote.expected_quote_out, reserves.quote_reserves);
    }

    #[test]
    fn partial_redemption_bounded(
      PoolState { reserves } in pool_state(()),
      lp_total_supply in supply(),
      share in 0u64..=10_000u64,
    ) {
      let burn = amount_to_withdraw(share, lp_total_supply, 10_000)?;
      let quote = simulate_remove_liquidity(burn, reserves, lp_total_supply, None)?;
      prop_assert!(quote.expected_base_out <= reserves.base_reserves);
      prop_assert!(quote.expected_quote_out <= reserves.quote_reserves);
    }
  }

  #[test]
  fn half_with_slippage() -> Result<()> {
    let reserves = ReservePair::new(10_000_000_000, 10_000_000_000);
    let quote = simulate_remove_liquidity(
      500,
      reserves,
      1_000,
      Some(UFix64::new(100)),
    )?;
    assert_eq!(5_000_000_000, quote.expected_base_out);
    assert_eq!(5_000_000_000, quote.expected_quote_out);
    assert_eq!(Some(4_950_000_000), quote.min_base_out);
    assert_eq!(Some(4_950_000_000), quote.min_quote_out);
    Ok(())
  }

  #[test]
  fn slippage_per_side() -> Result<()> {
    let reserves = ReservePair::new(3, 1_000_001);
    let quote =
      simulate_remove_liquidity(1, reserves, 3, Some(UFix64::new(5_000)))?;
    assert_eq!(1, quote.expected_base_out);
    assert_eq!(333_333, quote.expected_quote_out);
    assert_eq!(Some(1), quote.min_base_out);
    assert_eq!(Some(166_667), quote.min_quote_out);
    Ok(())
  }

  #[test]
  fn zero_supply() {
    let reserves = ReservePair::new(1, 1);
    let out = simulate_remove_liquidity(0, reserves, 0, None);
    assert_eq!(out, Err(DivisionByZero.into()));
  }

  #[test]
  fn burn_exceeds_supply() {
    let reserves = ReservePair::new(1, 1);
    let out = simulate_remove_liquidity(11, reserves, 10, None);
    assert_eq!(out, Err(InvalidArgument.into()));
  }
}
