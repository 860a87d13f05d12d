use anchor_lang::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::CoreError::{BuyDisabled, InvalidReserves};
use crate::swap_math::SwapDirection;

/// `vault_status` of a pool whose proposal is still trading.
pub const VAULT_STATUS_ACTIVE: u8 = 0;

/// Reserves of an AMM pool at a point in time, in token base units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservePair {
  pub base_reserves: u64,
  pub quote_reserves: u64,
}

impl ReservePair {
  #[must_use]
  pub fn new(base_reserves: u64, quote_reserves: u64) -> ReservePair {
    ReservePair {
      base_reserves,
      quote_reserves,
    }
  }

  /// Both sides must be strictly positive before pricing against them.
  pub fn validate(&self) -> Result<()> {
    if self.base_reserves > 0 && self.quote_reserves > 0 {
      Ok(())
    } else {
      Err(InvalidReserves.into())
    }
  }

  /// Constant product `k = base * quote`, widened to avoid overflow.
  #[must_use]
  pub fn k(&self) -> u128 {
    u128::from(self.base_reserves) * u128::from(self.quote_reserves)
  }
}

/// Off-chain view of the AMM program's pool account.
///
/// Field order follows the account layout. Decoding the raw account bytes is
/// left to the caller; this type only carries the decoded values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmSnapshot {
  pub bump: u8,
  pub created_at_slot: u64,
  #[serde(with = "crate::util::serde_pubkey")]
  pub base_mint: Pubkey,
  #[serde(with = "crate::util::serde_pubkey")]
  pub quote_mint: Pubkey,
  pub base_mint_decimals: u8,
  pub quote_mint_decimals: u8,
  pub base_amount: u64,
  pub quote_amount: u64,
  pub v_quote_reserves: u64,
  pub v_base_reserves: u64,
  pub quote_reserves: u64,
  pub base_reserves: u64,
  pub vault_status: u8,
}

impl AmmSnapshot {
  /// Virtual reserves, which are what the pool prices against.
  #[must_use]
  pub fn virtual_reserves(&self) -> ReservePair {
    ReservePair::new(self.v_base_reserves, self.v_quote_reserves)
  }

  /// Reserves actually held in the pool vaults.
  #[must_use]
  pub fn actual_reserves(&self) -> ReservePair {
    ReservePair::new(self.base_reserves, self.quote_reserves)
  }

  /// Set once the proposal is finalized: 1 on the winning side's pool,
  /// 2 on the losing side's.
  #[must_use]
  pub fn is_finalized(&self) -> bool {
    self.vault_status != VAULT_STATUS_ACTIVE
  }

  /// Finalized pools only accept sells. Their sell output is unchanged; the
  /// program only skews its own `quote_amount` bookkeeping.
  pub fn ensure_swap_allowed(&self, direction: SwapDirection) -> Result<()> {
    match direction {
      SwapDirection::Buy if self.is_finalized() => Err(BuyDisabled.into()),
      _ => Ok(()),
    }
  }
}
