//! Program and mint addresses the quoting layer is configured with.

use anchor_lang::prelude::{pubkey, Pubkey};
use serde::{Deserialize, Serialize};

pub const AMM_PROGRAM_ID: Pubkey =
  pubkey!("2aQRKvhnZHHD31pV13iYeY7zXsF7uyhraqBrxJ178wkQ");

pub const CONDITIONAL_VAULT_PROGRAM_ID: Pubkey =
  pubkey!("VAU1T7S5UuEHmMvXtXMVmpEoQtZ2ya7eRb7gcN47wDp");

pub const AUTOCRAT_PROGRAM_ID: Pubkey =
  pubkey!("9eTG7xLyUSaab27EWxvhctNdCUntkZ3yD4qLfdh5KyTK");

pub const META_MINT: Pubkey =
  pubkey!("3gN1WVEJwSHNWjo7hr87DgZp6zkf8kWgAJD29DmfE2Gr");

pub const MAINNET_USDC: Pubkey =
  pubkey!("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v");

pub const USDC_DECIMALS: u8 = 6;

/// Seed prefix of AMM pool accounts, followed by the base and quote mints.
pub const AMM_SEED_PREFIX: &[u8] = b"amm__";

/// Program IDs of one deployment. Deployments differ per network and per
/// program revision, so these travel with the configuration instead of being
/// baked into each client.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramIds {
  #[serde(with = "futarchy_core::util::serde_pubkey")]
  pub amm: Pubkey,
  #[serde(with = "futarchy_core::util::serde_pubkey")]
  pub conditional_vault: Pubkey,
  #[serde(with = "futarchy_core::util::serde_pubkey")]
  pub autocrat: Pubkey,
}

impl ProgramIds {
  #[must_use]
  pub fn with_amm(self, amm: Pubkey) -> ProgramIds {
    ProgramIds { amm, ..self }
  }

  /// Address of the pool trading `base_mint` against `quote_mint` under this
  /// deployment's AMM program.
  #[must_use]
  pub fn amm_address(
    &self,
    base_mint: &Pubkey,
    quote_mint: &Pubkey,
  ) -> Pubkey {
    Pubkey::find_program_address(
      &[AMM_SEED_PREFIX, base_mint.as_ref(), quote_mint.as_ref()],
      &self.amm,
    )
    .0
  }
}

impl Default for ProgramIds {
  fn default() -> Self {
    ProgramIds {
      amm: AMM_PROGRAM_ID,
      conditional_vault: CONDITIONAL_VAULT_PROGRAM_ID,
      autocrat: AUTOCRAT_PROGRAM_ID,
    }
  }
}
