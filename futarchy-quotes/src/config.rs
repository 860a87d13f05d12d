use anyhow::{ensure, Result};
use fix::prelude::*;
use futarchy_core::swap_math::SwapCurve;
use serde::{Deserialize, Serialize};

use crate::program_ids::ProgramIds;

/// Slippage applied when the caller doesn't give one, 0.5%.
pub const DEFAULT_SLIPPAGE_BPS: u64 = 50;

/// Settings shared by every quote the [`crate::AmmQuoter`] produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
  pub program_ids: ProgramIds,
  pub default_slippage_bps: u64,
  pub curve: SwapCurve,
}

impl QuoteConfig {
  /// Slippage tolerance must be at most 100%.
  ///
  /// # Errors
  /// * `default_slippage_bps` above 10,000
  pub fn validate(&self) -> Result<()> {
    ensure!(
      self.default_slippage() <= UFix64::one(),
      "default slippage of {} bps exceeds 100%",
      self.default_slippage_bps
    );
    Ok(())
  }

  #[must_use]
  pub fn default_slippage(&self) -> UFix64<N4> {
    UFix64::new(self.default_slippage_bps)
  }
}

impl Default for QuoteConfig {
  fn default() -> Self {
    QuoteConfig {
      program_ids: ProgramIds::default(),
      default_slippage_bps: DEFAULT_SLIPPAGE_BPS,
      curve: SwapCurve::default(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::program_ids::AMM_PROGRAM_ID;

  #[test]
  fn partial_json_falls_back_to_defaults() -> Result<()> {
    let config: QuoteConfig =
      serde_json::from_str(r#"{ "curve": "reserve_scaled" }"#)?;
    assert_eq!(SwapCurve::ReserveScaled, config.curve);
    assert_eq!(DEFAULT_SLIPPAGE_BPS, config.default_slippage_bps);
    assert_eq!(AMM_PROGRAM_ID, config.program_ids.amm);
    config.validate()
  }

  #[test]
  fn program_ids_as_base58() -> Result<()> {
    let config: QuoteConfig = serde_json::from_str(
      r#"{ "program_ids": {
        "amm": "62BiVvL2o3dHYbSAjh1ywDTqC9rm7j9eg2PoRSSG9nEH",
        "conditional_vault": "VAU1T7S5UuEHmMvXtXMVmpEoQtZ2ya7eRb7gcN47wDp",
        "autocrat": "9eTG7xLyUSaab27EWxvhctNdCUntkZ3yD4qLfdh5KyTK"
      } }"#,
    )?;
    assert_eq!(
      "62BiVvL2o3dHYbSAjh1ywDTqC9rm7j9eg2PoRSSG9nEH",
      config.program_ids.amm.to_string()
    );
    Ok(())
  }

  #[test]
  fn slippage_over_one_hundred_percent() {
    let config = QuoteConfig {
      default_slippage_bps: 10_001,
      ..QuoteConfig::default()
    };
    assert!(config.validate().is_err());
  }
}
