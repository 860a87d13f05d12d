//! Quotes for AMM swaps and liquidity removal from pool snapshots.

use anchor_lang::prelude::Pubkey;
use anyhow::{Context, Result};
use fix::prelude::*;
use fix::typenum::{Integer, N12};
use futarchy_core::amm_state::AmmSnapshot;
use futarchy_core::liquidity_math::{
  simulate_remove_liquidity, RemoveLiquidityQuote,
};
use futarchy_core::price_math;
use futarchy_core::slippage_config::SlippageConfig;
use futarchy_core::swap_math::{SwapDirection, SwapQuote};
use futarchy_core::twap::compute_twap;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::QuoteConfig;
use crate::quote_metadata::{Operation, QuoteMetadata};
use crate::reserve_provider::ReserveProvider;
use crate::swap_args::SwapArgs;

impl From<SwapDirection> for Operation {
  fn from(direction: SwapDirection) -> Self {
    match direction {
      SwapDirection::Buy => Operation::Buy,
      SwapDirection::Sell => Operation::Sell,
    }
  }
}

/// Swap quote with the instruction arguments that enforce it.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutableSwap {
  pub amm: Pubkey,
  pub quote: SwapQuote,
  pub args: SwapArgs,
  pub slippage_tolerance: UFix64<N4>,
  pub metadata: QuoteMetadata,
}

impl ExecutableSwap {
  /// Slippage check of an executed swap's output against this quote.
  #[must_use]
  pub fn slippage_config(&self) -> SlippageConfig {
    SlippageConfig::new(self.quote.expected_out, self.slippage_tolerance)
  }
}

/// Computes quotes against snapshots from a [`ReserveProvider`].
///
/// Swaps price against the pool's virtual reserves. Liquidity removal
/// redeems against the reserves actually held by the pool.
pub struct AmmQuoter<P: ReserveProvider> {
  provider: P,
  config: QuoteConfig,
}

impl<P: ReserveProvider> AmmQuoter<P> {
  #[must_use]
  pub fn new(provider: P) -> Self {
    AmmQuoter {
      provider,
      config: QuoteConfig::default(),
    }
  }

  /// # Errors
  /// * Invalid configuration
  pub fn with_config(provider: P, config: QuoteConfig) -> Result<Self> {
    config.validate()?;
    Ok(AmmQuoter { provider, config })
  }

  #[must_use]
  pub fn config(&self) -> &QuoteConfig {
    &self.config
  }

  /// Pool address for a mint pair under the configured AMM program.
  #[must_use]
  pub fn amm_address(
    &self,
    base_mint: &Pubkey,
    quote_mint: &Pubkey,
  ) -> Pubkey {
    self.config.program_ids.amm_address(base_mint, quote_mint)
  }

  async fn snapshot(&self, amm: &Pubkey) -> Result<AmmSnapshot> {
    self
      .provider
      .fetch_snapshot(amm)
      .await
      .with_context(|| format!("Failed to fetch AMM {amm}"))
  }

  /// Quotes a swap of `input_amount` base units.
  /// Falls back to the configured default slippage when none is given.
  ///
  /// # Errors
  /// * Snapshot fetch
  /// * Invalid reserves or arithmetic failure in the pricing engine
  /// * Buy on a finalized pool
  pub async fn quote_swap(
    &self,
    amm: &Pubkey,
    direction: SwapDirection,
    input_amount: u64,
    slippage: Option<UFix64<N4>>,
  ) -> Result<ExecutableSwap> {
    let snapshot = self.snapshot(amm).await?;
    self.quote_swap_on(amm, &snapshot, direction, input_amount, slippage)
  }

  /// Same as [`Self::quote_swap`] with the input in UI units of the mint
  /// being sold.
  ///
  /// # Errors
  /// * Snapshot fetch
  /// * Amount not representable in base units
  /// * Invalid reserves or arithmetic failure in the pricing engine
  pub async fn quote_swap_ui(
    &self,
    amm: &Pubkey,
    direction: SwapDirection,
    ui_amount: Decimal,
    slippage: Option<UFix64<N4>>,
  ) -> Result<ExecutableSwap> {
    let snapshot = self.snapshot(amm).await?;
    let decimals = match direction {
      SwapDirection::Buy => snapshot.quote_mint_decimals,
      SwapDirection::Sell => snapshot.base_mint_decimals,
    };
    let input_amount = price_math::scale(ui_amount, decimals)
      .with_context(|| format!("Cannot scale {ui_amount} to {decimals} decimals"))?;
    self.quote_swap_on(amm, &snapshot, direction, input_amount, slippage)
  }

  fn quote_swap_on(
    &self,
    amm: &Pubkey,
    snapshot: &AmmSnapshot,
    direction: SwapDirection,
    input_amount: u64,
    slippage: Option<UFix64<N4>>,
  ) -> Result<ExecutableSwap> {
    let slippage_tolerance =
      slippage.unwrap_or_else(|| self.config.default_slippage());
    let quote = self
      .config
      .curve
      .simulate_swap(
        input_amount,
        direction,
        snapshot.virtual_reserves(),
        Some(slippage_tolerance),
      )
      .with_context(|| format!("Swap simulation failed for AMM {amm}"))?;
    if let Err(err) = snapshot.ensure_swap_allowed(direction) {
      warn!(
        %amm,
        vault_status = snapshot.vault_status,
        "buy on finalized pool"
      );
      return Err(
        anyhow::Error::from(err).context(format!("AMM {amm} is finalized")),
      );
    }
    let args = SwapArgs::from_quote(direction, input_amount, &quote);
    let operation = Operation::from(direction);
    debug!(
      %amm,
      %operation,
      input_amount,
      expected_out = quote.expected_out,
      output_amount_min = args.output_amount_min,
      "quoted swap"
    );
    Ok(ExecutableSwap {
      amm: *amm,
      quote,
      args,
      slippage_tolerance,
      metadata: QuoteMetadata::new(
        operation,
        format!(
          "{operation} {input_amount} for {} on {amm}",
          quote.expected_out
        ),
      ),
    })
  }

  /// Quotes burning `lp_tokens_to_burn` of `lp_total_supply`.
  ///
  /// # Errors
  /// * Snapshot fetch
  /// * Zero or undersized LP supply
  pub async fn quote_remove_liquidity(
    &self,
    amm: &Pubkey,
    lp_tokens_to_burn: u64,
    lp_total_supply: u64,
    slippage: Option<UFix64<N4>>,
  ) -> Result<(RemoveLiquidityQuote, QuoteMetadata)> {
    let snapshot = self.snapshot(amm).await?;
    let slippage_tolerance =
      slippage.unwrap_or_else(|| self.config.default_slippage());
    let quote = simulate_remove_liquidity(
      lp_tokens_to_burn,
      snapshot.actual_reserves(),
      lp_total_supply,
      Some(slippage_tolerance),
    )
    .with_context(|| format!("Liquidity removal failed for AMM {amm}"))?;
    debug!(
      %amm,
      lp_tokens_to_burn,
      expected_base_out = quote.expected_base_out,
      expected_quote_out = quote.expected_quote_out,
      "quoted liquidity removal"
    );
    let metadata = QuoteMetadata::new(
      Operation::RemoveLiquidity,
      format!("burn {lp_tokens_to_burn} of {lp_total_supply} LP on {amm}"),
    );
    Ok((quote, metadata))
  }

  /// Instantaneous pool price at the scale chosen by `Exp`.
  ///
  /// # Errors
  /// * Snapshot fetch
  /// * Zero reserves
  pub async fn price<Exp: Integer>(
    &self,
    amm: &Pubkey,
  ) -> Result<UFix128<Exp>> {
    let snapshot = self.snapshot(amm).await?;
    let price = compute_twap(snapshot.virtual_reserves())
      .with_context(|| format!("Price read failed for AMM {amm}"))?;
    Ok(price)
  }

  /// Pool price as quote UI units per base UI unit.
  ///
  /// # Errors
  /// * Snapshot fetch
  /// * Zero reserves
  /// * Price beyond the range of a `Decimal`
  pub async fn ui_price(&self, amm: &Pubkey) -> Result<Decimal> {
    let snapshot = self.snapshot(amm).await?;
    let price = compute_twap::<N12>(snapshot.virtual_reserves())
      .with_context(|| format!("Price read failed for AMM {amm}"))?;
    let ui = price_math::human_price(
      price,
      snapshot.base_mint_decimals,
      snapshot.quote_mint_decimals,
    )
    .with_context(|| format!("Cannot express price of AMM {amm} in UI units"))?;
    Ok(ui)
  }

  /// Checks an executed swap's output against its quote.
  ///
  /// # Errors
  /// * Output below the quote's slippage bound
  pub fn validate_fill(&self, swap: &ExecutableSwap, token_out: u64) -> Result<()> {
    let config = swap.slippage_config();
    config.validate_token_out(token_out).map_err(|err| {
      warn!(
        amm = %swap.amm,
        expected_out = config.expected_token_out(),
        token_out,
        "swap output below slippage bound"
      );
      anyhow::Error::from(err)
    })
  }
}
