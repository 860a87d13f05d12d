//! Client-side quoting for the futarchy AMM.
//!
//! Quotes are advisory: the AMM program re-validates every swap on chain and
//! enforces `output_amount_min` atomically. Quoting here lets a caller pick a
//! sensible minimum before building the transaction.
//!
//! # Example
//!
//! ```rust,no_run
//! use anchor_lang::prelude::Pubkey;
//! use futarchy_core::amm_state::AmmSnapshot;
//! use futarchy_core::swap_math::SwapDirection;
//! use futarchy_quotes::{AmmQuoter, StaticReserveProvider};
//!
//! # async fn example(amm: Pubkey, snapshot: AmmSnapshot) -> anyhow::Result<()> {
//! let provider = StaticReserveProvider::new().with_snapshot(amm, snapshot);
//! let quoter = AmmQuoter::new(provider);
//!
//! // 100 USDC (6 decimals) into the base token, default 0.5% slippage
//! let swap = quoter
//!   .quote_swap(&amm, SwapDirection::Buy, 100_000_000, None)
//!   .await?;
//! let payload = swap.args.data()?;
//! # Ok(())
//! # }
//! ```

mod amm_quoter;
pub mod config;
pub mod program_ids;
mod quote_metadata;
mod reserve_provider;
mod swap_args;

pub use amm_quoter::{AmmQuoter, ExecutableSwap};
pub use config::QuoteConfig;
pub use program_ids::ProgramIds;
pub use quote_metadata::{Operation, QuoteMetadata};
pub use reserve_provider::{ReserveProvider, StaticReserveProvider};
pub use swap_args::SwapArgs;
