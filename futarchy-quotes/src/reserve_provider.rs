//! Sources of AMM pool snapshots.
//!
//! Reading and decoding pool accounts from a ledger belongs to the caller;
//! the quoter only needs something that can hand it a decoded snapshot.

use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use futarchy_core::amm_state::AmmSnapshot;

/// Trait for fetching the current state of an AMM pool.
#[async_trait]
pub trait ReserveProvider: Send + Sync {
  /// Fetch the latest snapshot of the pool at `amm`.
  ///
  /// # Errors
  /// Returns error if the pool is unknown or fetching fails.
  async fn fetch_snapshot(&self, amm: &Pubkey) -> Result<AmmSnapshot>;
}

#[async_trait]
impl<T: ReserveProvider> ReserveProvider for std::sync::Arc<T> {
  async fn fetch_snapshot(&self, amm: &Pubkey) -> Result<AmmSnapshot> {
    (**self).fetch_snapshot(amm).await
  }
}

/// Serves snapshots held in memory, for offline quoting and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticReserveProvider {
  snapshots: HashMap<Pubkey, AmmSnapshot>,
}

impl StaticReserveProvider {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn with_snapshot(mut self, amm: Pubkey, snapshot: AmmSnapshot) -> Self {
    self.snapshots.insert(amm, snapshot);
    self
  }

  /// Replaces the snapshot for `amm`, returning the previous one.
  pub fn insert(
    &mut self,
    amm: Pubkey,
    snapshot: AmmSnapshot,
  ) -> Option<AmmSnapshot> {
    self.snapshots.insert(amm, snapshot)
  }
}

#[async_trait]
impl ReserveProvider for StaticReserveProvider {
  async fn fetch_snapshot(&self, amm: &Pubkey) -> Result<AmmSnapshot> {
    self
      .snapshots
      .get(amm)
      .copied()
      .ok_or_else(|| anyhow!("No snapshot for AMM {amm}"))
  }
}
