use anchor_lang::prelude::*;
use futarchy_core::swap_math::{SwapDirection, SwapQuote};

/// Arguments of the AMM program's `swap` instruction.
///
/// The program re-checks `output_amount_min` against the executed output and
/// fails the transaction if it falls short.
#[derive(Copy, Clone, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct SwapArgs {
  pub swap_type: SwapDirection,
  pub input_amount: u64,
  pub output_amount_min: u64,
}

impl SwapArgs {
  /// Guards the swap with the quote's slippage bound, or with the exact
  /// expected output if the quote was computed without one.
  #[must_use]
  pub fn from_quote(
    swap_type: SwapDirection,
    input_amount: u64,
    quote: &SwapQuote,
  ) -> SwapArgs {
    SwapArgs {
      swap_type,
      input_amount,
      output_amount_min: quote.min_expected_out.unwrap_or(quote.expected_out),
    }
  }

  /// Borsh encoding, without the instruction discriminator.
  ///
  /// # Errors
  /// * Serialization into the buffer
  pub fn data(&self) -> anyhow::Result<Vec<u8>> {
    let mut data = Vec::with_capacity(17);
    self.serialize(&mut data)?;
    Ok(data)
  }
}
