use anchor_lang::prelude::error_code;

#[error_code]
pub enum CoreError {
  // `amm_state`
  #[msg("Reserves must be non-zero.")]
  InvalidReserves = 7000,
  // `swap_math`, `liquidity_math`, `twap`
  #[msg("Subtraction underflowed while computing a quote.")]
  ArithmeticUnderflow,
  #[msg("Multiplication or addition overflowed while computing a quote.")]
  ArithmeticOverflow,
  #[msg("Attempted division by a zero reserve or supply.")]
  DivisionByZero,
  #[msg("Quote result does not fit in a token amount.")]
  CastingOverflow,
  #[msg("Argument is outside its accepted range.")]
  InvalidArgument,
  // `slippage_config`
  #[msg("Token output amount exceeds provided slippage configuration.")]
  SlippageExceeded,
  // `price_math`
  #[msg("Decimal amount cannot be represented in token base units.")]
  DecimalConversion,
  // `amm_state`
  #[msg("Buys are disabled once the pool's proposal is finalized.")]
  BuyDisabled,
}
