//! Quote metadata types

/// Operation type for a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
  Buy,
  Sell,
  RemoveLiquidity,
}

impl Operation {
  #[must_use]
  pub const fn as_str(&self) -> &'static str {
    match self {
      Operation::Buy => "swap_buy",
      Operation::Sell => "swap_sell",
      Operation::RemoveLiquidity => "remove_liquidity",
    }
  }
}

impl AsRef<str> for Operation {
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}

impl std::fmt::Display for Operation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Metadata for a quote route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteMetadata {
  /// The operation this quote represents
  pub operation: Operation,

  /// Human-readable description naming the pool and amounts
  pub description: String,
}

impl QuoteMetadata {
  #[must_use]
  pub fn new(operation: Operation, description: impl Into<String>) -> Self {
    Self {
      operation,
      description: description.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn operation_names() {
    assert_eq!("swap_buy", Operation::Buy.to_string());
    assert_eq!("swap_sell", Operation::Sell.as_ref());
    assert_eq!("remove_liquidity", Operation::RemoveLiquidity.as_str());
  }
}
