#![allow(clippy::missing_errors_doc)]
#![allow(clippy::wildcard_imports)]

pub mod amm_state;
pub mod error;
pub mod liquidity_math;
pub mod price_math;
pub mod slippage_config;
pub mod swap_math;
pub mod twap;
pub mod util;
