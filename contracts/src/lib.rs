#![no_std]
//! # Collateralized Two-Party Price Wager
//!
//! Soroban contract escrowing one asset from each of two fixed parties and
//! settling the combined stake against two price feeds.
//!
//! ## Key Features
//! - Phase-gated lifecycle: Created, PartiallyFunded, Funded, then Settled or Cancelled
//! - Deposits pull the exact committed stake through the token interface
//! - Staleness-checked oracle reads before any payout
//! - Fixed-point, checked payout arithmetic with configurable condition and split

mod asset;
mod contract;
mod errors;
mod escrow;
mod events;
mod oracle;
mod payout;
mod storage;
mod types;

#[cfg(test)]
mod tests;

pub use contract::{BetContract, BetContractClient};
pub use errors::ContractError;
pub use oracle::{PriceData, PriceFeed, PriceFeedClient};
pub use payout::{compute, cross_price, Quote, Stake, BPS_DENOMINATOR, PRICE_DECIMALS};
pub use types::{
    DataKey, Outcome, Party, Payout, PayoutRule, Phase, PriceReading, Share, Wager,
    WagerCondition, WagerTerms,
};
