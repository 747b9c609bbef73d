//! Payout calculator: turns two stakes and two oracle quotes into transfer
//! instructions. Pure integer arithmetic, no storage and no environment.

use crate::errors::ContractError;
use crate::types::{Outcome, Payout, PayoutRule, Share, WagerCondition, WagerTerms};

/// Decimal scale all prices are normalized to before comparison
pub const PRICE_DECIMALS: u32 = 8;

pub const BPS_DENOMINATOR: i128 = 10_000;

/// A deposited amount and the decimals of the token it is denominated in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stake {
    pub amount: i128,
    pub decimals: u32,
}

/// An oracle price and the decimals the feed reports with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub price: i128,
    pub decimals: u32,
}

fn pow10(exp: u32) -> Result<i128, ContractError> {
    10i128.checked_pow(exp).ok_or(ContractError::Overflow)
}

/// Rescales a quote to `PRICE_DECIMALS`, rounding down when precision is dropped
pub fn normalize(quote: &Quote) -> Result<i128, ContractError> {
    if quote.price <= 0 {
        return Err(ContractError::InvalidPrice);
    }

    let normalized = if quote.decimals >= PRICE_DECIMALS {
        quote.price / pow10(quote.decimals - PRICE_DECIMALS)?
    } else {
        quote.price
            .checked_mul(pow10(PRICE_DECIMALS - quote.decimals)?)
            .ok_or(ContractError::Overflow)?
    };

    // A sub-unit price that rounds to zero cannot be divided by
    if normalized == 0 {
        return Err(ContractError::InvalidPrice);
    }
    Ok(normalized)
}

/// Price of asset A expressed in units of asset B, at `PRICE_DECIMALS`
pub fn cross_price(quote_a: &Quote, quote_b: &Quote) -> Result<i128, ContractError> {
    let price_a = normalize(quote_a)?;
    let price_b = normalize(quote_b)?;

    let scaled = price_a
        .checked_mul(pow10(PRICE_DECIMALS)?)
        .ok_or(ContractError::Overflow)?;
    Ok(scaled / price_b)
}

/// Quoted value of a stake at `PRICE_DECIMALS`
fn value_of(stake: &Stake, quote: &Quote) -> Result<i128, ContractError> {
    let price = normalize(quote)?;
    let gross = stake.amount
        .checked_mul(price)
        .ok_or(ContractError::Overflow)?;
    Ok(gross / pow10(stake.decimals)?)
}

fn decide(
    stake_a: &Stake,
    stake_b: &Stake,
    quote_a: &Quote,
    quote_b: &Quote,
    condition: &WagerCondition,
) -> Result<Outcome, ContractError> {
    let a_wins = match condition {
        WagerCondition::CrossPriceAtLeast(threshold) => {
            cross_price(quote_a, quote_b)? >= *threshold
        },
        WagerCondition::CrossPriceBelow(threshold) => {
            cross_price(quote_a, quote_b)? < *threshold
        },
        WagerCondition::ValueExceeds => {
            let value_a = value_of(stake_a, quote_a)?;
            let value_b = value_of(stake_b, quote_b)?;
            if value_a == value_b {
                return Ok(Outcome::Draw);
            }
            value_a > value_b
        },
    };

    Ok(if a_wins { Outcome::PartyA } else { Outcome::PartyB })
}

/// Part of the loser's stake that moves to the winner
fn winnings(losing_stake: i128, rule: &PayoutRule) -> Result<i128, ContractError> {
    match rule {
        PayoutRule::WinnerTakesAll => Ok(losing_stake),
        PayoutRule::Split(bps) => {
            let numerator = losing_stake
                .checked_mul(*bps as i128)
                .ok_or(ContractError::Overflow)?;
            Ok(numerator / BPS_DENOMINATOR)
        },
    }
}

/// Computes who wins and how each escrowed asset is divided.
///
/// Every unit of both stakes is assigned to exactly one party, so the
/// instructions always drain the escrow and never exceed it.
pub fn compute(
    stake_a: &Stake,
    stake_b: &Stake,
    quote_a: &Quote,
    quote_b: &Quote,
    terms: &WagerTerms,
) -> Result<Payout, ContractError> {
    if stake_a.amount <= 0 || stake_b.amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    let outcome = decide(stake_a, stake_b, quote_a, quote_b, &terms.condition)?;

    let payout = match outcome {
        Outcome::Draw => Payout {
            outcome,
            to_a: Share { asset_a: stake_a.amount, asset_b: 0 },
            to_b: Share { asset_a: 0, asset_b: stake_b.amount },
        },
        Outcome::PartyA => {
            let won = winnings(stake_b.amount, &terms.payout_rule)?;
            Payout {
                outcome,
                to_a: Share { asset_a: stake_a.amount, asset_b: won },
                to_b: Share { asset_a: 0, asset_b: stake_b.amount - won },
            }
        },
        Outcome::PartyB => {
            let won = winnings(stake_a.amount, &terms.payout_rule)?;
            Payout {
                outcome,
                to_a: Share { asset_a: stake_a.amount - won, asset_b: 0 },
                to_b: Share { asset_a: won, asset_b: stake_b.amount },
            }
        },
    };

    Ok(payout)
}

/// Checks creation-time terms before they are stored
pub fn validate_terms(terms: &WagerTerms) -> Result<(), ContractError> {
    if terms.stake_a <= 0 || terms.stake_b <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    match terms.condition {
        WagerCondition::CrossPriceAtLeast(threshold) | WagerCondition::CrossPriceBelow(threshold) => {
            if threshold <= 0 {
                return Err(ContractError::InvalidTerms);
            }
        },
        WagerCondition::ValueExceeds => {},
    }

    if let PayoutRule::Split(bps) = terms.payout_rule {
        if bps == 0 || bps as i128 > BPS_DENOMINATOR {
            return Err(ContractError::InvalidTerms);
        }
    }

    Ok(())
}
